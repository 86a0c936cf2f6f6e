//! Status bar widget
//!
//! One line at the top of the screen: a colored mode badge, the per-column
//! counts, and the transient status message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::mode::Mode;

/// Top-of-screen status line
pub struct StatusBar<'a> {
    mode: Mode,
    active_count: usize,
    finished_count: usize,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        mode: Mode,
        active_count: usize,
        finished_count: usize,
        message: Option<&'a str>,
    ) -> Self {
        Self {
            mode,
            active_count,
            finished_count,
            message,
        }
    }

    /// Get the badge color for a mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Insert => Color::Green,
            Mode::Drag => Color::Yellow,
        }
    }

    /// The assembled status line
    pub fn line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                format!("[{}]", self.mode.short_code()),
                Style::default()
                    .fg(Color::White)
                    .bg(Self::mode_color(self.mode))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" dragboard | "),
            Span::raw(format!(
                "{} active, {} finished",
                self.active_count, self.finished_count
            )),
        ];
        if let Some(message) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                message.to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_colors() {
        assert_eq!(StatusBar::mode_color(Mode::Normal), Color::Blue);
        assert_eq!(StatusBar::mode_color(Mode::Insert), Color::Green);
        assert_eq!(StatusBar::mode_color(Mode::Drag), Color::Yellow);
    }

    #[test]
    fn test_line_contents() {
        let bar = StatusBar::new(Mode::Normal, 3, 1, Some("Project added"));
        let text: String = bar
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("[NOR]"));
        assert!(text.contains("3 active, 1 finished"));
        assert!(text.contains("Project added"));
    }
}
