//! New project form
//!
//! Modal three-field form. Validation runs on submit; the store is only
//! invoked with input that passed every rule, and a rejected submission
//! shows its message inline without touching the store.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use dragboard_core::{validate_draft, ProjectId, ProjectStore, ValidationLimits};

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    Headcount,
}

impl Field {
    fn next(self) -> Field {
        match self {
            Field::Title => Field::Description,
            Field::Description => Field::Headcount,
            Field::Headcount => Field::Title,
        }
    }

    fn prev(self) -> Field {
        match self {
            Field::Title => Field::Headcount,
            Field::Description => Field::Title,
            Field::Headcount => Field::Description,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Headcount => "Headcount",
        }
    }
}

/// State of the new-project form
pub struct ProjectForm {
    title: String,
    description: String,
    headcount: String,
    focus: Field,
    /// Rejection message from the last failed submit
    error: Option<String>,
}

impl ProjectForm {
    /// Create an empty form with the title field focused
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            headcount: String::new(),
            focus: Field::Title,
            error: None,
        }
    }

    /// Reset all fields and the focus
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.headcount.clear();
        self.focus = Field::Title;
        self.error = None;
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        self.error = None;
        self.focused_value_mut().push(c);
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.error = None;
        self.focused_value_mut().pop();
    }

    /// The rejection message from the last failed submit, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the raw fields and, on success, add the project.
    ///
    /// On failure the store is never invoked; the message is kept for
    /// rendering and the entered values stay put.
    pub fn submit(
        &mut self,
        store: &mut ProjectStore,
        limits: &ValidationLimits,
    ) -> Option<ProjectId> {
        match validate_draft(&self.title, &self.description, &self.headcount, limits) {
            Ok(draft) => {
                let id = store.add(draft.title, draft.description, draft.headcount);
                self.clear();
                Some(id)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Headcount => &mut self.headcount,
        }
    }

    fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Headcount => &self.headcount,
        }
    }

    /// Render the form as a modal overlay
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default().title("New Project").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Description
                Constraint::Length(3), // Headcount
                Constraint::Length(1), // Error / hint
            ])
            .split(inner);

        for (row, field) in [Field::Title, Field::Description, Field::Headcount]
            .into_iter()
            .enumerate()
        {
            let focused = field == self.focus;
            let border_style = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            let mut value = self.field_value(field).to_string();
            if focused {
                value.push('_');
            }
            let input = Paragraph::new(value).block(
                Block::default()
                    .title(field.label())
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            frame.render_widget(input, rows[row]);
        }

        let footer = match &self.error {
            Some(message) => Span::styled(
                message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                "Tab next field | Enter submit | Esc close",
                Style::default().fg(Color::DarkGray),
            ),
        };
        frame.render_widget(Paragraph::new(footer), rows[3]);
    }
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new()
    }
}
