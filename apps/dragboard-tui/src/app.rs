//! Application state and main render loop
//!
//! `App` is the composition root: it owns the one `ProjectStore` of the
//! running application and wires both column views to it, routes keys per
//! mode, and drives the drag gesture from pick-up to drop.

use crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use dragboard_core::{
    BoardConfig, DragPayload, DragSource, DragTarget, ProjectStatus, ProjectStore,
    ValidationLimits,
};

use crate::keybindings::{drag_mode_action, normal_mode_action, Action, DragAction};
use crate::mode::Mode;
use crate::views::{ProjectForm, ProjectListView};
use crate::widgets::StatusBar;

/// Main application state
pub struct App {
    /// Current mode (NORMAL, INSERT, DRAG)
    pub mode: Mode,
    /// The one store of the running application
    store: ProjectStore,
    /// Left column
    active_view: ProjectListView,
    /// Right column
    finished_view: ProjectListView,
    /// New-project form
    form: ProjectForm,
    /// Form validation limits
    limits: ValidationLimits,
    /// Payload of the drag gesture in flight
    drag: Option<DragPayload>,
    /// Column the gesture started from
    drag_from: ProjectStatus,
    /// Column hovered as the drop target
    hover: ProjectStatus,
    /// Column with keyboard focus
    focus: ProjectStatus,
    /// Transient status message
    status_message: Option<String>,
    /// Whether to show the help overlay
    show_help: bool,
}

impl App {
    /// Create the application: one store, both views attached to it
    pub fn new(config: BoardConfig) -> Self {
        let BoardConfig { limits, ui } = config;

        let mut store = ProjectStore::new();
        let active_view = ProjectListView::new(ProjectStatus::Active, ui.active_title);
        let finished_view = ProjectListView::new(ProjectStatus::Finished, ui.finished_title);
        active_view.attach(&mut store);
        finished_view.attach(&mut store);

        Self {
            mode: Mode::Normal,
            store,
            active_view,
            finished_view,
            form: ProjectForm::new(),
            limits,
            drag: None,
            drag_from: ProjectStatus::Active,
            hover: ProjectStatus::Finished,
            focus: ProjectStatus::Active,
            status_message: None,
            show_help: false,
        }
    }

    fn view(&self, status: ProjectStatus) -> &ProjectListView {
        match status {
            ProjectStatus::Active => &self.active_view,
            ProjectStatus::Finished => &self.finished_view,
        }
    }

    fn view_mut(&mut self, status: ProjectStatus) -> &mut ProjectListView {
        match status {
            ProjectStatus::Active => &mut self.active_view,
            ProjectStatus::Finished => &mut self.finished_view,
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Status bar at top, columns in the middle, hint line at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Columns
                Constraint::Length(1), // Hint line
            ])
            .split(size);

        let bar = StatusBar::new(
            self.mode,
            self.active_view.len(),
            self.finished_view.len(),
            self.status_message.as_deref(),
        );
        frame.render_widget(bar, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        for (i, status) in ProjectStatus::ALL.into_iter().enumerate() {
            self.view(status)
                .render(frame, columns[i], self.is_highlighted(status));
        }

        self.render_hint_line(frame, chunks[2]);

        if self.mode == Mode::Insert {
            self.form.render(frame, centered_rect(50, 60, size));
        }

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    /// Which column is visually highlighted: the hover target while
    /// dragging, the focused column otherwise
    fn is_highlighted(&self, status: ProjectStatus) -> bool {
        match self.mode {
            Mode::Drag => self.hover == status,
            _ => self.focus == status,
        }
    }

    fn render_hint_line(&self, frame: &mut Frame, area: Rect) {
        let hint = match self.mode {
            Mode::Normal => "n new | j/k select | h/l column | Space pick up | ? help | q quit",
            Mode::Insert => "Tab next field | Enter submit | Esc close",
            Mode::Drag => "h/l choose column | Enter drop | Esc cancel",
        };
        let paragraph = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
dragboard - Help

The board has two columns: ACTIVE holds projects being worked on,
FINISHED holds projects that are done.

Navigation:
  j/k     - Move the selection within the focused column
  h/l     - Focus the left/right column
  Tab     - Focus the other column

New project:
  n       - Open the form (title, description, headcount)
            Submitting runs the validation rules; a rejected
            submission never reaches the board.

Moving a project:
  Space   - Pick up the selected project
  h/l     - Choose the destination column while dragging
  Enter   - Drop it there
  Esc     - Cancel, nothing moves

Other:
  ?       - Toggle this help
  q       - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    /// Handle a key press, returns true if the app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code, modifiers),
            Mode::Insert => self.handle_insert_key(code),
            Mode::Drag => self.handle_drag_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };
        match action {
            Action::Quit => return true,
            Action::NewProject => {
                self.mode = Mode::Insert;
                self.status_message = None;
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::MoveDown => {
                let focus = self.focus;
                self.view_mut(focus).select_next();
            }
            Action::MoveUp => {
                let focus = self.focus;
                self.view_mut(focus).select_prev();
            }
            Action::ColumnLeft => self.focus = ProjectStatus::Active,
            Action::ColumnRight => self.focus = ProjectStatus::Finished,
            Action::ColumnNext => self.focus = self.focus.other(),
            Action::PickUp => self.pick_up(),
        }
        false
    }

    fn handle_insert_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                if self.form.submit(&mut self.store, &self.limits).is_some() {
                    self.active_view.clamp_selection();
                    self.mode = Mode::Normal;
                    self.status_message = Some("Project added".to_string());
                }
                // A rejected submission keeps the form open; the message is
                // rendered inline.
            }
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.input_char(c),
            _ => {}
        }
        false
    }

    fn handle_drag_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = drag_mode_action(code) else {
            return false;
        };
        match action {
            DragAction::ColumnLeft => self.hover_to(ProjectStatus::Active),
            DragAction::ColumnRight => self.hover_to(ProjectStatus::Finished),
            DragAction::ColumnNext => {
                let target = self.hover.other();
                self.hover_to(target);
            }
            DragAction::Drop => self.finish_drop(),
            DragAction::Cancel => self.cancel_drag(),
        }
        false
    }

    /// Start a drag from the focused column's selection.
    ///
    /// The hover starts on the other column, the usual destination; dropping
    /// back onto the source column is still allowed.
    fn pick_up(&mut self) {
        match self.view(self.focus).drag_start() {
            Some(payload) => {
                debug!(from = %self.focus, "drag started");
                self.drag_from = self.focus;
                let target = self.focus.other();
                self.view_mut(target).drag_over(&payload);
                self.hover = target;
                self.drag = Some(payload);
                self.mode = Mode::Drag;
                self.status_message = Some("Enter to drop, Esc to cancel".to_string());
            }
            None => {
                self.status_message = Some("Nothing to pick up here".to_string());
            }
        }
    }

    /// Move the hover to another column: drag-leave the old target,
    /// drag-over the new one
    fn hover_to(&mut self, target: ProjectStatus) {
        if target == self.hover {
            return;
        }
        let Some(payload) = self.drag.clone() else {
            return;
        };
        let previous = self.hover;
        self.view_mut(previous).drag_leave();
        self.view_mut(target).drag_over(&payload);
        self.hover = target;
    }

    /// Drop on the hovered column; the only mutating step of the gesture
    fn finish_drop(&mut self) {
        if let Some(payload) = self.drag.take() {
            debug!(to = %self.hover, "drag dropped");
            match self.hover {
                ProjectStatus::Active => {
                    self.active_view.drop_payload(&payload, &mut self.store)
                }
                ProjectStatus::Finished => {
                    self.finished_view.drop_payload(&payload, &mut self.store)
                }
            }
            let from = self.drag_from;
            self.view_mut(from).drag_end();
            self.active_view.clamp_selection();
            self.finished_view.clamp_selection();
            self.focus = self.hover;
            self.status_message = Some(format!("Moved to {}", self.hover.name()));
        }
        self.mode = Mode::Normal;
    }

    /// Abandon the gesture; nothing moves
    fn cancel_drag(&mut self) {
        let hover = self.hover;
        self.view_mut(hover).drag_leave();
        if self.drag.take().is_some() {
            debug!("drag cancelled");
            let from = self.drag_from;
            self.view_mut(from).drag_end();
        }
        self.mode = Mode::Normal;
        self.status_message = Some("Drag cancelled".to_string());
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragboard_core::ProjectId;

    fn new_app() -> App {
        App::new(BoardConfig::default())
    }

    fn key(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    fn seed(app: &mut App, title: &str) -> ProjectId {
        app.store
            .add(title.to_string(), "some description".to_string(), 3)
    }

    #[test]
    fn test_quit_key() {
        let mut app = new_app();
        assert!(key(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_form_flow_adds_project() {
        let mut app = new_app();

        key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::Insert);

        type_str(&mut app, "Build shed");
        key(&mut app, KeyCode::Tab);
        type_str(&mut app, "Construct a 10x10 shed");
        key(&mut app, KeyCode::Tab);
        type_str(&mut app, "4");
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.active_view.len(), 1);
        assert!(app.finished_view.is_empty());
    }

    #[test]
    fn test_form_rejection_keeps_board_empty() {
        let mut app = new_app();

        key(&mut app, KeyCode::Char('n'));
        // leave the title empty
        key(&mut app, KeyCode::Tab);
        type_str(&mut app, "ok");
        key(&mut app, KeyCode::Tab);
        type_str(&mut app, "5");
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Insert, "rejection keeps the form open");
        assert!(app.store.is_empty());
        assert!(app.active_view.is_empty());
        assert!(app.finished_view.is_empty());
        assert!(app.form.error().is_some());
    }

    #[test]
    fn test_drag_drop_moves_project() {
        let mut app = new_app();
        let id = seed(&mut app, "Build shed");

        key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, Mode::Drag);
        assert_eq!(app.hover, ProjectStatus::Finished);
        assert!(app.finished_view.is_droppable());

        key(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.store.get(id).unwrap().status, ProjectStatus::Finished);
        assert!(app.active_view.is_empty());
        assert_eq!(app.finished_view.len(), 1);
        assert_eq!(app.focus, ProjectStatus::Finished);
        assert!(!app.finished_view.is_droppable());
    }

    #[test]
    fn test_drag_cancel_moves_nothing() {
        let mut app = new_app();
        let id = seed(&mut app, "Build shed");

        key(&mut app, KeyCode::Char(' '));
        key(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.store.get(id).unwrap().status, ProjectStatus::Active);
        assert_eq!(app.active_view.len(), 1);
        assert!(app.finished_view.is_empty());
        assert!(!app.finished_view.is_droppable());
    }

    #[test]
    fn test_drag_hover_switches_columns() {
        let mut app = new_app();
        seed(&mut app, "Build shed");

        key(&mut app, KeyCode::Char(' '));
        assert!(app.finished_view.is_droppable());

        key(&mut app, KeyCode::Char('h'));
        assert_eq!(app.hover, ProjectStatus::Active);
        assert!(app.active_view.is_droppable());
        assert!(!app.finished_view.is_droppable());

        key(&mut app, KeyCode::Char('l'));
        assert_eq!(app.hover, ProjectStatus::Finished);
        assert!(app.finished_view.is_droppable());
        assert!(!app.active_view.is_droppable());
    }

    #[test]
    fn test_drop_back_on_source_column_keeps_one_copy() {
        let mut app = new_app();
        let id = seed(&mut app, "Build shed");

        key(&mut app, KeyCode::Char(' '));
        key(&mut app, KeyCode::Char('h'));
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.get(id).unwrap().status, ProjectStatus::Active);
        assert_eq!(app.active_view.len(), 1);
        assert!(app.finished_view.is_empty());
    }

    #[test]
    fn test_pick_up_on_empty_column_stays_normal() {
        let mut app = new_app();
        key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.drag.is_none());
    }
}
