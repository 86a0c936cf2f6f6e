//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Open the new-project form
    NewProject,
    /// Toggle help
    ToggleHelp,
    /// Move selection up
    MoveUp,
    /// Move selection down
    MoveDown,
    /// Focus the active (left) column
    ColumnLeft,
    /// Focus the finished (right) column
    ColumnRight,
    /// Focus the other column
    ColumnNext,
    /// Pick up the selected project (start a drag)
    PickUp,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('n') => Some(Action::NewProject),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::ColumnLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::ColumnRight),
        KeyCode::Tab => Some(Action::ColumnNext),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::PickUp),
        _ => None,
    }
}

/// Keybinding action while a drag gesture is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    /// Hover the active (left) column
    ColumnLeft,
    /// Hover the finished (right) column
    ColumnRight,
    /// Hover the other column
    ColumnNext,
    /// Drop on the hovered column
    Drop,
    /// Cancel the gesture without dropping
    Cancel,
}

/// Get the action for a key in drag mode
pub fn drag_mode_action(code: KeyCode) -> Option<DragAction> {
    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(DragAction::ColumnLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(DragAction::ColumnRight),
        KeyCode::Tab => Some(DragAction::ColumnNext),
        KeyCode::Char(' ') | KeyCode::Enter => Some(DragAction::Drop),
        KeyCode::Esc => Some(DragAction::Cancel),
        _ => None,
    }
}
