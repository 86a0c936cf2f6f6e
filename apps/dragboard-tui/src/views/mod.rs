//! TUI views

mod form_view;
mod list_view;

pub use form_view::ProjectForm;
pub use list_view::ProjectListView;
