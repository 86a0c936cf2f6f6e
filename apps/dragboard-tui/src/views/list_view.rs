//! Status column view
//!
//! One instance per board column. The view subscribes to the store with a
//! status filter; every notification replaces its cached partition
//! wholesale, in snapshot order. Rendering always draws from the cache, so
//! the screen changes exactly when the store does.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use dragboard_core::{DragPayload, DragSource, DragTarget, Project, ProjectStatus, ProjectStore};

/// One rendered board column
pub struct ProjectListView {
    /// Column this view renders
    pub status: ProjectStatus,
    /// Column heading
    title: String,
    /// Partition cache, replaced wholesale on every store notification
    items: Rc<RefCell<Vec<Project>>>,
    /// Selected row
    selected: usize,
    /// Droppable affordance for the drag gesture in flight
    droppable: bool,
}

impl ProjectListView {
    /// Create a detached view for one column
    pub fn new(status: ProjectStatus, title: String) -> Self {
        Self {
            status,
            title,
            items: Rc::new(RefCell::new(Vec::new())),
            selected: 0,
            droppable: false,
        }
    }

    /// Register this view's partition listener with the store.
    ///
    /// The listener keeps only the projects matching this column's status,
    /// in snapshot order. The cache stays empty until the first
    /// notification.
    pub fn attach(&self, store: &mut ProjectStore) {
        let status = self.status;
        let items = Rc::clone(&self.items);
        store.subscribe(Box::new(move |snapshot| {
            *items.borrow_mut() = snapshot
                .iter()
                .filter(|p| p.status == status)
                .cloned()
                .collect();
        }));
    }

    /// Number of projects in this column
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// The project under the selection, if any
    pub fn selected_project(&self) -> Option<Project> {
        self.items.borrow().get(self.selected).cloned()
    }

    /// Move the selection down, wrapping
    pub fn select_next(&mut self) {
        let len = self.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the selection up, wrapping
    pub fn select_prev(&mut self) {
        let len = self.len();
        if len > 0 {
            if self.selected > 0 {
                self.selected -= 1;
            } else {
                self.selected = len - 1;
            }
        }
    }

    /// Pull the selection back in range after the partition shrank
    pub fn clamp_selection(&mut self) {
        let len = self.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Whether the column currently advertises itself as a drop target
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Render the column
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let items = self.items.borrow();

        let rows: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let title_style = if focused && i == self.selected {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(project.title.clone(), title_style),
                        Span::styled(
                            format!("  {}", project.headcount_label()),
                            Style::default().fg(Color::Cyan),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", project.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let border_style = if self.droppable {
            Style::default().fg(Color::Green)
        } else if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let heading = format!("{} ({})", self.title, items.len());
        let list = List::new(rows).block(
            Block::default()
                .title(heading)
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        frame.render_widget(list, area);
    }
}

impl DragSource for ProjectListView {
    fn drag_start(&self) -> Option<DragPayload> {
        self.selected_project().map(|p| DragPayload::for_item(p.id))
    }
}

impl DragTarget for ProjectListView {
    fn drag_over(&mut self, payload: &DragPayload) -> bool {
        self.droppable = payload.is_item_transfer();
        self.droppable
    }

    fn drop_payload(&mut self, payload: &DragPayload, store: &mut ProjectStore) {
        if let Some(id) = payload.item_id() {
            store.change_status(id, self.status);
        }
        self.droppable = false;
    }

    fn drag_leave(&mut self) {
        self.droppable = false;
    }
}
