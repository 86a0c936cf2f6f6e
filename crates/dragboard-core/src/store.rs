//! Observable project store
//!
//! The single authoritative holder of all projects. Views subscribe with a
//! callback and receive a snapshot of the full collection, in insertion
//! order, after every mutation. Notification is synchronous and runs on the
//! same call stack as the mutating operation.

use tracing::debug;

use crate::project::{Project, ProjectId, ProjectStatus};

/// Subscriber callback, invoked with a snapshot after every mutation.
///
/// Listeners receive a defensive copy; nothing they do with it can reach the
/// store's own sequence. Listeners must not call back into the store.
pub type Listener = Box<dyn FnMut(&[Project])>;

/// The single authoritative holder of all projects
///
/// The sequence is append-only and keeps insertion order; the only field
/// that ever changes on a stored project is its status. One store exists
/// per running application, owned by the composition root.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    /// Create an empty store with no subscribers
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Add a new project in the Active column and notify all subscribers.
    ///
    /// Arguments are assumed to be validated already; this operation does
    /// not fail.
    pub fn add(&mut self, title: String, description: String, headcount: u32) -> ProjectId {
        let project = Project::new(title, description, headcount);
        let id = project.id;
        debug!(%id, title = %project.title, "project added");
        self.projects.push(project);
        self.notify();
        id
    }

    /// Move a project to the given column and notify all subscribers.
    ///
    /// An unknown id is a silent no-op. A found id always notifies, even
    /// when the status is already the requested one.
    pub fn change_status(&mut self, id: ProjectId, status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "status change for unknown project ignored");
            return;
        };
        project.status = status;
        debug!(%id, %status, "project status changed");
        self.notify();
    }

    /// Register a listener for all future notifications.
    ///
    /// No replay: the listener first fires on the next mutation, not at
    /// subscription time.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// All projects, in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by id
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Number of projects across both columns
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if the board is empty
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Invoke every listener, in registration order, with one shared snapshot.
    fn notify(&mut self) {
        let snapshot = self.projects.clone();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
