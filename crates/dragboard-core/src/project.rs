//! Project domain model
//!
//! A project is one card on the board: a title, a description, the number
//! of people assigned to it, and the column it currently sits in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId {
    /// The underlying UUID value
    pub value: Uuid,
}

impl ProjectId {
    /// Create a new random project ID
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
        }
    }

    /// Create a project ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self { value: uuid }
    }

    /// Parse a project ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self {
            value: Uuid::parse_str(s)?,
        })
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Which of the two board columns a project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Project is being worked on
    Active,
    /// Project is done
    Finished,
}

impl ProjectStatus {
    /// Both statuses, in board order (left column first)
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Finished => "Finished",
        }
    }

    /// The other column
    pub fn other(&self) -> ProjectStatus {
        match self {
            ProjectStatus::Active => ProjectStatus::Finished,
            ProjectStatus::Finished => ProjectStatus::Active,
        }
    }

    /// Check if the project is in the finished column
    pub fn is_finished(&self) -> bool {
        matches!(self, ProjectStatus::Finished)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A unit of work tracked on the board
///
/// Identity never changes. Every field except `status` is fixed at creation;
/// there is no edit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// Short title shown on the card
    pub title: String,
    /// Longer description of the work
    pub description: String,
    /// Number of people assigned (at least 1)
    pub headcount: u32,
    /// Column the project currently belongs to
    pub status: ProjectStatus,
    /// Creation time
    pub created: DateTime<Utc>,
}

impl Project {
    /// Create a new project in the Active column
    pub fn new(title: String, description: String, headcount: u32) -> Self {
        Self {
            id: ProjectId::new(),
            title,
            description,
            headcount,
            status: ProjectStatus::Active,
            created: Utc::now(),
        }
    }

    /// Label for the assigned headcount ("1 person" / "4 persons")
    pub fn headcount_label(&self) -> String {
        if self.headcount == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.headcount)
        }
    }
}
