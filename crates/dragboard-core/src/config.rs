//! Board configuration
//!
//! Optional TOML configuration layered over defaults. The defaults match
//! the built-in form rules and column headings, so running without a config
//! file changes nothing.
//!
//! ```toml
//! [limits]
//! description_min_len = 5
//! headcount_min = 2
//! headcount_max = 8
//!
//! [ui]
//! active_title = "ACTIVE PROJECTS"
//! finished_title = "FINISHED PROJECTS"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::project::ProjectStatus;

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),
}

/// Limits applied by form validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Minimum description length in characters
    pub description_min_len: usize,
    /// Smallest allowed headcount
    pub headcount_min: u32,
    /// Largest allowed headcount
    pub headcount_max: u32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            description_min_len: 5,
            headcount_min: 2,
            headcount_max: 8,
        }
    }
}

/// Presentation settings for the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Heading of the left column
    pub active_title: String,
    /// Heading of the right column
    pub finished_title: String,
}

impl UiConfig {
    /// Heading for the given column
    pub fn column_title(&self, status: ProjectStatus) -> &str {
        match status {
            ProjectStatus::Active => &self.active_title,
            ProjectStatus::Finished => &self.finished_title,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            active_title: "ACTIVE PROJECTS".to_string(),
            finished_title: "FINISHED PROJECTS".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Form validation limits
    pub limits: ValidationLimits,
    /// Presentation settings
    pub ui: UiConfig,
}

impl BoardConfig {
    /// Platform config file path, if a config directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dragboard").join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from a specific file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&raw)
    }

    /// Parse from TOML text
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_rules() {
        let config = BoardConfig::default();
        assert_eq!(config.limits.description_min_len, 5);
        assert_eq!(config.limits.headcount_min, 2);
        assert_eq!(config.limits.headcount_max, 8);
        assert_eq!(config.ui.active_title, "ACTIVE PROJECTS");
        assert_eq!(config.ui.finished_title, "FINISHED PROJECTS");
    }

    #[test]
    fn test_column_title_lookup() {
        let ui = UiConfig::default();
        assert_eq!(ui.column_title(ProjectStatus::Active), "ACTIVE PROJECTS");
        assert_eq!(
            ui.column_title(ProjectStatus::Finished),
            "FINISHED PROJECTS"
        );
    }

    #[test]
    fn test_parse_full_config() {
        let config = BoardConfig::parse(
            r#"
            [limits]
            description_min_len = 10
            headcount_min = 1
            headcount_max = 12

            [ui]
            active_title = "IN FLIGHT"
            finished_title = "LANDED"
            "#,
        )
        .unwrap();
        assert_eq!(config.limits.description_min_len, 10);
        assert_eq!(config.limits.headcount_max, 12);
        assert_eq!(config.ui.active_title, "IN FLIGHT");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = BoardConfig::parse(
            r#"
            [limits]
            headcount_max = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.limits.headcount_max, 20);
        assert_eq!(config.limits.headcount_min, 2);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let err = BoardConfig::parse("limits = ][").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
