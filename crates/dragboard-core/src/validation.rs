//! Form input validation
//!
//! Raw field values from the input form are checked here before the store
//! is ever invoked: required, minimum-length, and numeric-range rules. The
//! rejection message shown to the user is the error's `Display` text.

use thiserror::Error;

use crate::config::ValidationLimits;

/// Validated form output, ready for [`crate::ProjectStore::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub headcount: u32,
}

/// A field rule the submitted input failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("description must be at least {min} characters")]
    DescriptionTooShort { min: usize },

    #[error("headcount must be a number")]
    HeadcountNotNumeric,

    #[error("headcount must be between {min} and {max}")]
    HeadcountOutOfRange { min: u32, max: u32 },
}

/// Check the three raw form fields against the configured limits.
///
/// Field values are stored as entered; only the required checks ignore
/// surrounding whitespace.
pub fn validate_draft(
    title: &str,
    description: &str,
    headcount: &str,
    limits: &ValidationLimits,
) -> Result<ProjectDraft, ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if description.chars().count() < limits.description_min_len {
        return Err(ValidationError::DescriptionTooShort {
            min: limits.description_min_len,
        });
    }
    let headcount: u32 = headcount
        .trim()
        .parse()
        .map_err(|_| ValidationError::HeadcountNotNumeric)?;
    if headcount < limits.headcount_min || headcount > limits.headcount_max {
        return Err(ValidationError::HeadcountOutOfRange {
            min: limits.headcount_min,
            max: limits.headcount_max,
        });
    }
    Ok(ProjectDraft {
        title: title.to_string(),
        description: description.to_string(),
        headcount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ValidationLimits {
        ValidationLimits::default()
    }

    #[test]
    fn test_valid_input_passes() {
        let draft = validate_draft("Build shed", "Construct a 10x10 shed", "4", &limits()).unwrap();
        assert_eq!(draft.title, "Build shed");
        assert_eq!(draft.description, "Construct a 10x10 shed");
        assert_eq!(draft.headcount, 4);
    }

    #[test]
    fn test_empty_title_rejected() {
        // Scenario: title="", description="ok"-ish, headcount="5".
        let err = validate_draft("", "a valid description", "5", &limits()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);

        let err = validate_draft("   ", "a valid description", "5", &limits()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
    }

    #[test]
    fn test_short_description_rejected() {
        let err = validate_draft("Build shed", "ok", "5", &limits()).unwrap_err();
        assert_eq!(err, ValidationError::DescriptionTooShort { min: 5 });

        let err = validate_draft("Build shed", "", "5", &limits()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyDescription);
    }

    #[test]
    fn test_headcount_must_be_numeric() {
        let err = validate_draft("Build shed", "Construct a 10x10 shed", "four", &limits())
            .unwrap_err();
        assert_eq!(err, ValidationError::HeadcountNotNumeric);

        let err =
            validate_draft("Build shed", "Construct a 10x10 shed", "", &limits()).unwrap_err();
        assert_eq!(err, ValidationError::HeadcountNotNumeric);
    }

    #[test]
    fn test_headcount_range() {
        let err =
            validate_draft("Build shed", "Construct a 10x10 shed", "1", &limits()).unwrap_err();
        assert_eq!(err, ValidationError::HeadcountOutOfRange { min: 2, max: 8 });

        let err =
            validate_draft("Build shed", "Construct a 10x10 shed", "9", &limits()).unwrap_err();
        assert_eq!(err, ValidationError::HeadcountOutOfRange { min: 2, max: 8 });

        assert!(validate_draft("Build shed", "Construct a 10x10 shed", "2", &limits()).is_ok());
        assert!(validate_draft("Build shed", "Construct a 10x10 shed", "8", &limits()).is_ok());
    }

    #[test]
    fn test_values_stored_as_entered() {
        let draft = validate_draft("  Build shed  ", "Construct a 10x10 shed", " 4 ", &limits())
            .unwrap();
        assert_eq!(draft.title, "  Build shed  ");
        assert_eq!(draft.headcount, 4);
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::DescriptionTooShort { min: 5 }.to_string(),
            "description must be at least 5 characters"
        );
        assert_eq!(
            ValidationError::HeadcountOutOfRange { min: 2, max: 8 }.to_string(),
            "headcount must be between 2 and 8"
        );
    }
}
