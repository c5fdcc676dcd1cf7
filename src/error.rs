//! Error types for loading a roadmap catalog

use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading a catalog.
///
/// Queries never fail; an empty result is a valid answer. Only reading and
/// checking the source data can go wrong.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog data is not valid JSON of the expected shape
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog parsed but failed consistency checks
    #[error("Catalog failed validation with {} issue(s): {}", .0.len(), join_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

/// A single consistency problem found in a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Declared phase total differs from the sum of its stories
    #[error("phase {phase_id} declares {declared} points but its stories sum to {actual}")]
    PointsMismatch {
        phase_id: String,
        declared: u64,
        actual: u64,
    },
    /// Story scheduled in a sprint that is not in the known sequence
    #[error("story {story_id} is scheduled in unknown sprint {sprint}")]
    UnknownSprint { story_id: String, sprint: String },
    /// Story without a positive size estimate
    #[error("story {story_id} has zero points")]
    ZeroPoints { story_id: String },
    /// Two stories share an id
    #[error("story id {story_id} appears more than once")]
    DuplicateStoryId { story_id: String },
    /// Two phases share an id
    #[error("phase id {phase_id} appears more than once")]
    DuplicatePhaseId { phase_id: String },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_error_lists_every_issue() {
        let err = CatalogError::Invalid(vec![
            ValidationIssue::ZeroPoints {
                story_id: "F0-001".to_string(),
            },
            ValidationIssue::PointsMismatch {
                phase_id: "phase-1".to_string(),
                declared: 102,
                actual: 112,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Catalog failed validation with 2 issue(s): story F0-001 has zero points; \
             phase phase-1 declares 102 points but its stories sum to 112"
        );
    }

    #[test]
    fn test_issue_messages() {
        let issue = ValidationIssue::UnknownSprint {
            story_id: "F3-019".to_string(),
            sprint: "S99".to_string(),
        };
        assert_eq!(issue.to_string(), "story F3-019 is scheduled in unknown sprint S99");
        let issue = ValidationIssue::DuplicatePhaseId {
            phase_id: "phase-2".to_string(),
        };
        assert_eq!(issue.to_string(), "phase id phase-2 appears more than once");
    }
}
