//! Error types for documentation checks.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to access the plan document.
///
/// This is the only fatal condition of a run. Every other irregularity —
/// unreadable Markdown files during the link scan, files the walk cannot
/// stat — is tolerated silently and at most narrows coverage.
#[derive(Debug, Error)]
pub enum PlanDocError {
    /// The plan document does not exist.
    #[error("plan document {} not found", .0.display())]
    Missing(PathBuf),

    /// The plan document exists but could not be read as UTF-8 text.
    #[error("plan document {} could not be read", path.display())]
    Unreadable {
        /// Path of the plan document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_path() {
        let err = PlanDocError::Missing(PathBuf::from("repo/PLAN_PHASES.md"));
        assert!(err.to_string().contains("PLAN_PHASES.md"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_unreadable_keeps_source() {
        let err = PlanDocError::Unreadable {
            path: PathBuf::from("PLAN_PHASES.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("could not be read"));
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
