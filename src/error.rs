//! Error types for header-count operations.

use std::path::PathBuf;

use crate::constants::{MAX_LEVEL, MIN_LEVEL, MSG_NO_ACTIVE_DOCUMENT};

/// All errors that can end a single invocation.
///
/// None of these are fatal to the host: the plugin turns each one into a
/// notice before handing it back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum HeaderCountError {
    #[error("{}", MSG_NO_ACTIVE_DOCUMENT)]
    NoActiveDocument,

    #[error("Invalid header level {value}: must be between {min} and {max}", min = MIN_LEVEL, max = MAX_LEVEL)]
    InvalidLevel { value: i64 },

    #[error(
        "Invalid header level '{input}': must be a number between {min} and {max}",
        min = MIN_LEVEL,
        max = MAX_LEVEL
    )]
    UnparsableLevel { input: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Settings write failed: {path}: {source}")]
    SettingsWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeaderCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_message_names_range() {
        let err = HeaderCountError::InvalidLevel { value: 7 };
        assert_eq!(err.to_string(), "Invalid header level 7: must be between 1 and 6");
    }

    #[test]
    fn test_no_active_document_message() {
        assert_eq!(
            HeaderCountError::NoActiveDocument.to_string(),
            "No active Markdown document"
        );
    }
}
