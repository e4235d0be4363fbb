//! Failures reported by the content/commerce service collaborators.

use super::error_code::{self, GateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{resource} source unavailable: {message}")]
    Unavailable {
        resource: &'static str,
        message: String,
    },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("{resource} payload malformed: {message}")]
    Malformed {
        resource: &'static str,
        message: String,
    },

    /// The payload describes a different entity than the one requested.
    #[error("{resource} mismatch: requested {expected}, got {actual}")]
    Mismatch {
        resource: &'static str,
        expected: String,
        actual: String,
    },
}

impl GateErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::SOURCE_UNAVAILABLE,
            Self::NotFound { .. } => error_code::SOURCE_NOT_FOUND,
            Self::Malformed { .. } => error_code::SOURCE_MALFORMED,
            Self::Mismatch { .. } => error_code::SOURCE_MISMATCH,
        }
    }
}
