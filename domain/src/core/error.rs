//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("a problem needs either an image or a non-blank question text")]
    EmptyProblem,

    #[error("unsupported image format: {0} (expected jpg, jpeg or png)")]
    UnsupportedImageFormat(String),

    #[error("unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },
}

impl DomainError {
    /// Check whether this error is the empty-submission validation failure
    pub fn is_empty_problem(&self) -> bool {
        matches!(self, DomainError::EmptyProblem)
    }
}
