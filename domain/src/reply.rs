//! Model reply value object

use serde::{Deserialize, Serialize};

/// A successful answer returned by the remote model
///
/// Ephemeral: lives for one render cycle, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorReply {
    /// The model's plain-text answer, unmodified
    pub text: String,
    /// Identifier of the model that produced the answer
    pub model: String,
    /// RFC 3339 timestamp of the response
    pub timestamp: String,
}

impl TutorReply {
    pub fn new(
        text: impl Into<String>,
        model: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            timestamp: timestamp.into(),
        }
    }
}
