//! Model gateway port
//!
//! Defines the interface for the one outbound call to the remote
//! multimodal endpoint. Implementations (adapters) live in the
//! infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;
use tutor_domain::ProblemImage;

/// Errors that can occur during a gateway call
///
/// All three recognized failure kinds are non-fatal to the running
/// process; each is terminal for its single request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The remote client was never initialized (missing credential).
    /// Every call short-circuits to this without a network attempt.
    #[error("remote client not initialized: no API key configured")]
    Unavailable,

    /// Provider-reported API error
    #[error("API error: {0}")]
    Api(String),

    /// Network or transport failure
    #[error("request failed: {0}")]
    Transport(String),

    /// The provider answered with a body we could not interpret
    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Check whether this error is the fixed unavailable-service case
    pub fn is_unavailable(&self) -> bool {
        matches!(self, GatewayError::Unavailable)
    }
}

/// Gateway for the remote multimodal model
///
/// One logical operation: generate text from an instruction string plus
/// an optional image. Stateless; each call is independent. No retries,
/// no streaming.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Identifier of the model the gateway targets
    fn model(&self) -> &str;

    /// Send the prompt (and image, if any) and return the reply text
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&ProblemImage>,
    ) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_check() {
        assert!(GatewayError::Unavailable.is_unavailable());
        assert!(!GatewayError::Api("quota".into()).is_unavailable());
    }
}
