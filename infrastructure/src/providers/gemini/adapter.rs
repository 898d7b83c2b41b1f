//! Gemini adapter implementing the [`ModelGateway`] port

use super::types::{GeminiErrorResponse, GeminiRequest, GeminiResponse};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use tutor_application::{GatewayError, ModelGateway};
use tutor_domain::ProblemImage;

/// Gateway to the Gemini `generateContent` endpoint.
///
/// Holds one HTTP client for the process lifetime and an optional
/// credential resolved once at construction. A gateway built without a
/// credential answers every call with [`GatewayError::Unavailable`]
/// without touching the network.
pub struct GeminiGateway {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiGateway {
    /// Build the gateway from configuration, resolving the credential once.
    pub fn from_config(config: &FileGeminiConfig) -> Self {
        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            warn!(
                env = %config.api_key_env,
                "no Gemini API key configured; all requests will be unavailable"
            );
        }

        Self {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// Whether a credential was resolved at construction
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, key
        )
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        image: Option<&ProblemImage>,
    ) -> Result<String, GatewayError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(GatewayError::Unavailable);
        };

        let request = GeminiRequest::new(prompt, image);
        debug!(
            model = %self.model,
            has_image = image.is_some(),
            "calling generateContent"
        );

        let response = self
            .client
            .post(self.endpoint(key))
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            // Surface the provider's own message when the body parses
            let message = match serde_json::from_str::<GeminiErrorResponse>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) => format!("HTTP {}: {}", status.as_u16(), body),
            };
            return Err(GatewayError::Api(message));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        body.first_text()
            .map(|t| t.to_string())
            .ok_or_else(|| GatewayError::InvalidResponse("no candidates in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyless_config() -> FileGeminiConfig {
        FileGeminiConfig {
            api_key: None,
            api_key_env: "BAC_TUTOR_TEST_NO_SUCH_KEY".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keyless_gateway_is_unavailable() {
        let gateway = GeminiGateway::from_config(&keyless_config());
        assert!(!gateway.is_available());
    }

    #[tokio::test]
    async fn test_keyless_generate_short_circuits() {
        let gateway = GeminiGateway::from_config(&keyless_config());
        let result = gateway.generate("سؤال", None).await;
        assert_eq!(result.unwrap_err(), GatewayError::Unavailable);
    }

    #[test]
    fn test_endpoint_shape() {
        let config = FileGeminiConfig {
            api_key: Some("k123".to_string()),
            base_url: "https://generativelanguage.googleapis.com/".to_string(),
            ..Default::default()
        };
        let gateway = GeminiGateway::from_config(&config);
        assert_eq!(
            gateway.endpoint("k123"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=k123"
        );
    }

    #[test]
    fn test_model_identifier() {
        let gateway = GeminiGateway::from_config(&FileGeminiConfig::default());
        assert_eq!(gateway.model(), "gemini-2.5-flash");
    }
}
