//! Wire types for the Gemini `generateContent` endpoint
//!
//! Shapes follow the v1beta REST API: a request is a list of contents,
//! each holding ordered parts (inline image data and/or text).

use base64::Engine;
use serde::{Deserialize, Serialize};
use tutor_domain::ProblemImage;

#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GeminiRequest {
    /// Build the request payload: the image part (if any) comes first,
    /// then the prompt text.
    pub fn new(prompt: &str, image: Option<&ProblemImage>) -> Self {
        let mut parts = Vec::with_capacity(2);

        if let Some(image) = image {
            let data = base64::engine::general_purpose::STANDARD.encode(image.data());
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type().to_string(),
                    data,
                },
            });
        }

        parts.push(Part::Text {
            text: prompt.to_string(),
        });

        Self {
            contents: vec![Content { parts }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: ResponseContent,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: String,
}

impl GeminiResponse {
    /// Extract the first candidate's text, if the response carried one
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

/// Error body returned by the API on non-success statuses
#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorDetail {
    #[serde(default)]
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_domain::ImageFormat;

    #[test]
    fn test_text_only_request_shape() {
        let request = GeminiRequest::new("ما هو حل المعادلة؟", None);
        let json = serde_json::to_value(&request).unwrap();

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts.as_array().unwrap().len(), 1);
        assert_eq!(parts[0]["text"], "ما هو حل المعادلة؟");
    }

    #[test]
    fn test_image_part_comes_first() {
        let image = ProblemImage::new(vec![0x89, 0x50, 0x4e, 0x47], ImageFormat::Png);
        let request = GeminiRequest::new("المسألة في الصورة", Some(&image));
        let json = serde_json::to_value(&request).unwrap();

        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inline_data"]["mime_type"], "image/png");
        assert_eq!(parts[0]["inline_data"]["data"], "iVBORw==");
        assert_eq!(parts[1]["text"], "المسألة في الصورة");
    }

    #[test]
    fn test_jpeg_mime_type() {
        let image = ProblemImage::new(vec![0xff, 0xd8, 0xff], ImageFormat::Jpeg);
        let request = GeminiRequest::new("p", Some(&image));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][0]["inline_data"]["mime_type"],
            "image/jpeg"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "الحل هو x = 2" } ], "role": "model" } }
            ]
        }"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text(), Some("الحل هو x = 2"));
    }

    #[test]
    fn test_empty_response_has_no_text() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_error_body_parsing() {
        let body = r#"{
            "error": { "code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED" }
        }"#;
        let error: GeminiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(error.error.code, 429);
        assert_eq!(error.error.message, "Resource has been exhausted");
    }
}
