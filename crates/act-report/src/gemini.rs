//! Gemini `generateContent` client.

use act_config::ReportConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::generator::TextGenerator;
use crate::http::check_response;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|part| part.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// HTTP client for a Gemini model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from the `[report]` config section.
    ///
    /// # Errors
    ///
    /// [`GenerationError::NotConfigured`] when no API key is set,
    /// [`GenerationError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &ReportConfig) -> Result<Self, GenerationError> {
        if !config.is_configured() {
            return Err(GenerationError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("act/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            url: format!(
                "{}/models/{}:generateContent",
                config.endpoint.trim_end_matches('/'),
                config.model
            ),
            api_key: config.api_key.clone(),
        })
    }

    /// Full `generateContent` URL this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };
        tracing::debug!(url = %self.url, prompt_bytes = prompt.len(), "requesting generation");

        let resp = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let data: GenerateResponse = check_response(resp).await?.json().await?;
        data.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> Option<String> {
        serde_json::from_value::<GenerateResponse>(value)
            .unwrap()
            .into_text()
    }

    #[test]
    fn first_candidate_parts_are_concatenated() {
        let text = parse(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "## Summary\n" }, { "text": "All good." }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }));
        assert_eq!(text.as_deref(), Some("## Summary\nAll good."));
    }

    #[test]
    fn missing_or_blank_text_is_none() {
        assert_eq!(parse(json!({})), None);
        assert_eq!(parse(json!({ "candidates": [] })), None);
        assert_eq!(parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] })), None);
        assert_eq!(
            parse(json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] })),
            None
        );
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn unconfigured_key_is_rejected() {
        let err = GeminiClient::from_config(&ReportConfig::default()).unwrap_err();
        assert!(matches!(err, GenerationError::NotConfigured));
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let config = ReportConfig {
            api_key: "k".into(),
            endpoint: "http://localhost:9999/v1beta/".into(),
            model: "gemini-test".into(),
            ..Default::default()
        };
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(
            client.url(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
    }
}
