//! Client for Gemini's `generateContent` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeminiError;
use crate::types::{
    GenerateRequest, GenerateResponse, GenerationParams, RequestContent, RequestPart,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini generative-language API.
///
/// Holds the HTTP client, API key, model identifier, and base URL. Use
/// [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("hookline/0.1 (content-ideation)")
            .build()?;

        let raw = format!(
            "{}/v1beta/models/{model}:generateContent",
            base_url.trim_end_matches('/')
        );
        let endpoint = Url::parse(&raw).map_err(|e| GeminiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Runs one generation call and returns the first candidate's text.
    ///
    /// Single synchronous round-trip: no streaming, no retry, no backoff.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::RateLimited`] on HTTP 429 or an error body whose
    ///   message mentions quota exhaustion.
    /// - [`GeminiError::UnexpectedStatus`] on any other non-2xx answer.
    /// - [`GeminiError::EmptyOutput`] when the call succeeds but no
    ///   candidate text is present.
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Deserialize`] if the 2xx body is not the expected
    ///   shape.
    pub async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, GeminiError> {
        let request = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: params.into(),
        };

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self.client.post(url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail: serde_json::Value = serde_json::from_str(&body)
                .unwrap_or_else(|_| serde_json::Value::String(body.clone()));

            if status.as_u16() == 429 || mentions_quota(&detail) {
                tracing::warn!(status = status.as_u16(), "generation rate-limited");
                return Err(GeminiError::RateLimited {
                    status: status.as_u16(),
                    body: detail,
                });
            }

            tracing::warn!(status = status.as_u16(), "generation request failed");
            return Err(GeminiError::UnexpectedStatus {
                status: status.as_u16(),
                body: detail,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Deserialize {
                context: "generateContent".to_string(),
                source: e,
            })?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(GeminiError::EmptyOutput)
    }
}

/// True when an upstream error body's `error.message` mentions "quota".
fn mentions_quota(body: &serde_json::Value) -> bool {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(serde_json::Value::as_str)
        .is_some_and(|m| m.contains("quota"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_quota_matches_error_message() {
        let body = serde_json::json!({
            "error": { "message": "Resource has been exhausted: check quota." }
        });
        assert!(mentions_quota(&body));
    }

    #[test]
    fn mentions_quota_ignores_other_messages() {
        let body = serde_json::json!({ "error": { "message": "internal error" } });
        assert!(!mentions_quota(&body));
        assert!(!mentions_quota(&serde_json::Value::Null));
    }

    #[test]
    fn endpoint_embeds_model_identifier() {
        let client = GeminiClient::with_base_url(
            "k",
            "gemini-2.0-flash-exp",
            30,
            "https://generativelanguage.googleapis.com",
        )
        .expect("client");
        assert_eq!(
            client.endpoint.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }
}
