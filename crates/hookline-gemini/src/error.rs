use thiserror::Error;

/// Errors returned by the Gemini generation client.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream signalled quota exhaustion: HTTP 429, or any error
    /// body whose `error.message` mentions "quota". Kept separate from
    /// [`GeminiError::UnexpectedStatus`] so callers can show friendlier
    /// copy for this case.
    #[error("generation rate-limited (upstream status {status})")]
    RateLimited {
        status: u16,
        body: serde_json::Value,
    },

    /// Any other non-2xx upstream answer, body preserved for diagnostics.
    #[error("generation failed with upstream status {status}")]
    UnexpectedStatus {
        status: u16,
        body: serde_json::Value,
    },

    /// The call succeeded but the response carried no candidate text.
    #[error("generation succeeded but produced no text")]
    EmptyOutput,

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
