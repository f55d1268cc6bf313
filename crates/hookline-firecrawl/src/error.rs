use thiserror::Error;

/// Errors returned by the Firecrawl scrape client.
#[derive(Debug, Error)]
pub enum FirecrawlError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The scrape endpoint answered with a non-2xx status. The upstream
    /// response body is preserved as diagnostic detail for the caller.
    #[error("scrape of {url} failed with upstream status {status}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: serde_json::Value,
    },

    /// The scrape succeeded but produced no markdown. A distinct,
    /// user-facing condition — not an upstream failure.
    #[error("no content found at {url}")]
    EmptyContent { url: String },

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
