//! Client for Firecrawl's `POST /v1/scrape` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::FirecrawlError;

const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";

/// A scraped page: the requested URL and the markdown Firecrawl extracted.
///
/// Markdown is returned raw; callers run [`crate::clean_markdown`] and
/// [`crate::truncate_chars`] before embedding it in a prompt.
#[derive(Debug, Clone)]
pub struct ScrapedDocument {
    pub url: String,
    pub markdown: String,
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    data: Option<ScrapeData>,
}

#[derive(Debug, Deserialize)]
struct ScrapeData {
    markdown: Option<String>,
}

/// Client for the Firecrawl scrape API.
///
/// Holds the HTTP client, bearer credential, and base URL. Use
/// [`FirecrawlClient::new`] for production or
/// [`FirecrawlClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug)]
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    scrape_url: Url,
}

impl FirecrawlClient {
    /// Creates a client pointed at the production Firecrawl API.
    ///
    /// # Errors
    ///
    /// Returns [`FirecrawlError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, FirecrawlError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FirecrawlError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FirecrawlError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, FirecrawlError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("hookline/0.1 (content-ideation)")
            .build()?;

        let normalised = format!("{}/v1/scrape", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised).map_err(|e| FirecrawlError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            scrape_url: endpoint,
        })
    }

    /// Scrapes one page as markdown.
    ///
    /// Single attempt, no retry: a transient upstream failure surfaces
    /// directly so the HTTP handler can pass the status through.
    ///
    /// # Errors
    ///
    /// - [`FirecrawlError::UnexpectedStatus`] on a non-2xx upstream answer,
    ///   carrying the upstream status and body.
    /// - [`FirecrawlError::EmptyContent`] when the scrape succeeds but the
    ///   page yields no markdown.
    /// - [`FirecrawlError::Http`] on network failure.
    /// - [`FirecrawlError::Deserialize`] if the 2xx body is not the
    ///   expected shape.
    pub async fn scrape(&self, url: &str) -> Result<ScrapedDocument, FirecrawlError> {
        let request = ScrapeRequest {
            url,
            formats: ["markdown"],
        };

        let response = self
            .client
            .post(self.scrape_url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url, "scrape request failed");
            // Upstream error bodies are JSON in practice; fall back to the
            // raw text when they are not.
            let detail = serde_json::from_str(&body)
                .unwrap_or_else(|_| serde_json::Value::String(body.clone()));
            return Err(FirecrawlError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
                body: detail,
            });
        }

        let parsed: ScrapeResponse =
            serde_json::from_str(&body).map_err(|e| FirecrawlError::Deserialize {
                context: format!("scrape({url})"),
                source: e,
            })?;

        let markdown = parsed
            .data
            .and_then(|d| d.markdown)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| FirecrawlError::EmptyContent {
                url: url.to_owned(),
            })?;

        Ok(ScrapedDocument {
            url: url.to_owned(),
            markdown,
        })
    }
}
