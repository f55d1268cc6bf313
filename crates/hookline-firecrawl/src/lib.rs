//! HTTP client for the Firecrawl scrape API.
//!
//! One endpoint (`POST /v1/scrape`, markdown output) plus the boilerplate
//! cleaning and excerpt truncation applied to scraped pages before they are
//! embedded in prompts. Single-attempt semantics: failures surface
//! immediately, nothing is retried.

pub mod clean;
pub mod client;
pub mod error;

pub use clean::{clean_markdown, truncate_chars};
pub use client::{FirecrawlClient, ScrapedDocument};
pub use error::FirecrawlError;
