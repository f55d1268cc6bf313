//! Shared types, configuration, and prompt templates for hookline.
//!
//! Everything here is pure data and pure functions; the upstream HTTP
//! clients live in `hookline-firecrawl` and `hookline-gemini`.

pub mod app_config;
pub mod config;
pub mod formats;
pub mod prompts;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

/// A content source suggested by the model for a (niche, persona) pair.
///
/// Wire names follow the public API: `type` and `relevanceReason`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedSource {
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    #[serde(rename = "relevanceReason", skip_serializing_if = "Option::is_none")]
    pub relevance_reason: Option<String>,
}

/// The kind of content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    Website,
    Blog,
    YouTube,
    LinkedIn,
    Newsletter,
    Podcast,
}

/// One LinkedIn post idea: an opening hook plus a one-line rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedIdea {
    pub hook: String,
    pub why_it_works: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
