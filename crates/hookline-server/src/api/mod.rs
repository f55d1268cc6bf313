mod content;
mod discover;
mod ideas;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use hookline_core::AppConfig;
use hookline_firecrawl::{FirecrawlClient, FirecrawlError};
use hookline_gemini::{ExtractError, GeminiClient, GeminiError};

use crate::middleware::request_id;

// User-facing copy, normalized across endpoints. The rate-limit message is
// deliberately distinct from the generic generation-failure message.
const MSG_RATE_LIMITED: &str =
    "Generation quota is exhausted for now. Please try again in a little while.";
const MSG_GENERATION_FAILED: &str =
    "Content generation is temporarily unavailable. Please try again later.";
const MSG_INTERNAL: &str = "Internal server error. Please try again later.";

/// Shared, immutable per-process state. Handlers never mutate it; requests
/// are fully independent of each other.
///
/// Upstream clients are `None` when the corresponding API key is absent;
/// affected endpoints answer 500 per request instead of the server
/// refusing to start.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub firecrawl: Option<Arc<FirecrawlClient>>,
    pub gemini: Option<Arc<GeminiClient>>,
}

impl AppState {
    /// Builds clients from configuration, injecting credentials at
    /// construction time.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let firecrawl = config
            .firecrawl_api_key
            .as_deref()
            .map(|key| FirecrawlClient::new(key, config.upstream_timeout_secs))
            .transpose()?
            .map(Arc::new);

        let gemini = config
            .gemini_api_key
            .as_deref()
            .map(|key| {
                GeminiClient::new(key, &config.gemini_model, config.upstream_timeout_secs)
            })
            .transpose()?
            .map(Arc::new);

        Ok(Self {
            config,
            firecrawl,
            gemini,
        })
    }

    /// The scrape client, or a 500 configuration error.
    pub(super) fn firecrawl(&self) -> Result<&FirecrawlClient, ApiError> {
        self.firecrawl
            .as_deref()
            .ok_or_else(|| ApiError::config("FIRECRAWL_API_KEY not configured"))
    }

    /// The generation client, or a 500 configuration error.
    pub(super) fn gemini(&self) -> Result<&GeminiClient, ApiError> {
        self.gemini
            .as_deref()
            .ok_or_else(|| ApiError::config("GEMINI_API_KEY not configured"))
    }
}

/// JSON error body. Optional diagnostic fields are omitted when absent.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(rename = "rawResponse", skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(rename = "isGeminiError", skip_serializing_if = "Option::is_none")]
    pub is_gemini_error: Option<bool>,
}

/// An error already mapped to an HTTP status and response body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                success: false,
                error: error.into(),
                details: None,
                raw_response: None,
                is_gemini_error: None,
            },
        }
    }

    /// 400 for missing or blank required fields.
    pub(super) fn validation(missing: &[&str]) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Missing required fields: {}", missing.join(", ")),
        )
    }

    /// 500 for an absent upstream credential.
    pub(super) fn config(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 500 when model output parsed as JSON but not into the declared
    /// shape. The raw text stays in the payload for debugging.
    pub(super) fn unparsable(raw: String) -> Self {
        let mut err = Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to parse model response",
        );
        err.body.raw_response = Some(raw);
        err
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Validates that every named field is present and non-blank.
///
/// Violations return 400 before any upstream call is attempted.
pub(super) fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(&missing))
    }
}

/// Maps a scrape failure onto an HTTP response.
///
/// Upstream status is passed through where one exists; empty content is the
/// user-facing 400 case, distinct from upstream failure.
pub(super) fn map_scrape_error(error: FirecrawlError) -> ApiError {
    match error {
        FirecrawlError::UnexpectedStatus { status, url, body } => {
            tracing::error!(status, url, "scrape upstream returned an error");
            let mut err = ApiError::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Failed to scrape URL",
            );
            err.body.details = Some(body);
            err
        }
        FirecrawlError::EmptyContent { url } => {
            tracing::warn!(url, "scrape returned no content");
            ApiError::new(StatusCode::BAD_REQUEST, "No content found from URL")
        }
        FirecrawlError::Http(e) => {
            tracing::error!(error = %e, "scrape request failed to complete");
            ApiError::new(StatusCode::BAD_GATEWAY, "Failed to scrape URL")
        }
        FirecrawlError::Deserialize { .. } | FirecrawlError::InvalidBaseUrl { .. } => {
            tracing::error!(error = %error, "scrape response handling failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
        }
    }
}

/// Maps a generation failure onto an HTTP response.
///
/// Quota exhaustion keeps its own copy; other upstream failures share the
/// generic retry message. Both are flagged `isGeminiError`.
pub(super) fn map_generation_error(error: GeminiError) -> ApiError {
    match error {
        GeminiError::RateLimited { status, body } => {
            tracing::warn!(status, body = %body, "generation rate-limited");
            let mut err = ApiError::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::TOO_MANY_REQUESTS),
                MSG_RATE_LIMITED,
            );
            err.body.is_gemini_error = Some(true);
            err
        }
        GeminiError::UnexpectedStatus { status, body } => {
            tracing::error!(status, body = %body, "generation upstream returned an error");
            let mut err = ApiError::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                MSG_GENERATION_FAILED,
            );
            err.body.is_gemini_error = Some(true);
            err
        }
        GeminiError::EmptyOutput => {
            tracing::error!("generation produced no text");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "No content generated")
        }
        GeminiError::Http(e) => {
            tracing::error!(error = %e, "generation request failed to complete");
            let mut err = ApiError::new(StatusCode::BAD_GATEWAY, MSG_GENERATION_FAILED);
            err.body.is_gemini_error = Some(true);
            err
        }
        GeminiError::Deserialize { .. } | GeminiError::InvalidBaseUrl { .. } => {
            tracing::error!(error = %error, "generation response handling failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
        }
    }
}

/// Maps an extraction failure onto a 500 that carries the raw model output.
pub(super) fn map_extract_error(error: ExtractError) -> ApiError {
    tracing::error!("failed to locate JSON array in model output");
    let ExtractError::NoJsonArray { raw } = error;
    ApiError::unparsable(raw)
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/discover-sources", post(discover::discover_sources))
        .route("/generate-ideas", post(ideas::generate_ideas))
        .route("/generate-content", post(content::generate_content))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
