use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use hookline_core::prompts;
use hookline_gemini::GenerationParams;

use super::{map_generation_error, require_fields, ApiError, AppState};

/// Drafting a full post stays cooler than idea brainstorming.
const CONTENT_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.8,
    top_k: Some(40),
    top_p: Some(0.95),
    max_output_tokens: 2048,
};

#[derive(Debug, Deserialize)]
pub(super) struct GenerateContentRequest {
    hook: Option<String>,
    why_it_works: Option<String>,
    format: Option<String>,
    niche: Option<String>,
    #[serde(rename = "targetPersona")]
    target_persona: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct GenerateContentResponse {
    success: bool,
    content: String,
}

pub(super) async fn generate_content(
    State(state): State<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<GenerateContentResponse>, ApiError> {
    require_fields(&[
        ("hook", request.hook.as_deref()),
        ("why_it_works", request.why_it_works.as_deref()),
        ("format", request.format.as_deref()),
        ("niche", request.niche.as_deref()),
        ("targetPersona", request.target_persona.as_deref()),
    ])?;
    let hook = request.hook.as_deref().unwrap_or_default();
    let why_it_works = request.why_it_works.as_deref().unwrap_or_default();
    // Unknown formats are not a validation error; the prompt builder falls
    // back to the plain-text instruction.
    let format = request.format.as_deref().unwrap_or_default();
    let niche = request.niche.as_deref().unwrap_or_default();
    let persona = request.target_persona.as_deref().unwrap_or_default();

    let gemini = state.gemini()?;

    let prompt = prompts::generate_content(hook, why_it_works, format, niche, persona);
    let content = gemini
        .generate(&prompt, CONTENT_PARAMS)
        .await
        .map_err(map_generation_error)?;

    tracing::info!(format, chars = content.len(), "generated content draft");
    Ok(Json(GenerateContentResponse {
        success: true,
        content,
    }))
}
