use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use hookline_core::{prompts, SuggestedSource};
use hookline_gemini::{extract_json_array, GenerationParams};

use super::{
    map_extract_error, map_generation_error, require_fields, ApiError, AppState,
};

/// Source discovery asks for a ranked list; moderately creative.
const DISCOVER_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    top_k: None,
    top_p: None,
    max_output_tokens: 3072,
};

#[derive(Debug, Deserialize)]
pub(super) struct DiscoverSourcesRequest {
    niche: Option<String>,
    #[serde(rename = "targetPersona")]
    target_persona: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct DiscoverSourcesResponse {
    success: bool,
    sources: Vec<SuggestedSource>,
}

pub(super) async fn discover_sources(
    State(state): State<AppState>,
    Json(request): Json<DiscoverSourcesRequest>,
) -> Result<Json<DiscoverSourcesResponse>, ApiError> {
    require_fields(&[
        ("niche", request.niche.as_deref()),
        ("targetPersona", request.target_persona.as_deref()),
    ])?;
    let niche = request.niche.as_deref().unwrap_or_default();
    let persona = request.target_persona.as_deref().unwrap_or_default();

    let gemini = state.gemini()?;

    let prompt = prompts::discover_sources(niche, persona);
    let text = gemini
        .generate(&prompt, DISCOVER_PARAMS)
        .await
        .map_err(map_generation_error)?;

    let items = extract_json_array(&text).map_err(map_extract_error)?;
    let mut sources: Vec<SuggestedSource> =
        serde_json::from_value(serde_json::Value::Array(items))
            .map_err(|_| ApiError::unparsable(text))?;
    sources.truncate(state.config.max_sources);

    tracing::info!(niche, persona, count = sources.len(), "discovered sources");
    Ok(Json(DiscoverSourcesResponse {
        success: true,
        sources,
    }))
}
