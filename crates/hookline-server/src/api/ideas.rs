use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use hookline_core::{prompts, GeneratedIdea};
use hookline_firecrawl::{clean_markdown, truncate_chars};
use hookline_gemini::{extract_json_array, GenerationParams};

use super::{
    map_extract_error, map_generation_error, map_scrape_error, require_fields, ApiError, AppState,
};

/// Idea generation runs hot on purpose: variety beats control here.
const IDEAS_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.9,
    top_k: Some(40),
    top_p: Some(0.95),
    max_output_tokens: 2048,
};

#[derive(Debug, Deserialize)]
pub(super) struct GenerateIdeasRequest {
    url: Option<String>,
    niche: Option<String>,
    #[serde(rename = "targetPersona")]
    target_persona: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct GenerateIdeasResponse {
    success: bool,
    ideas: Vec<GeneratedIdea>,
    #[serde(rename = "sourceUrl")]
    source_url: String,
}

pub(super) async fn generate_ideas(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdeasRequest>,
) -> Result<Json<GenerateIdeasResponse>, ApiError> {
    require_fields(&[
        ("url", request.url.as_deref()),
        ("niche", request.niche.as_deref()),
        ("targetPersona", request.target_persona.as_deref()),
    ])?;
    let url = request.url.as_deref().unwrap_or_default();
    let niche = request.niche.as_deref().unwrap_or_default();
    let persona = request.target_persona.as_deref().unwrap_or_default();

    let firecrawl = state.firecrawl()?;
    let gemini = state.gemini()?;

    // Two sequential upstream calls; the prompt depends on the scrape.
    let document = firecrawl.scrape(url).await.map_err(map_scrape_error)?;
    let cleaned = clean_markdown(&document.markdown);
    let excerpt = truncate_chars(&cleaned, state.config.excerpt_max_chars);

    let prompt = prompts::generate_ideas(niche, persona, url, excerpt);
    let text = gemini
        .generate(&prompt, IDEAS_PARAMS)
        .await
        .map_err(map_generation_error)?;

    let items = extract_json_array(&text).map_err(map_extract_error)?;
    let ideas: Vec<GeneratedIdea> = serde_json::from_value(serde_json::Value::Array(items))
        .map_err(|_| ApiError::unparsable(text))?;

    tracing::info!(url, count = ideas.len(), "generated ideas");
    Ok(Json(GenerateIdeasResponse {
        success: true,
        ideas,
        source_url: url.to_owned(),
    }))
}
