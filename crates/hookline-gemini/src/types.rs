//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Tunable generation parameters, fixed per call site rather than derived
/// from request data (idea generation runs hotter than content drafting).
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_k: Option<u32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub contents: [RequestContent<'a>; 1],
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestContent<'a> {
    pub parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "topK", skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(rename = "topP", skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

impl From<GenerationParams> for GenerationConfig {
    fn from(params: GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_config_omits_absent_sampling_params() {
        let config: GenerationConfig = GenerationParams {
            temperature: 0.7,
            top_k: None,
            top_p: None,
            max_output_tokens: 3072,
        }
        .into();
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["maxOutputTokens"], 3072);
        assert!(json.get("topK").is_none());
        assert!(json.get("topP").is_none());
    }

    #[test]
    fn generation_config_uses_camel_case_wire_names() {
        let config: GenerationConfig = GenerationParams {
            temperature: 0.9,
            top_k: Some(40),
            top_p: Some(0.95),
            max_output_tokens: 2048,
        }
        .into();
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["topK"], 40);
        assert!((json["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn generate_response_tolerates_missing_candidates() {
        let parsed: GenerateResponse = serde_json::from_str("{}").expect("parse");
        assert!(parsed.candidates.is_empty());
    }
}
