//! Best-effort recovery of a JSON array from free-form model output.
//!
//! The JSON-only instruction in the prompts is soft; models still wrap
//! their answer in prose or code fences. This module scrapes the first
//! `[ { ... } ]` span out of the text with a greedy regex and parses it.
//!
//! Known limitation, kept on purpose: the greedy span runs from the first
//! `[` `{` opening to the last `} ]` closing in the whole text, so output
//! containing several bracketed arrays (or arrays nested in arrays) before
//! the intended one fails to parse instead of selecting the right span.
//! This matches the observed behavior callers depend on; a balanced-bracket
//! parser would change it.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static JSON_ARRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("valid regex"));

/// Extraction failure. The raw model output is preserved — it is the only
/// debugging signal available and must reach the diagnostic payload.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON array of objects found in model output")]
    NoJsonArray { raw: String },
}

impl ExtractError {
    /// The unmodified model output that failed extraction.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        match self {
            ExtractError::NoJsonArray { raw } => raw,
        }
    }
}

/// Extracts a JSON array of objects from `raw`.
///
/// 1. Greedy-match the first `[ { ... } ]` span and parse it.
/// 2. If no span matches, parse the entire text as JSON (covers bare JSON
///    with no wrapping prose).
/// 3. Otherwise fail, keeping `raw` available via
///    [`ExtractError::raw_text`].
///
/// # Errors
///
/// Returns [`ExtractError::NoJsonArray`] when neither attempt yields a
/// JSON array.
pub fn extract_json_array(raw: &str) -> Result<Vec<serde_json::Value>, ExtractError> {
    if let Some(span) = JSON_ARRAY_RE.find(raw) {
        return match serde_json::from_str::<serde_json::Value>(span.as_str()) {
            Ok(serde_json::Value::Array(items)) => Ok(items),
            _ => Err(ExtractError::NoJsonArray {
                raw: raw.to_owned(),
            }),
        };
    }

    match serde_json::from_str::<serde_json::Value>(raw.trim()) {
        Ok(serde_json::Value::Array(items)) => Ok(items),
        _ => Err(ExtractError::NoJsonArray {
            raw: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_array_embedded_in_prose() {
        let array = serde_json::json!([
            { "hook": "One", "why_it_works": "First" },
            { "hook": "Two", "why_it_works": "Second" }
        ]);
        let raw = format!(
            "Sure! Here are your ideas:\n\n{}\n\nHope these help!",
            serde_json::to_string_pretty(&array).expect("serialize")
        );
        let items = extract_json_array(&raw).expect("extract");
        assert_eq!(serde_json::Value::Array(items), array);
    }

    #[test]
    fn recovers_array_inside_code_fence() {
        let raw = "```json\n[\n  {\"name\": \"A\"}\n]\n```";
        let items = extract_json_array(raw).expect("extract");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "A");
    }

    #[test]
    fn parses_bare_json_without_prose() {
        let raw = r#"[{"hook": "h", "why_it_works": "w"}]"#;
        let items = extract_json_array(raw).expect("extract");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn parses_bare_empty_array() {
        // No `{` so the span regex never matches; the whole-text parse path
        // handles it.
        let items = extract_json_array("[]").expect("extract");
        assert!(items.is_empty());
    }

    #[test]
    fn fails_on_text_without_json_and_keeps_raw() {
        let raw = "I'm sorry, I can't produce JSON today.";
        let err = extract_json_array(raw).expect_err("no array");
        assert_eq!(err.raw_text(), raw);
    }

    #[test]
    fn fails_on_truncated_array_and_keeps_raw() {
        let raw = r#"[{"hook": "cut off mid-"#;
        let err = extract_json_array(raw).expect_err("truncated");
        assert_eq!(err.raw_text(), raw);
    }

    #[test]
    fn greedy_span_fails_on_multiple_arrays() {
        // Documented limitation: the span runs from the first opening to the
        // last closing bracket, which is not valid JSON here.
        let raw = r#"first [{"a": 1}] second [{"b": 2}]"#;
        assert!(extract_json_array(raw).is_err());
    }
}
