//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Wraps `reqwest` with typed error handling (quota exhaustion is a
//! distinct condition with its own user-facing copy downstream), per-call
//! generation parameters, and the best-effort extractor that recovers a
//! JSON array from chatty model output.

pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use extract::{extract_json_array, ExtractError};
pub use types::GenerationParams;
