//! Moderation data models
//!
//! Request and response structures for the `/moderations` endpoint

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Moderation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationRequest {
    /// Text to classify
    pub input: ModerationInput,
    /// Model name (optional; the server picks its default when omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ModerationRequest {
    /// Classify a single text with the given model
    pub fn text(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            input: ModerationInput::Text(input.into()),
            model: Some(model.into()),
        }
    }
}

/// Moderation input (single string or batch)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModerationInput {
    /// A single text
    Text(String),
    /// A batch of texts, classified independently
    Batch(Vec<String>),
}

/// Moderation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResponse {
    /// Response ID
    pub id: String,
    /// Model used
    pub model: String,
    /// One result per input text
    pub results: Vec<ModerationResult>,
}

/// Classification verdict for one input
///
/// Category names are kept as maps rather than a fixed struct; the provider
/// adds categories over time and the client should not reject unknown ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResult {
    /// Whether any category was flagged
    pub flagged: bool,
    /// Per-category boolean verdicts
    pub categories: HashMap<String, bool>,
    /// Per-category confidence scores
    pub category_scores: HashMap<String, f64>,
}
