//! Recovering the JSON object from a model's free-text answer.
//!
//! Models are asked for bare JSON but often wrap it in a Markdown fence or
//! surround it with prose. Candidates are tried in order:
//!
//! 1. the body of a ```` ```json ```` fence,
//! 2. the body of a plain ```` ``` ```` fence,
//! 3. the span from the first `{` to the last `}`,
//! 4. the whole text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Message attached to answers that could not be parsed.
pub const UNPARSED_MESSAGE: &str = "Could not parse as JSON. Returning raw text.";

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json[ \t]*\r?\n([\s\S]*?)\r?\n[ \t]*```").expect("static regex"));
static PLAIN_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[ \t]*\r?\n([\s\S]*?)\r?\n[ \t]*```").expect("static regex"));
static BRACED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("static regex"));

#[derive(Debug, Error)]
pub enum ResponseParseError {
    #[error("model response is empty")]
    Empty,
    #[error("model response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("model response is JSON but not an object")]
    NotAnObject,
}

/// A model answer kept verbatim because it could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparsedResponse {
    pub raw_text: String,
    pub parsing_error: String,
}

impl UnparsedResponse {
    pub fn new(raw_text: &str) -> Self {
        Self {
            raw_text: raw_text.to_string(),
            parsing_error: UNPARSED_MESSAGE.to_string(),
        }
    }
}

/// Slice of `text` most likely to hold the JSON object.
pub fn json_candidate(text: &str) -> &str {
    if let Some(body) = JSON_FENCE.captures(text).and_then(|c| c.get(1)) {
        return body.as_str();
    }
    if let Some(body) = PLAIN_FENCE.captures(text).and_then(|c| c.get(1)) {
        return body.as_str();
    }
    if let Some(span) = BRACED.find(text) {
        return span.as_str();
    }
    text
}

/// Parse a model answer into a JSON object.
pub fn parse_model_text(text: &str) -> Result<Value, ResponseParseError> {
    let candidate = json_candidate(text)
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    if candidate.is_empty() {
        return Err(ResponseParseError::Empty);
    }

    let value: Value = serde_json::from_str(candidate)?;
    if !value.is_object() {
        return Err(ResponseParseError::NotAnObject);
    }
    Ok(value)
}
