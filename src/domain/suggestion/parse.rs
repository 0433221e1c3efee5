//! Parsing of the model's suggestion payload.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::Suggestion;

/// Markdown code fences models wrap JSON in despite being told not to.
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(?:json)?\n?").expect("valid fence regex"));

/// Why a model payload could not be turned into suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionParseError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Response is not a JSON array")]
    NotAnArray,

    #[error("Suggestion {index} is malformed: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Suggestion {index} has an empty issue")]
    EmptyIssue { index: usize },
}

#[derive(Debug, Deserialize)]
struct WireSuggestion {
    category: String,
    issue: String,
    suggestion: String,
    explanation: String,
}

/// Removes code fences and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

/// Parses a raw model response into suggestions with fresh ids.
///
/// The whole payload is rejected if any entry is malformed.
pub fn parse_suggestions(raw: &str) -> Result<Vec<Suggestion>, SuggestionParseError> {
    let cleaned = strip_code_fences(raw);
    let value: serde_json::Value = serde_json::from_str(&cleaned)
        .map_err(|e| SuggestionParseError::InvalidJson(e.to_string()))?;

    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        _ => return Err(SuggestionParseError::NotAnArray),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let wire: WireSuggestion =
                serde_json::from_value(entry).map_err(|e| SuggestionParseError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                })?;
            Suggestion::new(wire.category, wire.issue, wire.suggestion, wire.explanation)
                .map_err(|_| SuggestionParseError::EmptyIssue { index })
        })
        .collect()
}
