//! Answer normalization
//!
//! Models wrap answers in all sorts of ways: markdown code fences, a JSON
//! envelope with an `answer` field, or both. Normalization turns any of these
//! into the plain answer text and never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Fence markers: ``` optionally tagged with `json`
static FENCE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?").unwrap());

/// Field holding the answer inside a JSON envelope
const ANSWER_FIELD: &str = "answer";

/// A way of pulling a structured answer out of cleaned model text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStrategy {
    /// The whole text is a JSON object carrying an `answer` field
    JsonDocument,
    /// A `{...}` span inside the text is a JSON object carrying an `answer` field
    EmbeddedObject,
}

impl AnswerStrategy {
    /// Strategies in evaluation order
    pub const ORDERED: [AnswerStrategy; 2] =
        [AnswerStrategy::JsonDocument, AnswerStrategy::EmbeddedObject];

    /// Try to extract the answer, returning `None` when this strategy does not apply
    pub fn extract(&self, text: &str) -> Option<String> {
        match self {
            Self::JsonDocument => answer_from_json(text),
            Self::EmbeddedObject => braced_span(text).and_then(answer_from_json),
        }
    }
}

/// Normalize raw model output into plain answer text.
///
/// Total: malformed payloads fall through to the next strategy and the
/// final fallback is the trimmed, fence-stripped text. The single-pass
/// cleanup is repeated until the text stops changing, so
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let mut current = normalize_once(raw);

    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(raw: &str) -> String {
    let cleaned = strip_fences(raw.trim());

    AnswerStrategy::ORDERED
        .iter()
        .find_map(|strategy| strategy.extract(&cleaned))
        .unwrap_or(cleaned)
}

fn strip_fences(text: &str) -> String {
    if text.starts_with("```") {
        FENCE_MARKER.replace_all(text, "").trim().to_string()
    } else {
        text.to_string()
    }
}

fn braced_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    (start < end).then(|| &text[start..=end])
}

fn answer_from_json(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;

    match value.as_object()?.get(ANSWER_FIELD)? {
        Value::Null => None,
        Value::String(answer) => Some(answer.trim().to_string()),
        other => Some(other.to_string()),
    }
}
