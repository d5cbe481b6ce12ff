//! Best-effort JSON extraction from unstructured model text.
//!
//! Models asked for "EXACT JSON, no markdown" still wrap payloads in code
//! fences or surround them with prose often enough that every response goes
//! through this repair path: strip fence markers, then slice between the
//! first `{` and the last `}`. This is a heuristic, not a guarantee:
//! malformed nested braces in free text can still produce an invalid slice,
//! which surfaces as a parse error rather than being silently patched.

use serde::de::DeserializeOwned;

use crate::error::ModelError;

/// Strip code fences and slice the text down to its outermost JSON object.
///
/// Returns the repaired slice without parsing it.
#[must_use]
pub fn repair_json_text(raw: &str) -> String {
    let stripped = raw.replace("```json", "").replace("```", "");
    let mut text = stripped.trim().to_string();

    if !text.starts_with('{') {
        if let Some(start) = text.find('{') {
            text = text[start..].to_string();
        }
    }
    if !text.ends_with('}') {
        if let Some(end) = text.rfind('}') {
            text.truncate(end + 1);
        }
    }
    text
}

/// Extract and parse the JSON object embedded in raw model text.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] if the repaired slice is not valid JSON.
pub fn extract_json(raw: &str, context: &str) -> Result<serde_json::Value, ModelError> {
    let repaired = repair_json_text(raw);
    serde_json::from_str(&repaired).map_err(|e| ModelError::Parse {
        context: context.to_string(),
        source: e,
    })
}

/// Extract the embedded JSON object and deserialize it into `T`.
///
/// No schema validation happens beyond what serde enforces; fields the model
/// omitted fall back to the type's defaults.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] if the repaired slice is not valid JSON or
/// does not match `T`.
pub fn extract_payload<T: DeserializeOwned>(raw: &str, context: &str) -> Result<T, ModelError> {
    let repaired = repair_json_text(raw);
    serde_json::from_str(&repaired).map_err(|e| ModelError::Parse {
        context: context.to_string(),
        source: e,
    })
}
