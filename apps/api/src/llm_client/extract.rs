//! Pulls the review object out of free-form model text.
//!
//! Models are told to answer with bare JSON but routinely wrap it in a
//! Markdown fence or add a sentence around it. Rather than slicing between the
//! first `{` and the last `}`, each `{` is tried as the start of a streaming
//! JSON parse and the first one that yields a complete object wins. Braces
//! inside string values and trailing prose therefore don't move the boundary.

use serde_json::{Deserializer, Value};

/// Strips a leading ```` ```json ```` / ```` ``` ```` fence and its closing fence.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```JSON"))
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}

/// Returns the first complete JSON object found in `text`, if any.
pub fn extract_json_object(text: &str) -> Option<Value> {
    let text = strip_json_fences(text);

    text.match_indices('{').find_map(|(start, _)| {
        let mut stream = Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value @ Value::Object(_))) => Some(value),
            _ => None,
        }
    })
}
