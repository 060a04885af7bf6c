//! Field-level salvage for text no repair pass could make parseable.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

const SALVAGED_FIELDS: [&str; 3] = ["title", "subtitle", "version"];

fn field_pattern(index: usize) -> Option<&'static Regex> {
    static PATTERNS: OnceLock<Vec<Option<Regex>>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            SALVAGED_FIELDS
                .iter()
                .map(|field| {
                    Regex::new(&format!(r#"(?i:"{field}")\s*:\s*"((?:[^"\\]|\\.)*)""#)).ok()
                })
                .collect()
        })
        .get(index)
        .and_then(Option::as_ref)
}

/// Recover whatever scalar fields can be matched locally. Yields an object only
/// when at least a non-empty title was found.
pub fn salvage(text: &str) -> Option<Value> {
    let mut recovered = Map::new();
    for (index, field) in SALVAGED_FIELDS.iter().enumerate() {
        let Some(pattern) = field_pattern(index) else {
            continue;
        };
        let found = pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|raw| unescape(raw.as_str()))
            .filter(|value| !value.trim().is_empty());
        if let Some(value) = found {
            recovered.insert((*field).to_string(), Value::String(value));
        }
    }
    recovered
        .contains_key("title")
        .then_some(Value::Object(recovered))
}

fn unescape(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{raw}\"")).unwrap_or_else(|_| raw.to_string())
}
