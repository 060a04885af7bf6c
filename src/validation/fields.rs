//! Loose field access over parsed model output.
//!
//! Keys are matched after normalisation (ASCII alphanumerics only, lowercased), so
//! `sub_title`, `subTitle` and `SUBTITLE` all hit the alias `subtitle`.

use crate::content::Cardinality;
use serde_json::{Map, Value};

#[derive(Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    pub fn of(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    pub fn empty() -> Self {
        Self { map: None }
    }

    pub fn is_present(&self) -> bool {
        self.map.is_some()
    }

    /// First value whose key matches one of `aliases`, tried in alias order.
    pub fn get(&self, aliases: &[&str]) -> Option<&'a Value> {
        let map = self.map?;
        aliases.iter().find_map(|alias| {
            let wanted = normalize_key(alias);
            map.iter()
                .find(|(key, value)| normalize_key(key) == wanted && !value.is_null())
                .map(|(_, value)| value)
        })
    }

    pub fn text(&self, aliases: &[&str]) -> Option<String> {
        self.get(aliases).and_then(scalar_text)
    }

    pub fn flag(&self, aliases: &[&str]) -> Option<bool> {
        match self.get(aliases)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            Value::Number(n) => Some(n.as_f64().map(|f| f != 0.0).unwrap_or(false)),
            _ => None,
        }
    }

    pub fn object(&self, aliases: &[&str]) -> Fields<'a> {
        match self.get(aliases) {
            Some(value @ Value::Object(_)) => Fields::of(value),
            _ => Fields::empty(),
        }
    }

    /// Array elements under the first matching alias. A lone object is treated as a
    /// one-element list.
    pub fn list(&self, aliases: &[&str]) -> Vec<&'a Value> {
        match self.get(aliases) {
            Some(Value::Array(items)) => items.iter().filter(|v| !v.is_null()).collect(),
            Some(value @ Value::Object(_)) => vec![value],
            _ => Vec::new(),
        }
    }

    pub fn string_list(&self, aliases: &[&str]) -> Vec<String> {
        self.get(aliases).map(strings_from).unwrap_or_default()
    }
}

/// Text content of a list-ish value: arrays of scalars (or of objects carrying a
/// text field), or a single string split on line breaks.
pub(crate) fn strings_from(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(_) => {
                    Fields::of(item).text(&["text", "step", "title", "description", "content"])
                }
                other => scalar_text(other),
            })
            .collect(),
        Value::String(s) => s
            .lines()
            .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        other => scalar_text(other).into_iter().collect(),
    }
}

/// Non-empty textual form of a scalar. Placeholder literals such as `null` count as empty.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    match text.to_ascii_lowercase().as_str() {
        "" | "null" | "undefined" | "none" | "n/a" => None,
        _ => Some(text),
    }
}

/// Clamp `items` to `bounds.max` and pad to `bounds.min` with `pad(position)`.
pub(crate) fn fit<T>(
    mut items: Vec<T>,
    bounds: Cardinality,
    mut pad: impl FnMut(usize) -> T,
) -> Vec<T> {
    items.truncate(bounds.max);
    while items.len() < bounds.min {
        let position = items.len();
        items.push(pad(position));
    }
    items
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
