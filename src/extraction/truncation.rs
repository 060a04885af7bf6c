//! Truncation recovery for output that stopped mid-structure.

use super::scanner::analyze;
use super::RepairPass;

pub struct TruncationRecovery;

impl RepairPass for TruncationRecovery {
    fn name(&self) -> &'static str {
        "truncation"
    }

    fn apply(&self, text: &str) -> String {
        let structure = analyze(text);
        if structure.is_balanced() {
            return text.to_string();
        }

        // Cut off inside a value string: keep the partial text.
        if structure.in_string && !structure.string_is_key {
            let mut out = match structure.pending_escape {
                Some(start) => text[..start].to_string(),
                None => text.to_string(),
            };
            out.push('"');
            out.push_str(&structure.closers());
            return out;
        }

        if !structure.in_string && structure.ends_with_value {
            let mut out = text.trim_end().to_string();
            out.push_str(&structure.closers());
            return out;
        }

        match structure.cut_points.last() {
            Some(&cut) => {
                let prefix = text[..cut].trim_end();
                let mut out = prefix.to_string();
                out.push_str(&analyze(prefix).closers());
                out
            }
            None => {
                let mut out = text.to_string();
                if structure.in_string {
                    out.push('"');
                }
                out.push_str(&structure.closers());
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn recover(text: &str) -> Value {
        let fixed = TruncationRecovery.apply(text);
        serde_json::from_str(&fixed).unwrap_or_else(|e| panic!("{fixed}: {e}"))
    }

    #[test]
    fn balanced_text_is_unchanged() {
        let text = r#"{"a": [1, 2]}"#;
        assert_eq!(TruncationRecovery.apply(text), text);
    }

    #[test]
    fn open_value_string_is_closed() {
        let value = recover(r#"{"title": "Hub", "subtitle": "Always on"#);
        assert_eq!(value["subtitle"], "Always on");
    }

    #[test]
    fn partial_key_is_dropped() {
        let value = recover(r#"{"title": "Hub", "subt"#);
        assert_eq!(value, serde_json::json!({"title": "Hub"}));
    }

    #[test]
    fn dangling_colon_drops_the_pair() {
        let value = recover(r#"{"title": "Hub", "stats": [{"value": "1"}, {"label":"#);
        assert_eq!(value["stats"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["stats"][1], serde_json::json!({}));
    }

    #[test]
    fn complete_scalars_are_kept() {
        assert_eq!(recover("[1, 2, 30"), serde_json::json!([1, 2, 30]));
        assert_eq!(recover(r#"{"a": true"#), serde_json::json!({"a": true}));
        assert_eq!(recover(r#"{"a": 1, "b": tr"#), serde_json::json!({"a": 1}));
    }

    #[test]
    fn unfinished_escape_is_removed() {
        let value = recover(r#"{"a": "line\u00"#);
        assert_eq!(value["a"], "line");
    }

    #[test]
    fn recovery_is_idempotent() {
        let once = TruncationRecovery.apply(r#"{"a": {"b": [1, {"c": "d"#);
        assert_eq!(TruncationRecovery.apply(&once), once);
    }
}
