//! Property tests for the repair engine and the validator

use chrono::NaiveDate;
use pagesmith::extraction::{extract, parse_object, repair_text};
use pagesmith::request::{ContentKind, TargetLanguage};
use pagesmith::validation::{validate, ValidationContext};
use proptest::prelude::*;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
struct Deck {
    title: String,
    subtitle: String,
    details: String,
}

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,20}[A-Za-z0-9]"
}

fn deck() -> impl Strategy<Value = Deck> {
    (word(), word(), "[a-z ]{40,120}").prop_map(|(title, subtitle, details)| Deck {
        title,
        subtitle,
        details,
    })
}

/// A serialized deck cut somewhere after the midpoint and after both leading fields.
fn truncated_deck() -> impl Strategy<Value = (Deck, String)> {
    deck().prop_flat_map(|deck| {
        let text = serde_json::to_string(&deck).unwrap_or_default();
        let leading = text.find(",\"details\"").unwrap_or(0) + 1;
        let start = leading.max(text.len() / 2);
        let end = text.len() - 1;
        (Just(deck), start..end).prop_map(move |(deck, cut)| (deck, text[..cut].to_string()))
    })
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(
                prop_oneof![
                    Just("title".to_string()),
                    Just("stats".to_string()),
                    Just("features".to_string()),
                    Just("pricing".to_string()),
                    Just("timeline".to_string()),
                    Just("usage".to_string()),
                    Just("precautions".to_string()),
                    Just("troubleshooting".to_string()),
                    Just("faq".to_string()),
                    "[a-z]{1,8}",
                ],
                inner,
                0..6,
            )
            .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

proptest! {
    #[test]
    fn truncated_output_keeps_leading_fields((deck, text) in truncated_deck()) {
        let extraction = extract(&text).unwrap();
        prop_assert_eq!(extraction.value["title"].as_str(), Some(deck.title.as_str()));
        prop_assert_eq!(extraction.value["subtitle"].as_str(), Some(deck.subtitle.as_str()));
    }

    #[test]
    fn repair_of_truncated_output_is_idempotent((_deck, text) in truncated_deck()) {
        let once = repair_text(&text);
        prop_assert!(parse_object(&once).is_some(), "not an object: {}", once);
        prop_assert_eq!(repair_text(&once), once);
    }

    #[test]
    fn repair_settles_on_arbitrary_json_like_text(raw in r#"[{}\[\]",: a1\\tn-]{0,30}"#) {
        let once = repair_text(&raw);
        prop_assert_eq!(repair_text(&once), once);
    }

    #[test]
    fn doubled_commas_between_items_keep_the_array(deck in deck(), extra in 1usize..4) {
        let separator = format!("}}{} {{", ",".repeat(extra + 1));
        let text = format!(
            r#"{{"title":{},"stats":[{{"value":"1"}},{{"value":"2"}}]}}"#,
            serde_json::to_string(&deck.title).unwrap()
        )
        .replace("},{", &separator);
        let extraction = extract(&text).unwrap();
        prop_assert_eq!(extraction.value["stats"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn valid_objects_survive_repair_unchanged(deck in deck()) {
        let text = serde_json::to_string(&deck).unwrap();
        prop_assert_eq!(repair_text(&text), text);
    }

    #[test]
    fn validation_is_total(value in json_value(), manual in any::<bool>()) {
        let kind = if manual { ContentKind::Manual } else { ContentKind::Presentation };
        let ctx = ValidationContext::new(TargetLanguage::En, "robot vacuum", date());
        let data = validate(kind, &value, &ctx);
        prop_assert_eq!(data.kind(), kind);
        prop_assert!(data.cardinality_violations().is_empty());
        prop_assert!(!data.title().is_empty());
    }

    #[test]
    fn extraction_never_panics(raw in ".{0,200}") {
        let _ = extract(&raw);
    }
}
