//! Validation and Defaulting
//!
//! Turns a loosely-typed parsed object (possibly partial, possibly empty) into fully
//! typed [`StructuredContentData`]. Missing scalars get language-appropriate defaults,
//! arrays are clamped or padded to their mandated cardinality, unknown fields are
//! dropped. Every branch has a default, so validation cannot fail.

use crate::content::StructuredContentData;
use crate::locale::Locale;
use crate::request::{ContentKind, ContentRequest, TargetLanguage};
use chrono::NaiveDate;
use serde_json::Value;

pub(crate) mod fields;
mod manual;
mod presentation;

use fields::Fields;

/// Keys a model sometimes wraps the whole document in.
const WRAPPER_KEYS: &[&str] = &[
    "presentation",
    "manual",
    "slides",
    "content",
    "data",
    "result",
];

/// Inputs the defaults depend on.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    pub language: TargetLanguage,
    pub topic: String,
    pub date: NaiveDate,
}

impl ValidationContext {
    pub fn new(language: TargetLanguage, topic: impl Into<String>, date: NaiveDate) -> Self {
        let topic = topic.into();
        let topic = match topic.trim() {
            "" => Locale::for_language(language).default_topic.to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            language,
            topic,
            date,
        }
    }

    pub fn for_request(request: &ContentRequest, date: NaiveDate) -> Self {
        Self::new(request.target_language, request.topic.clone(), date)
    }

    pub fn locale(&self) -> &'static Locale {
        Locale::for_language(self.language)
    }
}

/// Validate `value` as content of `kind`. Total: any JSON value is accepted.
pub fn validate(
    kind: ContentKind,
    value: &Value,
    ctx: &ValidationContext,
) -> StructuredContentData {
    let root = content_root(value);
    match kind {
        ContentKind::Presentation => {
            StructuredContentData::Presentation(presentation::validate(root, ctx))
        }
        ContentKind::Manual => StructuredContentData::Manual(manual::validate(root, ctx)),
    }
}

/// Content built from defaults alone.
pub fn defaults(kind: ContentKind, ctx: &ValidationContext) -> StructuredContentData {
    validate(kind, &Value::Null, ctx)
}

/// Unwrap `{"presentation": {...}}`-style envelopes.
fn content_root(value: &Value) -> &Value {
    let fields = Fields::of(value);
    if fields.get(&["title"]).is_some() {
        return value;
    }
    match fields.get(WRAPPER_KEYS) {
        Some(inner @ Value::Object(_)) => inner,
        _ => value,
    }
}
