//! Prompt Compiler
//!
//! Builds the single instruction string sent to the generative service. The
//! instructions are fixed English text; the embedded example document is built from
//! the validator's own defaults, so its placeholder values are already in the
//! target language and its shape always matches what the validator reads back.

use crate::content::{
    Cardinality, FAQ, FEATURES, PRECAUTION_CATEGORIES, PRECAUTION_ITEMS, PRICING_TIERS, SOLUTIONS,
    STATS, TIER_FEATURES, TIMELINE, TROUBLESHOOTING, USAGE_STEPS,
};
use crate::locale::Locale;
use crate::request::{ContentKind, ContentRequest, DetailLevel};
use crate::theme::{self, ThemeTag};
use crate::validation::{self, ValidationContext};
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt::Write;

/// Upper bound on the compiled prompt, in characters.
pub const PROMPT_CHAR_BUDGET: usize = 6000;

/// Upper bound on each free-text request field embedded in the prompt.
pub const FIELD_CHAR_LIMIT: usize = 200;

/// The example repeats the topic in many placeholders; it gets a shorter cut.
const EXAMPLE_TOPIC_LIMIT: usize = 48;

/// Branches of the presentation schema the model may leave out.
const OPTIONAL_PRESENTATION_BRANCHES: [&str; 2] = ["pricing", "timeline"];

/// Compile `request` into a prompt. Pure: no I/O, no clock, no failure mode.
pub fn compile(request: &ContentRequest) -> String {
    let include_optional = request.effective_detail_level() != DetailLevel::Basic;
    let prompt = render_prompt(request, include_optional);
    if prompt.chars().count() <= PROMPT_CHAR_BUDGET || !include_optional {
        return prompt;
    }
    render_prompt(request, false)
}

fn render_prompt(request: &ContentRequest, include_optional: bool) -> String {
    let language = request.target_language;
    let locale = Locale::for_language(language);
    let topic = clip(request.topic_text().unwrap_or(locale.default_topic));
    let example = example_document(request, &topic, include_optional);

    let mut prompt = String::with_capacity(PROMPT_CHAR_BUDGET);
    let subject = match request.content_kind {
        ContentKind::Presentation => "a five-slide presentation",
        ContentKind::Manual => "a five-section user manual",
    };
    let _ = writeln!(prompt, "Create {subject} about \"{topic}\".");
    let _ = writeln!(
        prompt,
        "Audience level: {}. Detail level: {}.",
        request.difficulty.as_str(),
        request.effective_detail_level().as_str()
    );
    if let Some(style) = request.style.as_deref().map(clip).filter(|s| !s.is_empty()) {
        let _ = writeln!(prompt, "Tone and style: {style}.");
    }
    if let Some(industry) = request.industry.as_deref().map(clip).filter(|s| !s.is_empty()) {
        let _ = writeln!(prompt, "Industry: {industry}.");
    }
    let _ = writeln!(
        prompt,
        "Write every text value in {} ({}), matching the language of the example values.",
        language.display_name(),
        language.code()
    );

    prompt.push_str("\nRequirements:\n");
    for line in requirements(request.content_kind, include_optional) {
        let _ = writeln!(prompt, "- {line}");
    }

    prompt.push_str(
        "\nRespond ONLY with a single JSON object shaped exactly like the example below. \
         Do not add markdown fences, comments or any text before or after the JSON.\n\nExample:\n",
    );
    prompt.push_str(&example);
    prompt.push('\n');
    prompt
}

fn requirements(kind: ContentKind, include_optional: bool) -> Vec<String> {
    let mut lines = Vec::new();
    match kind {
        ContentKind::Presentation => {
            lines.push(format!("\"stats\": {} items with value, label and color", count(STATS)));
            lines.push(format!(
                "\"features\": {} items with icon (one emoji), title and description",
                count(FEATURES)
            ));
            if include_optional {
                lines.push(format!(
                    "\"pricing\": {} tiers, each with {} features; mark one tier highlighted",
                    count(PRICING_TIERS),
                    count(TIER_FEATURES)
                ));
                lines.push(format!(
                    "\"timeline\": {} entries with phase, title and description",
                    count(TIMELINE)
                ));
            }
            let tags: Vec<&str> = ThemeTag::ALL.iter().map(|tag| tag.as_str()).collect();
            lines.push(format!("\"theme\": one of {}", tags.join(", ")));
            lines.push(
                "\"color\": one of primary, secondary, accent, success, warning".to_string(),
            );
        }
        ContentKind::Manual => {
            lines.push(format!(
                "\"usage\": setup, gestures and customization sections with {} steps each",
                count(USAGE_STEPS)
            ));
            lines.push(format!(
                "\"precautions\": {} categories with {} items each",
                count(PRECAUTION_CATEGORIES),
                count(PRECAUTION_ITEMS)
            ));
            lines.push(format!(
                "\"troubleshooting\": {} entries, each with {} solutions",
                count(TROUBLESHOOTING),
                count(SOLUTIONS)
            ));
            lines.push(format!("\"faq\": {} question and answer pairs", count(FAQ)));
            lines.push("\"date\": YYYY-MM-DD".to_string());
        }
    }
    lines
}

fn count(bounds: Cardinality) -> String {
    if bounds.min == bounds.max {
        format!("exactly {}", bounds.min)
    } else {
        format!("{} to {}", bounds.min, bounds.max)
    }
}

/// The validator's defaults for this request, serialized compactly.
fn example_document(request: &ContentRequest, topic: &str, include_optional: bool) -> String {
    let topic: String = topic.chars().take(EXAMPLE_TOPIC_LIMIT).collect();
    let ctx = ValidationContext::new(request.target_language, topic, NaiveDate::default());
    let data = validation::defaults(request.content_kind, &ctx);
    let mut example = serde_json::to_value(&data).unwrap_or(Value::Null);

    if let Value::Object(map) = &mut example {
        match request.content_kind {
            ContentKind::Presentation => {
                let theme = theme::resolve(request, None);
                map.insert("theme".to_string(), Value::String(theme.as_str().to_string()));
                if !include_optional {
                    for branch in OPTIONAL_PRESENTATION_BRANCHES {
                        map.remove(branch);
                    }
                }
            }
            ContentKind::Manual => {
                map.insert("date".to_string(), Value::String("YYYY-MM-DD".to_string()));
            }
        }
    }
    example.to_string()
}

/// Collapse whitespace and cut to [`FIELD_CHAR_LIMIT`] characters.
fn clip(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(FIELD_CHAR_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Difficulty, TargetLanguage};

    fn request(kind: ContentKind, language: TargetLanguage) -> ContentRequest {
        ContentRequest::new(kind, "smart home hub", language, Difficulty::Intermediate)
    }

    #[test]
    fn example_values_are_in_the_target_language() {
        let prompt = compile(&request(ContentKind::Presentation, TargetLanguage::Ko));
        let locale = Locale::for_language(TargetLanguage::Ko);
        assert!(prompt.contains("smart home hub"));
        assert!(prompt.contains(locale.stat_labels[0]));
        assert!(prompt.contains("Korean"));
        assert!(prompt.contains("Respond ONLY"));
    }

    #[test]
    fn basic_detail_omits_optional_branches() {
        let request = request(ContentKind::Presentation, TargetLanguage::En)
            .with_detail_level(DetailLevel::Basic);
        let prompt = compile(&request);
        assert!(!prompt.contains("\"pricing\""));
        assert!(!prompt.contains("\"timeline\""));
        assert!(prompt.contains("\"features\""));
    }

    #[test]
    fn manual_prompt_has_no_presentation_branches() {
        let prompt = compile(&request(ContentKind::Manual, TargetLanguage::Ja));
        assert!(prompt.contains("\"troubleshooting\""));
        assert!(prompt.contains("YYYY-MM-DD"));
        assert!(!prompt.contains("\"pricing\""));
        assert!(!prompt.contains("\"stats\""));
    }

    #[test]
    fn industry_selects_the_example_theme() {
        let request =
            request(ContentKind::Presentation, TargetLanguage::En).with_industry("fintech");
        assert!(compile(&request).contains("\"theme\":\"finance\""));
    }

    #[test]
    fn oversized_fields_stay_within_budget() {
        let long = "very long topic ".repeat(500);
        let request = ContentRequest::new(
            ContentKind::Manual,
            long.clone(),
            TargetLanguage::Zh,
            Difficulty::Advanced,
        )
        .with_style(long.clone())
        .with_industry(long);
        let prompt = compile(&request);
        assert!(prompt.chars().count() <= PROMPT_CHAR_BUDGET);
    }

    #[test]
    fn blank_topic_uses_the_default_topic() {
        let mut request = request(ContentKind::Presentation, TargetLanguage::En);
        request.topic = "  ".to_string();
        assert!(compile(&request).contains("about \"New topic\""));
    }

    #[test]
    fn compilation_is_deterministic() {
        let request = request(ContentKind::Manual, TargetLanguage::Es);
        assert_eq!(compile(&request), compile(&request));
    }
}
