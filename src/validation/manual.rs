use super::fields::{fit, scalar_text, strings_from, Fields};
use super::ValidationContext;
use crate::content::{
    FaqEntry, ManualData, PrecautionCategory, TroubleshootingEntry, UsageGuide, UsageSection, FAQ,
    PRECAUTION_CATEGORIES, PRECAUTION_ITEMS, SOLUTIONS, TROUBLESHOOTING, USAGE_STEPS,
};
use crate::locale::fill;
use serde_json::Value;

const DEFAULT_VERSION: &str = "1.0";
const PRECAUTION_ICONS: [&str; 3] = ["⚠️", "🌡️", "🧽"];

const USAGE_SECTION_KEYS: [&[&str]; 3] = [
    &["setup", "initialSetup", "gettingStarted", "installation"],
    &["gestures", "basicUsage", "operation", "controls"],
    &["customization", "customisation", "settings", "personalization"],
];

pub(super) fn validate(root: &Value, ctx: &ValidationContext) -> ManualData {
    let fields = Fields::of(root);
    let locale = ctx.locale();

    let title = fields
        .text(&["title", "productName", "name"])
        .unwrap_or_else(|| ctx.topic.clone());
    let subtitle = fields
        .text(&["subtitle", "tagline", "summary"])
        .unwrap_or_else(|| fill(locale.manual_subtitle, &ctx.topic, 1));
    let version = fields
        .text(&["version", "revision"])
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());
    let date = fields
        .text(&["date", "updated", "lastUpdated", "publishedAt"])
        .unwrap_or_else(|| ctx.date.format("%Y-%m-%d").to_string());

    let usage = usage_guide(fields, ctx);

    let precautions = precaution_categories(fields, ctx);

    let mut troubleshooting = Vec::new();
    for item in fields.list(&["troubleshooting", "problems", "issues"]) {
        if let Some(entry) = troubleshooting_entry(item, troubleshooting.len(), ctx) {
            troubleshooting.push(entry);
        }
    }
    let troubleshooting = fit(troubleshooting, TROUBLESHOOTING, |i| TroubleshootingEntry {
        problem: fill(locale.problem, &ctx.topic, i + 1),
        solutions: default_solutions(ctx),
    });

    let mut faq = Vec::new();
    for item in fields.list(&["faq", "faqs", "questions", "qna"]) {
        if let Some(entry) = faq_entry(item, faq.len(), ctx) {
            faq.push(entry);
        }
    }
    let faq = fit(faq, FAQ, |i| FaqEntry {
        question: fill(locale.question, &ctx.topic, i + 1),
        answer: fill(locale.answer, &ctx.topic, i + 1),
    });

    ManualData {
        title,
        subtitle,
        version,
        date,
        usage,
        precautions,
        troubleshooting,
        faq,
    }
}

/// Usage sections may sit under a `usage` object or directly on the root.
fn usage_guide(root: Fields<'_>, ctx: &ValidationContext) -> UsageGuide {
    let usage = root.object(&["usage", "howToUse", "instructions", "guide"]);
    let [setup, gestures, customization] = [0, 1, 2].map(|i| {
        let keys = USAGE_SECTION_KEYS[i];
        let raw = usage.get(keys).or_else(|| root.get(keys));
        usage_section(raw, i, ctx)
    });
    UsageGuide {
        setup,
        gestures,
        customization,
    }
}

fn usage_section(raw: Option<&Value>, i: usize, ctx: &ValidationContext) -> UsageSection {
    let locale = ctx.locale();
    let (title, steps) = match raw {
        Some(value @ Value::Object(_)) => {
            let fields = Fields::of(value);
            (
                fields.text(&["title", "name", "heading"]),
                fields.string_list(&["steps", "items", "instructions", "content"]),
            )
        }
        Some(other) => (None, strings_from(other)),
        None => (None, Vec::new()),
    };
    UsageSection {
        title: title.unwrap_or_else(|| locale.usage_titles[i].to_string()),
        steps: fit(steps, USAGE_STEPS, |n| fill(locale.usage_step, &ctx.topic, n + 1)),
    }
}

/// Precautions arrive either as a list of categories or as an object mapping
/// category names to item lists.
fn precaution_categories(root: Fields<'_>, ctx: &ValidationContext) -> Vec<PrecautionCategory> {
    let locale = ctx.locale();
    let mut categories = Vec::new();
    match root.get(&["precautions", "warnings", "safety", "cautions"]) {
        Some(Value::Object(map)) if !map.contains_key("title") && !map.contains_key("items") => {
            for (name, items) in map {
                let position = categories.len();
                categories.push(precaution_category(
                    Some(name.clone()),
                    strings_from(items),
                    None,
                    position,
                    ctx,
                ));
            }
        }
        Some(Value::Array(list)) => {
            for item in list {
                if let Some(category) = precaution_from_item(item, categories.len(), ctx) {
                    categories.push(category);
                }
            }
        }
        Some(single @ Value::Object(_)) => {
            if let Some(category) = precaution_from_item(single, 0, ctx) {
                categories.push(category);
            }
        }
        _ => {}
    }
    fit(categories, PRECAUTION_CATEGORIES, |i| {
        precaution_category(
            Some(locale.precaution_titles[i % 3].to_string()),
            Vec::new(),
            None,
            i,
            ctx,
        )
    })
}

fn precaution_from_item(
    item: &Value,
    position: usize,
    ctx: &ValidationContext,
) -> Option<PrecautionCategory> {
    let fields = Fields::of(item);
    if !fields.is_present() {
        // A bare string is a single precaution without a category.
        let text = scalar_text(item)?;
        return Some(precaution_category(None, vec![text], None, position, ctx));
    }
    let title = fields.text(&["title", "category", "name"]);
    let items = fields.string_list(&["items", "points", "list", "warnings", "details"]);
    if title.is_none() && items.is_empty() {
        return None;
    }
    Some(precaution_category(
        title,
        items,
        fields.text(&["icon", "emoji"]),
        position,
        ctx,
    ))
}

fn precaution_category(
    title: Option<String>,
    items: Vec<String>,
    icon: Option<String>,
    position: usize,
    ctx: &ValidationContext,
) -> PrecautionCategory {
    let locale = ctx.locale();
    PrecautionCategory {
        title: title.unwrap_or_else(|| locale.precaution_titles[position % 3].to_string()),
        icon: icon.unwrap_or_else(|| PRECAUTION_ICONS[position % 3].to_string()),
        items: fit(items, PRECAUTION_ITEMS, |n| {
            fill(locale.precaution_item, &ctx.topic, n + 1)
        }),
    }
}

fn troubleshooting_entry(
    item: &Value,
    position: usize,
    ctx: &ValidationContext,
) -> Option<TroubleshootingEntry> {
    let locale = ctx.locale();
    let fields = Fields::of(item);
    let (problem, solutions) = if fields.is_present() {
        (
            fields.text(&["problem", "issue", "symptom", "title"]),
            fields.string_list(&["solutions", "solution", "fixes", "fix", "steps"]),
        )
    } else {
        (scalar_text(item), Vec::new())
    };
    if problem.is_none() && solutions.is_empty() {
        return None;
    }
    Some(TroubleshootingEntry {
        problem: problem.unwrap_or_else(|| fill(locale.problem, &ctx.topic, position + 1)),
        solutions: fit(solutions, SOLUTIONS, |n| {
            fill(locale.solution, &ctx.topic, n + 1)
        }),
    })
}

fn default_solutions(ctx: &ValidationContext) -> Vec<String> {
    fit(Vec::new(), SOLUTIONS, |n| {
        fill(ctx.locale().solution, &ctx.topic, n + 1)
    })
}

fn faq_entry(item: &Value, position: usize, ctx: &ValidationContext) -> Option<FaqEntry> {
    let locale = ctx.locale();
    let fields = Fields::of(item);
    let question = fields.text(&["question", "q", "title"]);
    let answer = fields.text(&["answer", "a", "response"]);
    if question.is_none() && answer.is_none() {
        return None;
    }
    Some(FaqEntry {
        question: question.unwrap_or_else(|| fill(locale.question, &ctx.topic, position + 1)),
        answer: answer.unwrap_or_else(|| fill(locale.answer, &ctx.topic, position + 1)),
    })
}
