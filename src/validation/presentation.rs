use super::fields::{fit, scalar_text, Fields};
use super::ValidationContext;
use crate::content::{
    FeatureItem, PresentationData, PricingTier, StatItem, TimelineEntry, FEATURES, PRICING_TIERS,
    STATS, TIER_FEATURES, TIMELINE,
};
use crate::locale::fill;
use crate::theme::ThemeTag;
use serde_json::Value;

const STAT_COLORS: [&str; 3] = ["primary", "secondary", "accent"];
const FEATURE_ICONS: [&str; 4] = ["🚀", "⚙️", "🔒", "📈"];
const HIGHLIGHTED_TIER: usize = 1;

pub(super) fn validate(root: &Value, ctx: &ValidationContext) -> PresentationData {
    let fields = Fields::of(root);
    let locale = ctx.locale();

    let title = fields
        .text(&["title", "headline", "name"])
        .unwrap_or_else(|| ctx.topic.clone());
    let subtitle = fields
        .text(&["subtitle", "tagline", "summary"])
        .unwrap_or_else(|| fill(locale.presentation_subtitle, &ctx.topic, 1));
    let theme = fields
        .text(&["theme", "category", "themeTag"])
        .and_then(|name| ThemeTag::from_name(&name))
        .unwrap_or(ThemeTag::General)
        .as_str()
        .to_string();

    let mut stats = Vec::new();
    for item in fields.list(&["stats", "statistics", "metrics"]) {
        if let Some(parsed) = stat(item, stats.len(), ctx) {
            stats.push(parsed);
        }
    }
    let stats = fit(stats, STATS, |i| StatItem {
        value: locale.stat_values[i % 3].to_string(),
        label: locale.stat_labels[i % 3].to_string(),
        color: STAT_COLORS[i % 3].to_string(),
    });

    let mut features = Vec::new();
    for item in fields.list(&["features", "highlights", "benefits"]) {
        if let Some(parsed) = feature(item, features.len(), ctx) {
            features.push(parsed);
        }
    }
    let features = fit(features, FEATURES, |i| default_feature(i, ctx));

    let mut pricing = Vec::new();
    for item in fields.list(&["pricing", "pricingTiers", "plans", "tiers"]) {
        if let Some(parsed) = tier(item, pricing.len(), ctx) {
            pricing.push(parsed);
        }
    }
    let mut pricing = fit(pricing, PRICING_TIERS, |i| PricingTier {
        name: locale.tier_names[i % 3].to_string(),
        price: locale.tier_prices[i % 3].to_string(),
        period: locale.price_period.to_string(),
        features: fit(Vec::new(), TIER_FEATURES, |n| fill(locale.tier_feature, &ctx.topic, n + 1)),
        highlighted: false,
    });
    normalize_highlight(&mut pricing);

    let mut timeline = Vec::new();
    for item in fields.list(&["timeline", "roadmap", "milestones", "phases"]) {
        if let Some(parsed) = timeline_entry(item, timeline.len(), ctx) {
            timeline.push(parsed);
        }
    }
    let timeline = fit(timeline, TIMELINE, |i| TimelineEntry {
        phase: fill(locale.timeline_phase, &ctx.topic, i + 1),
        title: locale.timeline_titles[i % 4].to_string(),
        description: fill(locale.timeline_description, &ctx.topic, i + 1),
    });

    PresentationData {
        title,
        subtitle,
        theme,
        stats,
        features,
        pricing,
        timeline,
    }
}

fn stat(item: &Value, i: usize, ctx: &ValidationContext) -> Option<StatItem> {
    let locale = ctx.locale();
    let fields = Fields::of(item);
    let (value, label) = if fields.is_present() {
        (
            fields.text(&["value", "number", "stat", "figure"]),
            fields.text(&["label", "title", "name", "description"]),
        )
    } else {
        (None, scalar_text(item))
    };
    if value.is_none() && label.is_none() {
        return None;
    }
    Some(StatItem {
        value: value.unwrap_or_else(|| locale.stat_values[i % 3].to_string()),
        label: label.unwrap_or_else(|| locale.stat_labels[i % 3].to_string()),
        color: fields
            .text(&["color", "colorTag", "colour"])
            .unwrap_or_else(|| STAT_COLORS[i % 3].to_string()),
    })
}

fn feature(item: &Value, i: usize, ctx: &ValidationContext) -> Option<FeatureItem> {
    let fields = Fields::of(item);
    let (title, description) = if fields.is_present() {
        (
            fields.text(&["title", "name", "feature"]),
            fields.text(&["description", "desc", "detail", "text"]),
        )
    } else {
        (scalar_text(item), None)
    };
    if title.is_none() && description.is_none() {
        return None;
    }
    let default = default_feature(i, ctx);
    Some(FeatureItem {
        icon: fields.text(&["icon", "emoji"]).unwrap_or(default.icon),
        title: title.unwrap_or(default.title),
        description: description.unwrap_or(default.description),
    })
}

fn default_feature(i: usize, ctx: &ValidationContext) -> FeatureItem {
    let locale = ctx.locale();
    FeatureItem {
        icon: FEATURE_ICONS[i % 4].to_string(),
        title: locale.feature_titles[i % 4].to_string(),
        description: fill(locale.feature_description, &ctx.topic, i + 1),
    }
}

fn tier(item: &Value, i: usize, ctx: &ValidationContext) -> Option<PricingTier> {
    let locale = ctx.locale();
    let fields = Fields::of(item);
    let name = fields.text(&["name", "title", "tier", "plan"]);
    let price = fields.text(&["price", "cost", "amount"]);
    if name.is_none() && price.is_none() {
        return None;
    }
    let features = fields.string_list(&["features", "benefits", "includes", "items"]);
    Some(PricingTier {
        name: name.unwrap_or_else(|| locale.tier_names[i % 3].to_string()),
        price: price.unwrap_or_else(|| locale.tier_prices[i % 3].to_string()),
        period: fields
            .text(&["period", "billing", "interval"])
            .unwrap_or_else(|| locale.price_period.to_string()),
        features: fit(features, TIER_FEATURES, |n| {
            fill(locale.tier_feature, &ctx.topic, n + 1)
        }),
        highlighted: fields
            .flag(&["highlighted", "recommended", "popular", "featured"])
            .unwrap_or(false),
    })
}

/// Exactly one tier is highlighted; when the model marked none or several, the middle one wins.
fn normalize_highlight(tiers: &mut [PricingTier]) {
    let marked = tiers.iter().filter(|tier| tier.highlighted).count();
    if marked == 1 {
        return;
    }
    let chosen = HIGHLIGHTED_TIER.min(tiers.len().saturating_sub(1));
    for (i, tier) in tiers.iter_mut().enumerate() {
        tier.highlighted = i == chosen;
    }
}

fn timeline_entry(item: &Value, i: usize, ctx: &ValidationContext) -> Option<TimelineEntry> {
    let locale = ctx.locale();
    let fields = Fields::of(item);
    let (title, description) = if fields.is_present() {
        (
            fields.text(&["title", "milestone", "name"]),
            fields.text(&["description", "desc", "detail"]),
        )
    } else {
        (scalar_text(item), None)
    };
    if title.is_none() && description.is_none() {
        return None;
    }
    Some(TimelineEntry {
        phase: fields
            .text(&["phase", "date", "period", "when", "quarter", "step"])
            .unwrap_or_else(|| fill(locale.timeline_phase, &ctx.topic, i + 1)),
        title: title.unwrap_or_else(|| locale.timeline_titles[i % 4].to_string()),
        description: description
            .unwrap_or_else(|| fill(locale.timeline_description, &ctx.topic, i + 1)),
    })
}
