//! Structured content data
//!
//! The fully typed form of a presentation or manual, independent of how it is
//! rendered. Values of these types are only produced by the validation layer,
//! which guarantees the cardinalities below.

use crate::request::ContentKind;
use serde::{Deserialize, Serialize};

/// Inclusive bounds on the length of an array field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub min: usize,
    pub max: usize,
}

impl Cardinality {
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

pub const STATS: Cardinality = Cardinality::exactly(3);
pub const FEATURES: Cardinality = Cardinality::exactly(4);
pub const PRICING_TIERS: Cardinality = Cardinality::exactly(3);
pub const TIER_FEATURES: Cardinality = Cardinality::between(2, 5);
pub const TIMELINE: Cardinality = Cardinality::exactly(4);
pub const USAGE_STEPS: Cardinality = Cardinality::between(3, 5);
pub const PRECAUTION_CATEGORIES: Cardinality = Cardinality::exactly(3);
pub const PRECAUTION_ITEMS: Cardinality = Cardinality::between(2, 4);
pub const TROUBLESHOOTING: Cardinality = Cardinality::between(3, 4);
pub const SOLUTIONS: Cardinality = Cardinality::between(1, 3);
pub const FAQ: Cardinality = Cardinality::between(3, 5);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    pub value: String,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub phase: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationData {
    pub title: String,
    pub subtitle: String,
    pub theme: String,
    pub stats: Vec<StatItem>,
    pub features: Vec<FeatureItem>,
    pub pricing: Vec<PricingTier>,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSection {
    pub title: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageGuide {
    pub setup: UsageSection,
    pub gestures: UsageSection,
    pub customization: UsageSection,
}

impl UsageGuide {
    pub fn sections(&self) -> [&UsageSection; 3] {
        [&self.setup, &self.gestures, &self.customization]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecautionCategory {
    pub title: String,
    pub icon: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootingEntry {
    pub problem: String,
    pub solutions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualData {
    pub title: String,
    pub subtitle: String,
    pub version: String,
    pub date: String,
    pub usage: UsageGuide,
    pub precautions: Vec<PrecautionCategory>,
    pub troubleshooting: Vec<TroubleshootingEntry>,
    pub faq: Vec<FaqEntry>,
}

/// Tagged union over the two content shapes, discriminated by [`ContentKind`].
///
/// Serialized untagged: the `contentKind` of the enclosing result carries the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructuredContentData {
    Presentation(PresentationData),
    Manual(ManualData),
}

impl StructuredContentData {
    pub fn kind(&self) -> ContentKind {
        match self {
            StructuredContentData::Presentation(_) => ContentKind::Presentation,
            StructuredContentData::Manual(_) => ContentKind::Manual,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            StructuredContentData::Presentation(data) => &data.title,
            StructuredContentData::Manual(data) => &data.title,
        }
    }

    pub fn subtitle(&self) -> &str {
        match self {
            StructuredContentData::Presentation(data) => &data.subtitle,
            StructuredContentData::Manual(data) => &data.subtitle,
        }
    }

    /// Names of array fields whose length violates their cardinality.
    pub fn cardinality_violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();
        let mut check = |name: &'static str, len: usize, bounds: Cardinality| {
            if !bounds.contains(len) {
                violations.push(name);
            }
        };

        match self {
            StructuredContentData::Presentation(data) => {
                check("stats", data.stats.len(), STATS);
                check("features", data.features.len(), FEATURES);
                check("pricing", data.pricing.len(), PRICING_TIERS);
                for tier in &data.pricing {
                    check("pricing.features", tier.features.len(), TIER_FEATURES);
                }
                check("timeline", data.timeline.len(), TIMELINE);
            }
            StructuredContentData::Manual(data) => {
                for section in data.usage.sections() {
                    check("usage.steps", section.steps.len(), USAGE_STEPS);
                }
                check("precautions", data.precautions.len(), PRECAUTION_CATEGORIES);
                for category in &data.precautions {
                    check("precautions.items", category.items.len(), PRECAUTION_ITEMS);
                }
                check("troubleshooting", data.troubleshooting.len(), TROUBLESHOOTING);
                for entry in &data.troubleshooting {
                    check("troubleshooting.solutions", entry.solutions.len(), SOLUTIONS);
                }
                check("faq", data.faq.len(), FAQ);
            }
        }
        violations
    }
}
