//! Theme Resolution
//!
//! Maps a request's industry (or the model's suggested theme) to a theme tag and a
//! colour palette. Every lookup ends in a default branch, so resolution is total.

use crate::request::{ContentKind, ContentRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeTag {
    Tech,
    Health,
    Finance,
    Education,
    Food,
    Travel,
    Creative,
    Guide,
    General,
}

impl ThemeTag {
    pub const ALL: [ThemeTag; 9] = [
        ThemeTag::Tech,
        ThemeTag::Health,
        ThemeTag::Finance,
        ThemeTag::Education,
        ThemeTag::Food,
        ThemeTag::Travel,
        ThemeTag::Creative,
        ThemeTag::Guide,
        ThemeTag::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeTag::Tech => "tech",
            ThemeTag::Health => "health",
            ThemeTag::Finance => "finance",
            ThemeTag::Education => "education",
            ThemeTag::Food => "food",
            ThemeTag::Travel => "travel",
            ThemeTag::Creative => "creative",
            ThemeTag::Guide => "guide",
            ThemeTag::General => "general",
        }
    }

    /// Exact (case-insensitive) tag name lookup.
    pub fn from_name(name: &str) -> Option<ThemeTag> {
        let name = name.trim().to_ascii_lowercase();
        ThemeTag::ALL.into_iter().find(|tag| tag.as_str() == name)
    }

    pub fn default_for(kind: ContentKind) -> ThemeTag {
        match kind {
            ContentKind::Presentation => ThemeTag::General,
            ContentKind::Manual => ThemeTag::Guide,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeTag::Tech => &TECH,
            ThemeTag::Health => &HEALTH,
            ThemeTag::Finance => &FINANCE,
            ThemeTag::Education => &EDUCATION,
            ThemeTag::Food => &FOOD,
            ThemeTag::Travel => &TRAVEL,
            ThemeTag::Creative => &CREATIVE,
            ThemeTag::Guide => &GUIDE,
            ThemeTag::General => &GENERAL,
        }
    }
}

/// Colour set handed to every page renderer.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

impl Palette {
    /// Resolve a colour tag from the content data. Literal `#rgb`/`#rrggbb` values pass
    /// through; anything unrecognised resolves to the primary colour.
    pub fn color<'a>(&'a self, tag: &'a str) -> &'a str {
        match tag.trim().to_ascii_lowercase().as_str() {
            "primary" => self.primary,
            "secondary" => self.secondary,
            "accent" => self.accent,
            "success" | "green" => self.success,
            "warning" | "orange" | "yellow" => self.warning,
            _ if is_hex_color(tag.trim()) => tag.trim(),
            _ => self.primary,
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Industry keywords. ASCII keywords match whole words; others match as substrings.
const INDUSTRY_KEYWORDS: &[(&str, ThemeTag)] = &[
    ("tech", ThemeTag::Tech),
    ("technology", ThemeTag::Tech),
    ("software", ThemeTag::Tech),
    ("it", ThemeTag::Tech),
    ("electronics", ThemeTag::Tech),
    ("iot", ThemeTag::Tech),
    ("ai", ThemeTag::Tech),
    ("기술", ThemeTag::Tech),
    ("전자", ThemeTag::Tech),
    ("技術", ThemeTag::Tech),
    ("科技", ThemeTag::Tech),
    ("tecnología", ThemeTag::Tech),
    ("health", ThemeTag::Health),
    ("healthcare", ThemeTag::Health),
    ("medical", ThemeTag::Health),
    ("fitness", ThemeTag::Health),
    ("wellness", ThemeTag::Health),
    ("의료", ThemeTag::Health),
    ("헬스", ThemeTag::Health),
    ("医療", ThemeTag::Health),
    ("医疗", ThemeTag::Health),
    ("salud", ThemeTag::Health),
    ("finance", ThemeTag::Finance),
    ("fintech", ThemeTag::Finance),
    ("banking", ThemeTag::Finance),
    ("insurance", ThemeTag::Finance),
    ("금융", ThemeTag::Finance),
    ("金融", ThemeTag::Finance),
    ("finanzas", ThemeTag::Finance),
    ("education", ThemeTag::Education),
    ("edtech", ThemeTag::Education),
    ("school", ThemeTag::Education),
    ("교육", ThemeTag::Education),
    ("教育", ThemeTag::Education),
    ("educación", ThemeTag::Education),
    ("food", ThemeTag::Food),
    ("restaurant", ThemeTag::Food),
    ("cooking", ThemeTag::Food),
    ("음식", ThemeTag::Food),
    ("요리", ThemeTag::Food),
    ("料理", ThemeTag::Food),
    ("餐饮", ThemeTag::Food),
    ("comida", ThemeTag::Food),
    ("travel", ThemeTag::Travel),
    ("tourism", ThemeTag::Travel),
    ("hospitality", ThemeTag::Travel),
    ("여행", ThemeTag::Travel),
    ("旅行", ThemeTag::Travel),
    ("旅游", ThemeTag::Travel),
    ("viajes", ThemeTag::Travel),
    ("design", ThemeTag::Creative),
    ("art", ThemeTag::Creative),
    ("media", ThemeTag::Creative),
    ("fashion", ThemeTag::Creative),
    ("디자인", ThemeTag::Creative),
    ("デザイン", ThemeTag::Creative),
    ("设计", ThemeTag::Creative),
    ("diseño", ThemeTag::Creative),
];

pub fn tag_for_industry(industry: &str) -> Option<ThemeTag> {
    let lowered = industry.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    INDUSTRY_KEYWORDS.iter().find_map(|(keyword, tag)| {
        let hit = if keyword.is_ascii() {
            words.iter().any(|word| word == keyword)
        } else {
            lowered.contains(keyword)
        };
        hit.then_some(*tag)
    })
}

/// Resolve the theme for one run.
///
/// Precedence: the request's industry, then the theme the model suggested, then the
/// default for the content kind.
pub fn resolve(request: &ContentRequest, suggested: Option<&str>) -> ThemeTag {
    request
        .industry
        .as_deref()
        .and_then(tag_for_industry)
        .or_else(|| suggested.and_then(ThemeTag::from_name))
        .unwrap_or_else(|| ThemeTag::default_for(request.content_kind))
}

static TECH: Palette = Palette {
    primary: "#2563eb",
    secondary: "#7c3aed",
    accent: "#06b6d4",
    success: "#10b981",
    warning: "#f59e0b",
    background: "#0f172a",
    surface: "#1e293b",
    text: "#f8fafc",
    muted: "#94a3b8",
};

static HEALTH: Palette = Palette {
    primary: "#059669",
    secondary: "#0d9488",
    accent: "#34d399",
    success: "#16a34a",
    warning: "#ea580c",
    background: "#f0fdf4",
    surface: "#ffffff",
    text: "#064e3b",
    muted: "#6b7280",
};

static FINANCE: Palette = Palette {
    primary: "#1e3a8a",
    secondary: "#0f766e",
    accent: "#d4a017",
    success: "#15803d",
    warning: "#b45309",
    background: "#f8fafc",
    surface: "#ffffff",
    text: "#0f172a",
    muted: "#64748b",
};

static EDUCATION: Palette = Palette {
    primary: "#4f46e5",
    secondary: "#db2777",
    accent: "#f59e0b",
    success: "#22c55e",
    warning: "#f97316",
    background: "#fefce8",
    surface: "#ffffff",
    text: "#1e1b4b",
    muted: "#71717a",
};

static FOOD: Palette = Palette {
    primary: "#dc2626",
    secondary: "#ea580c",
    accent: "#facc15",
    success: "#65a30d",
    warning: "#d97706",
    background: "#fff7ed",
    surface: "#ffffff",
    text: "#431407",
    muted: "#78716c",
};

static TRAVEL: Palette = Palette {
    primary: "#0284c7",
    secondary: "#0891b2",
    accent: "#f97316",
    success: "#16a34a",
    warning: "#eab308",
    background: "#f0f9ff",
    surface: "#ffffff",
    text: "#082f49",
    muted: "#64748b",
};

static CREATIVE: Palette = Palette {
    primary: "#c026d3",
    secondary: "#e11d48",
    accent: "#8b5cf6",
    success: "#14b8a6",
    warning: "#f59e0b",
    background: "#fdf4ff",
    surface: "#ffffff",
    text: "#3b0764",
    muted: "#737373",
};

static GUIDE: Palette = Palette {
    primary: "#334155",
    secondary: "#2563eb",
    accent: "#0ea5e9",
    success: "#16a34a",
    warning: "#dc2626",
    background: "#ffffff",
    surface: "#f1f5f9",
    text: "#0f172a",
    muted: "#64748b",
};

static GENERAL: Palette = Palette {
    primary: "#3b82f6",
    secondary: "#8b5cf6",
    accent: "#ec4899",
    success: "#10b981",
    warning: "#f59e0b",
    background: "#ffffff",
    surface: "#f8fafc",
    text: "#111827",
    muted: "#6b7280",
};
