//! Generation requests
//!
//! The immutable input of one pipeline run, plus the small enums that describe
//! what is being asked for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of artifact to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Presentation,
    Manual,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Presentation => "presentation",
            ContentKind::Manual => "manual",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presentation" | "slides" | "deck" => Ok(ContentKind::Presentation),
            "manual" | "guide" => Ok(ContentKind::Manual),
            other => Err(format!(
                "Unknown content kind: {} (expected 'presentation' or 'manual')",
                other
            )),
        }
    }
}

/// Language the generated content is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Ko,
    En,
    Ja,
    Zh,
    Es,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Ko,
        TargetLanguage::En,
        TargetLanguage::Ja,
        TargetLanguage::Zh,
        TargetLanguage::Es,
    ];

    /// ISO-639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::Ko => "ko",
            TargetLanguage::En => "en",
            TargetLanguage::Ja => "ja",
            TargetLanguage::Zh => "zh",
            TargetLanguage::Es => "es",
        }
    }

    /// English display name, used when instructing the model.
    pub fn display_name(self) -> &'static str {
        match self {
            TargetLanguage::Ko => "Korean",
            TargetLanguage::En => "English",
            TargetLanguage::Ja => "Japanese",
            TargetLanguage::Zh => "Simplified Chinese",
            TargetLanguage::Es => "Spanish",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "korean" => Ok(TargetLanguage::Ko),
            "en" | "english" => Ok(TargetLanguage::En),
            "ja" | "japanese" => Ok(TargetLanguage::Ja),
            "zh" | "chinese" => Ok(TargetLanguage::Zh),
            "es" | "spanish" => Ok(TargetLanguage::Es),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "basic" | "easy" => Ok(Difficulty::Beginner),
            "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "advanced" | "expert" | "hard" => Ok(Difficulty::Advanced),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Basic,
    #[default]
    Detailed,
    Comprehensive,
}

impl DetailLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailLevel::Basic => "basic",
            DetailLevel::Detailed => "detailed",
            DetailLevel::Comprehensive => "comprehensive",
        }
    }
}

impl FromStr for DetailLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(DetailLevel::Basic),
            "detailed" => Ok(DetailLevel::Detailed),
            "comprehensive" => Ok(DetailLevel::Comprehensive),
            other => Err(format!("Unknown detail level: {}", other)),
        }
    }
}

/// Whether a pipeline talks to the generative service at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Call the gateway and fall back only on failure.
    #[default]
    Live,
    /// Never call the gateway; every run renders fallback content.
    Offline,
}

/// One generation request. Created by the caller, consumed once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub content_kind: ContentKind,
    pub topic: String,
    pub target_language: TargetLanguage,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_level: Option<DetailLevel>,
}

impl ContentRequest {
    pub fn new(
        content_kind: ContentKind,
        topic: impl Into<String>,
        target_language: TargetLanguage,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            content_kind,
            topic: topic.into(),
            target_language,
            difficulty,
            style: None,
            industry: None,
            detail_level: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_detail_level(mut self, detail_level: DetailLevel) -> Self {
        self.detail_level = Some(detail_level);
        self
    }

    /// Trimmed topic, or `None` when the caller left it blank.
    pub fn topic_text(&self) -> Option<&str> {
        let trimmed = self.topic.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn effective_detail_level(&self) -> DetailLevel {
        self.detail_level.unwrap_or_default()
    }
}
