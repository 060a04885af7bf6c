//! Progress event schema and the fixed milestone table.

use serde::{Deserialize, Serialize};

/// One progress notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationProgress {
    pub percent: u8,
    pub message: String,
}

impl GenerationProgress {
    pub fn new(percent: u8, message: impl Into<String>) -> Self {
        Self {
            percent,
            message: message.into(),
        }
    }
}

/// Emitted at the current percent when a run continues with fallback content.
pub const DEGRADED_MESSAGE: &str =
    "Generative service unavailable, continuing with built-in content";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Milestone {
    Started,
    PromptCompiled,
    RequestSent,
    ResponseReceived,
    Parsed,
    Validated,
    Rendered,
    Done,
}

impl Milestone {
    pub const ALL: [Milestone; 8] = [
        Milestone::Started,
        Milestone::PromptCompiled,
        Milestone::RequestSent,
        Milestone::ResponseReceived,
        Milestone::Parsed,
        Milestone::Validated,
        Milestone::Rendered,
        Milestone::Done,
    ];

    pub fn percent(self) -> u8 {
        match self {
            Milestone::Started => 5,
            Milestone::PromptCompiled => 15,
            Milestone::RequestSent => 25,
            Milestone::ResponseReceived => 60,
            Milestone::Parsed => 70,
            Milestone::Validated => 85,
            Milestone::Rendered => 95,
            Milestone::Done => 100,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Milestone::Started => "Starting generation",
            Milestone::PromptCompiled => "Prompt compiled",
            Milestone::RequestSent => "Waiting for the generative service",
            Milestone::ResponseReceived => "Response received",
            Milestone::Parsed => "Response parsed",
            Milestone::Validated => "Content validated",
            Milestone::Rendered => "Pages rendered",
            Milestone::Done => "Generation complete",
        }
    }
}
