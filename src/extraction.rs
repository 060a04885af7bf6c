//! Structured Extraction and Repair
//!
//! Turns raw model text into a parsed JSON object. The candidate block is isolated
//! first, then an ordered list of repair passes runs with a strict parse after each
//! one; the first success wins. The passes are then repeated until the text settles,
//! and when a greedy span swallowed trailing prose the first complete object is
//! retried. When everything fails, field-level salvage tries to recover at least a
//! title.
//!
//! Each pass is total (never fails, never panics) and idempotent, so the passes can
//! be tested in isolation and composed freely.

mod isolate;
mod normalize;
mod punctuation;
mod salvage;
mod scanner;
mod truncation;

pub use isolate::isolate;
pub use normalize::Normalize;
pub use punctuation::PunctuationRepair;
pub use truncation::TruncationRecovery;

use crate::error::GenerationError;
use scanner::analyze;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// One text-to-text repair step.
pub trait RepairPass: Send + Sync {
    fn name(&self) -> &'static str;

    /// Total and idempotent: `apply(apply(x)) == apply(x)`.
    fn apply(&self, text: &str) -> String;
}

/// Which tier produced the parsed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStage {
    Direct,
    Normalized,
    TruncationRecovered,
    PunctuationRepaired,
    Salvaged,
}

impl ExtractionStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionStage::Direct => "direct",
            ExtractionStage::Normalized => "normalized",
            ExtractionStage::TruncationRecovered => "truncation_recovered",
            ExtractionStage::PunctuationRepaired => "punctuation_repaired",
            ExtractionStage::Salvaged => "salvaged",
        }
    }
}

impl fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub value: Value,
    pub stage: ExtractionStage,
}

/// The repair passes in application order, each paired with the stage it reports.
pub fn passes() -> [(&'static dyn RepairPass, ExtractionStage); 3] {
    [
        (&Normalize, ExtractionStage::Normalized),
        (&TruncationRecovery, ExtractionStage::TruncationRecovered),
        (&PunctuationRepair, ExtractionStage::PunctuationRepaired),
    ]
}

/// Upper bound on full rounds of passes in [`repair_text`].
const MAX_REPAIR_ROUNDS: usize = 16;

fn repair_round(text: &str) -> String {
    passes()
        .iter()
        .fold(text.to_string(), |current, (pass, _)| pass.apply(&current))
}

/// Run every repair pass over `text`, without parsing in between, until the text
/// stops changing. When the rounds cycle, the smallest text of the cycle is the
/// result, so `repair_text(repair_text(x)) == repair_text(x)`.
pub fn repair_text(text: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    let mut current = text.to_string();
    for _ in 0..MAX_REPAIR_ROUNDS {
        let next = repair_round(&current);
        if next == current {
            return current;
        }
        if let Some(start) = seen.iter().position(|earlier| *earlier == next) {
            seen.push(current);
            return seen.split_off(start).into_iter().min().unwrap_or_default();
        }
        seen.push(current);
        current = next;
    }
    current
}

/// Extract a JSON object from raw model output.
pub fn extract(raw: &str) -> Result<Extraction, GenerationError> {
    if let Some(candidate) = isolate(raw) {
        if let Some(extraction) = repair_candidate(candidate) {
            return Ok(extraction);
        }

        // Braces in trailing prose widen the span; retry with the first complete object.
        let closed_at = analyze(candidate)
            .closed_at
            .filter(|&end| end < candidate.trim_end().len());
        if let Some(end) = closed_at {
            debug!(end, length = candidate.len(), "Retrying with the first complete object");
            if let Some(extraction) = repair_candidate(&candidate[..end]) {
                return Ok(extraction);
            }
        }
    } else {
        debug!(length = raw.len(), "No structured block in response");
    }

    let normalized = Normalize.apply(raw);
    match salvage::salvage(&normalized) {
        Some(value) => Ok(found(value, ExtractionStage::Salvaged)),
        None => {
            debug!("Salvage found no title; response is unparsable");
            Err(GenerationError::UnparsableResponse)
        }
    }
}

/// Strict parse, then each pass in order with a strict parse after it, then the
/// passes repeated to a fixpoint.
fn repair_candidate(candidate: &str) -> Option<Extraction> {
    if let Some(value) = parse_object(candidate) {
        return Some(found(value, ExtractionStage::Direct));
    }

    let mut text = candidate.to_string();
    for (pass, stage) in passes() {
        text = pass.apply(&text);
        debug!(pass = pass.name(), length = text.len(), "Applied repair pass");
        if let Some(value) = parse_object(&text) {
            return Some(found(value, stage));
        }
    }

    let settled = repair_text(&text);
    if settled != text {
        debug!(length = settled.len(), "Repeated repair passes to a fixpoint");
        if let Some(value) = parse_object(&settled) {
            return Some(found(value, ExtractionStage::PunctuationRepaired));
        }
    }
    None
}

fn found(value: Value, stage: ExtractionStage) -> Extraction {
    debug!(stage = %stage, "Extracted structured block");
    Extraction { value, stage }
}

/// Strict parse. Accepts an object, or an array whose first element is an object.
pub fn parse_object(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text.trim()).ok()? {
        value @ Value::Object(_) => Some(value),
        Value::Array(items) => items.into_iter().next().filter(Value::is_object),
        _ => None,
    }
}
