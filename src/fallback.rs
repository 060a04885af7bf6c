//! Fallback content synthesis.
//!
//! Builds complete content from the request's topic and language alone. No network,
//! no clock beyond the date the caller passes in, same output for the same inputs.

use crate::content::StructuredContentData;
use crate::request::ContentRequest;
use crate::theme::{self, ThemeTag};
use crate::validation::{self, ValidationContext};
use chrono::NaiveDate;

/// Content and theme used when a run cannot use the model's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackContent {
    pub data: StructuredContentData,
    pub theme: ThemeTag,
}

pub fn build(request: &ContentRequest, date: NaiveDate) -> FallbackContent {
    let ctx = ValidationContext::for_request(request, date);
    let theme = theme::resolve(request, None);
    let mut data = validation::defaults(request.content_kind, &ctx);
    if let StructuredContentData::Presentation(content) = &mut data {
        content.theme = theme.as_str().to_string();
    }
    FallbackContent { data, theme }
}
