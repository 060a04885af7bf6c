//! Template Selection and Rendering
//!
//! Maps validated content plus a theme tag to exactly [`PAGE_COUNT`] pages in a
//! fixed order. Each page renderer is a pure function of the content, the palette
//! and the language table; dispatch goes through a per-kind table of renderers.

pub mod markup;
mod manual;
mod presentation;

use crate::content::StructuredContentData;
use crate::error::GenerationError;
use crate::locale::Locale;
use crate::request::TargetLanguage;
use crate::theme::{Palette, ThemeTag};
use serde::{Deserialize, Serialize};

pub const PAGE_COUNT: usize = 5;

/// One self-contained page of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    /// 1-based, contiguous.
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub markup: String,
}

/// Everything a page renderer may read besides its content.
pub struct PageContext {
    pub theme: ThemeTag,
    pub palette: &'static Palette,
    pub locale: &'static Locale,
}

impl PageContext {
    pub fn new(theme: ThemeTag, language: TargetLanguage) -> Self {
        Self {
            theme,
            palette: theme.palette(),
            locale: Locale::for_language(language),
        }
    }
}

/// Output of one page renderer before it is wrapped in the page shell.
pub(crate) struct PageBody {
    /// Replaces the section label as page title when set.
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: String,
}

impl PageBody {
    pub fn new(body: String) -> Self {
        Self {
            title: None,
            subtitle: None,
            body,
        }
    }
}

pub(crate) type PageRenderer<T> = fn(&T, &PageContext) -> PageBody;

/// Render validated content into its fixed page sequence.
///
/// Fails only with [`GenerationError::RenderInconsistency`], when `data` breaks a
/// cardinality the validator guarantees.
pub fn render(
    data: &StructuredContentData,
    theme: ThemeTag,
    language: TargetLanguage,
) -> Result<Vec<RenderedPage>, GenerationError> {
    let violations = data.cardinality_violations();
    if !violations.is_empty() {
        return Err(GenerationError::RenderInconsistency(format!(
            "cardinality violated for {}",
            violations.join(", ")
        )));
    }

    let ctx = PageContext::new(theme, language);
    let pages = match data {
        StructuredContentData::Presentation(content) => assemble(
            content,
            &presentation::PAGES,
            &ctx.locale.presentation_pages,
            &ctx,
        ),
        StructuredContentData::Manual(content) => {
            assemble(content, &manual::PAGES, &ctx.locale.manual_pages, &ctx)
        }
    };
    Ok(pages)
}

fn assemble<T>(
    content: &T,
    renderers: &[PageRenderer<T>; PAGE_COUNT],
    labels: &[&'static str; PAGE_COUNT],
    ctx: &PageContext,
) -> Vec<RenderedPage> {
    renderers
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(index, (renderer, label))| {
            let id = index as u32 + 1;
            let page = renderer(content, ctx);
            let title = page.title.unwrap_or_else(|| (*label).to_string());
            let markup =
                markup::page_shell(id, &title, page.subtitle.as_deref(), &page.body, ctx);
            RenderedPage {
                id,
                title,
                subtitle: page.subtitle,
                markup,
            }
        })
        .collect()
}
