//! Manual pages: cover with contents, usage, precautions, troubleshooting, FAQ.

use super::markup::{escape_html, list, text};
use super::{PageBody, PageContext, PageRenderer, PAGE_COUNT};
use crate::content::ManualData;
use std::fmt::Write;

pub(super) const PAGES: [PageRenderer<ManualData>; PAGE_COUNT] =
    [cover, usage, precautions, troubleshooting, faq];

fn cover(data: &ManualData, ctx: &PageContext) -> PageBody {
    let locale = ctx.locale;
    let mut body = String::from("<div class=\"cover\">");
    let _ = write!(
        body,
        "<p class=\"cover-meta\">{} {} &middot; {}</p>",
        escape_html(locale.version_label),
        escape_html(&data.version),
        escape_html(&data.date)
    );
    body.push_str(&text("h2", "contents-title", locale.contents_label));
    body.push_str(&list("contents", &locale.manual_pages[1..]));
    body.push_str("</div>");
    PageBody {
        title: Some(data.title.clone()),
        subtitle: Some(data.subtitle.clone()),
        body,
    }
}

fn usage(data: &ManualData, _ctx: &PageContext) -> PageBody {
    let mut body = String::new();
    for section in data.usage.sections() {
        body.push_str("<article class=\"usage-section\">");
        body.push_str(&text("h2", "usage-title", &section.title));
        body.push_str("<ol class=\"steps\">");
        for step in &section.steps {
            let _ = write!(body, "<li>{}</li>", escape_html(step));
        }
        body.push_str("</ol></article>");
    }
    PageBody::new(body)
}

fn precautions(data: &ManualData, _ctx: &PageContext) -> PageBody {
    let mut body = String::from("<div class=\"precautions\">");
    for category in &data.precautions {
        body.push_str("<article class=\"precaution\">");
        let _ = write!(
            body,
            "<h2 class=\"precaution-title\"><span class=\"precaution-icon\">{}</span> {}</h2>",
            escape_html(&category.icon),
            escape_html(&category.title)
        );
        body.push_str(&list("precaution-items", &category.items[..]));
        body.push_str("</article>");
    }
    body.push_str("</div>");
    PageBody::new(body)
}

fn troubleshooting(data: &ManualData, _ctx: &PageContext) -> PageBody {
    let mut body = String::from("<div class=\"troubleshooting\">");
    for entry in &data.troubleshooting {
        body.push_str("<article class=\"issue\">");
        body.push_str(&text("h2", "issue-problem", &entry.problem));
        body.push_str(&list("issue-solutions", &entry.solutions[..]));
        body.push_str("</article>");
    }
    body.push_str("</div>");
    PageBody::new(body)
}

fn faq(data: &ManualData, _ctx: &PageContext) -> PageBody {
    let mut body = String::from("<dl class=\"faq\">");
    for entry in &data.faq {
        let _ = write!(
            body,
            "<dt>{}</dt><dd>{}</dd>",
            escape_html(&entry.question),
            escape_html(&entry.answer)
        );
    }
    body.push_str("</dl>");
    PageBody::new(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StructuredContentData;
    use crate::request::{ContentKind, TargetLanguage};
    use crate::theme::ThemeTag;
    use crate::validation::{self, ValidationContext};
    use chrono::NaiveDate;

    fn sample(language: TargetLanguage) -> ManualData {
        let ctx = ValidationContext::new(
            language,
            "Kettle",
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        );
        match validation::defaults(ContentKind::Manual, &ctx) {
            StructuredContentData::Manual(data) => data,
            StructuredContentData::Presentation(_) => unreachable!(),
        }
    }

    #[test]
    fn cover_lists_the_remaining_pages() {
        let data = sample(TargetLanguage::En);
        let page = cover(&data, &PageContext::new(ThemeTag::Guide, TargetLanguage::En));
        assert_eq!(page.title.as_deref(), Some("Kettle"));
        assert!(page.body.contains("Version 1.0"));
        assert!(page.body.contains("2026-03-09"));
        assert!(page.body.contains("<li>Troubleshooting</li>"));
        assert!(!page.body.contains("<li>Cover and contents</li>"));
    }

    #[test]
    fn usage_renders_three_numbered_sections() {
        let data = sample(TargetLanguage::Ko);
        let page = usage(&data, &PageContext::new(ThemeTag::Guide, TargetLanguage::Ko));
        assert_eq!(page.body.matches("usage-section").count(), 3);
        assert!(page.body.contains("초기 설정"));
    }

    #[test]
    fn faq_answers_are_escaped() {
        let mut data = sample(TargetLanguage::En);
        data.faq[0].answer = "Use <10 & >2".to_string();
        let page = faq(&data, &PageContext::new(ThemeTag::Guide, TargetLanguage::En));
        assert!(page.body.contains("Use &lt;10 &amp; &gt;2"));
    }

    #[test]
    fn every_solution_is_listed() {
        let data = sample(TargetLanguage::En);
        let page = troubleshooting(&data, &PageContext::new(ThemeTag::Guide, TargetLanguage::En));
        let expected: usize = data.troubleshooting.iter().map(|e| e.solutions.len()).sum();
        assert_eq!(page.body.matches("<li>").count(), expected);
    }
}
