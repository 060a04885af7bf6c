//! Presentation pages: cover, features, stats, pricing, timeline.

use super::markup::{escape_html, list, text};
use super::{PageBody, PageContext, PageRenderer, PAGE_COUNT};
use crate::content::PresentationData;
use std::fmt::Write;

pub(super) const PAGES: [PageRenderer<PresentationData>; PAGE_COUNT] =
    [cover, features, stats, pricing, timeline];

fn cover(data: &PresentationData, ctx: &PageContext) -> PageBody {
    let mut body = String::from("<div class=\"cover\">");
    body.push_str(&text("span", "cover-theme", ctx.theme.as_str()));
    let highlights: Vec<&str> = data.features.iter().map(|f| f.title.as_str()).collect();
    body.push_str(&list("cover-highlights", &highlights));
    body.push_str("</div>");
    PageBody {
        title: Some(data.title.clone()),
        subtitle: Some(data.subtitle.clone()),
        body,
    }
}

fn features(data: &PresentationData, _ctx: &PageContext) -> PageBody {
    let mut body = String::from("<div class=\"feature-grid\">");
    for feature in &data.features {
        body.push_str("<article class=\"feature\">");
        body.push_str(&text("span", "feature-icon", &feature.icon));
        body.push_str(&text("h2", "feature-title", &feature.title));
        body.push_str(&text("p", "feature-description", &feature.description));
        body.push_str("</article>");
    }
    body.push_str("</div>");
    PageBody::new(body)
}

fn stats(data: &PresentationData, ctx: &PageContext) -> PageBody {
    let mut body = String::from("<div class=\"stat-row\">");
    for stat in &data.stats {
        let color = escape_html(ctx.palette.color(&stat.color));
        let _ = write!(
            body,
            "<div class=\"stat\" style=\"--stat-color:{color}\">{}{}</div>",
            text("strong", "stat-value", &stat.value),
            text("span", "stat-label", &stat.label)
        );
    }
    body.push_str("</div>");
    PageBody::new(body)
}

fn pricing(data: &PresentationData, ctx: &PageContext) -> PageBody {
    let mut body = String::from("<div class=\"pricing\">");
    for tier in &data.pricing {
        let class = if tier.highlighted {
            "tier tier-highlighted"
        } else {
            "tier"
        };
        let _ = write!(body, "<article class=\"{class}\">");
        if tier.highlighted {
            body.push_str(&text("span", "tier-badge", ctx.locale.recommended_label));
        }
        body.push_str(&text("h2", "tier-name", &tier.name));
        let _ = write!(
            body,
            "<p class=\"tier-price\">{}<small>/{}</small></p>",
            escape_html(&tier.price),
            escape_html(&tier.period)
        );
        body.push_str(&list("tier-features", &tier.features[..]));
        body.push_str("</article>");
    }
    body.push_str("</div>");
    PageBody::new(body)
}

fn timeline(data: &PresentationData, _ctx: &PageContext) -> PageBody {
    let mut body = String::from("<ol class=\"timeline\">");
    for entry in &data.timeline {
        body.push_str("<li class=\"milestone\">");
        body.push_str(&text("span", "milestone-phase", &entry.phase));
        body.push_str(&text("h2", "milestone-title", &entry.title));
        body.push_str(&text("p", "milestone-description", &entry.description));
        body.push_str("</li>");
    }
    body.push_str("</ol>");
    PageBody::new(body)
}
