//! Markup helpers shared by the page renderers.

use super::PageContext;

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `<tag class="class">escaped text</tag>`
pub fn text(tag: &str, class: &str, content: &str) -> String {
    format!("<{tag} class=\"{class}\">{}</{tag}>", escape_html(content))
}

/// Unordered list of escaped items.
pub fn list<S: AsRef<str>>(class: &str, items: &[S]) -> String {
    let mut html = format!("<ul class=\"{class}\">");
    for item in items {
        html.push_str("<li>");
        html.push_str(&escape_html(item.as_ref()));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// Wrap a page body in its themed section shell.
pub fn page_shell(
    id: u32,
    title: &str,
    subtitle: Option<&str>,
    body: &str,
    ctx: &PageContext,
) -> String {
    let palette = ctx.palette;
    let mut html = format!(
        "<section class=\"page page-{id} theme-{theme}\" data-page=\"{id}\" style=\"--primary:{};--secondary:{};--accent:{};--background:{};--surface:{};--text:{};--muted:{}\">",
        palette.primary,
        palette.secondary,
        palette.accent,
        palette.background,
        palette.surface,
        palette.text,
        palette.muted,
        theme = ctx.theme.as_str(),
    );
    html.push_str("<header>");
    html.push_str(&text("h1", "page-title", title));
    if let Some(subtitle) = subtitle {
        html.push_str(&text("p", "page-subtitle", subtitle));
    }
    html.push_str("</header><div class=\"page-body\">");
    html.push_str(body);
    html.push_str("</div></section>");
    html
}
