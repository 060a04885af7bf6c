//! CLI presentation: text rendering of results, batches, configuration and progress.

use crate::config::PagesmithConfig;
use crate::pipeline::GeneratedContent;
use crate::progress::DEGRADED_MESSAGE;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// One progress line for stderr.
pub fn format_progress_line(percent: u8, message: &str) -> String {
    let gauge = format!("[{:>3}%]", percent);
    if message == DEGRADED_MESSAGE {
        format!("{} {}", gauge.yellow(), message.yellow())
    } else if percent == 100 {
        format!("{} {}", gauge.green(), message)
    } else {
        format!("{} {}", gauge.cyan(), message)
    }
}

/// Header lines and a page table for one result.
pub fn format_summary(content: &GeneratedContent) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(content.data.content.title())));
    out.push_str(&format!("  Id: {}\n", content.id));
    out.push_str(&format!("  Kind: {}\n", content.content_kind));
    out.push_str(&format!("  Topic: {}\n", content.topic));
    out.push_str(&format!("  Created: {}\n\n", content.created_at.to_rfc3339()));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Page", "Title", "Markup"]);
    for page in content.pages() {
        table.add_row(vec![
            page.id.to_string(),
            page.title.clone(),
            format!("{} bytes", page.markup.len()),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_batch_summary(results: &[GeneratedContent]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Batch")));
    if results.is_empty() {
        out.push_str("No requests in batch.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Id", "Kind", "Topic", "Title", "Pages"]);
    for (index, result) in results.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            result.id.clone(),
            result.content_kind.to_string(),
            result.topic.clone(),
            result.data.content.title().to_string(),
            result.pages().len().to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Effective configuration with the credential masked.
pub fn format_config_text(config: &PagesmithConfig) -> String {
    let credential = if config.gateway.has_credential() {
        "set"
    } else {
        "not set"
    };
    let storage = config
        .storage
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(platform data directory)".to_string());

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Configuration")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Value"]);
    table.add_row(vec!["gateway.endpoint".to_string(), config.gateway.endpoint.clone()]);
    table.add_row(vec!["gateway.model".to_string(), config.gateway.model.clone()]);
    table.add_row(vec!["gateway.api_key".to_string(), credential.to_string()]);
    table.add_row(vec![
        "gateway.timeout_secs".to_string(),
        config.gateway.timeout_secs.to_string(),
    ]);
    table.add_row(vec![
        "generation.mode".to_string(),
        format!("{:?}", config.generation.mode).to_lowercase(),
    ]);
    table.add_row(vec![
        "generation.default_language".to_string(),
        config.generation.default_language.code().to_string(),
    ]);
    table.add_row(vec!["storage.path".to_string(), storage]);
    table.add_row(vec!["logging.level".to_string(), config.logging.level.clone()]);
    out.push_str(&format!("{}\n", table));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_text_never_prints_the_key() {
        let mut config = PagesmithConfig::default();
        config.gateway.api_key = Some("secret-key-123".to_string());
        let text = format_config_text(&config);
        assert!(!text.contains("secret-key-123"));
        assert!(text.contains("set"));
    }

    #[test]
    fn progress_line_shows_percent() {
        assert!(format_progress_line(25, "Waiting").contains("25%"));
    }

    #[test]
    fn empty_batch_summary() {
        assert!(format_batch_summary(&[]).contains("No requests"));
    }
}
