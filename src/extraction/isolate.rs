//! Block isolation: find the structured block inside prose-wrapped model output.

use super::scanner::analyze;
use regex::Regex;
use std::sync::OnceLock;

fn fence_pattern() -> Option<&'static Regex> {
    static FENCE: OnceLock<Option<Regex>> = OnceLock::new();
    FENCE
        .get_or_init(|| Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```").ok())
        .as_ref()
}

/// Locate the candidate block in `raw`.
///
/// A fenced block containing an opening brace wins; otherwise the whole text is
/// searched. The candidate spans from the first `{` to the last `}` (or from a `[`
/// directly enclosing it to the last `]`). When the structure never closes, the
/// text was cut off and the candidate runs to the end.
pub fn isolate(raw: &str) -> Option<&str> {
    let region = fence_pattern()
        .and_then(|pattern| {
            pattern
                .captures_iter(raw)
                .filter_map(|captures| captures.get(1))
                .map(|body| body.as_str())
                .find(|body| body.contains('{'))
        })
        .unwrap_or(raw);

    let brace = region.find('{')?;
    let (start, closer) = match region[..brace].trim_end().strip_suffix('[') {
        Some(before) => (before.len(), ']'),
        None => (brace, '}'),
    };
    let tail = &region[start..];

    if !analyze(tail).is_balanced() {
        return Some(strip_open_fence(tail));
    }
    let end = tail.rfind(closer)?;
    Some(&tail[..end + closer.len_utf8()])
}

/// A truncated fenced block has no closing fence for the regex to find, but may
/// still carry a partial one.
fn strip_open_fence(tail: &str) -> &str {
    let trimmed = tail.trim_end();
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim_end()
}
