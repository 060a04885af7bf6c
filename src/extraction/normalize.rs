//! Lexical normalization: typographic punctuation, doubled quotes, trailing commas.

use super::scanner::{Lexeme, Scanner};
use super::RepairPass;

pub struct Normalize;

impl RepairPass for Normalize {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn apply(&self, text: &str) -> String {
        let text = plain_punctuation(text);
        let text = collapse_doubled_quotes(&text);
        strip_trailing_commas(&text)
    }
}

fn is_typographic_double(c: char) -> bool {
    matches!(c, '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}')
}

fn full_width_structural(c: char) -> Option<char> {
    match c {
        '\u{FF5B}' => Some('{'),
        '\u{FF5D}' => Some('}'),
        '\u{FF3B}' => Some('['),
        '\u{FF3D}' => Some(']'),
        '\u{FF1A}' => Some(':'),
        '\u{FF0C}' => Some(','),
        _ => None,
    }
}

/// Map typographic punctuation to ASCII.
///
/// A typographic double quote outside a string opens one. Inside a string that a
/// typographic quote opened, it closes the string when followed by structural
/// punctuation; every other occurrence inside a string is escaped.
fn plain_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut scanner = Scanner::default();
    let mut typographic_open = false;

    for (i, &c) in chars.iter().enumerate() {
        let c = match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => '\'',
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            '\u{00A0}' | '\u{3000}' => ' ',
            '\u{2026}' => {
                for dot in ['.', '.', '.'] {
                    scanner.step(dot);
                    out.push(dot);
                }
                continue;
            }
            other => other,
        };

        if is_typographic_double(c) {
            let closes = scanner.in_string()
                && !scanner.escaped()
                && typographic_open
                && closes_string(&chars[i + 1..]);
            if !scanner.in_string() || closes || scanner.escaped() {
                if !scanner.in_string() {
                    typographic_open = true;
                }
                scanner.step('"');
                out.push('"');
            } else {
                out.push_str("\\\"");
            }
            continue;
        }

        let c = if scanner.in_string() {
            c
        } else {
            full_width_structural(c).unwrap_or(c)
        };
        if let Lexeme::Quote { opens: true } = scanner.step(c) {
            typographic_open = false;
        }
        out.push(c);
    }
    out
}

fn closes_string(rest: &[char]) -> bool {
    match rest.iter().find(|c| !c.is_whitespace()) {
        None => true,
        Some(&next) => {
            matches!(next, ':' | ',' | '}' | ']') || full_width_structural(next).is_some()
        }
    }
}

/// A quote run of this length or more opening a string marks `""value""`.
const DOUBLED_RUN: usize = 2;

fn starts_doubled_value(c: char) -> bool {
    !matches!(c, '"' | ',' | ':' | '}' | ']') && !c.is_whitespace()
}

fn quote_run(chars: &[char]) -> usize {
    chars.iter().take_while(|&&c| c == '"').count()
}

/// `""value""` (or longer quote runs) becomes `"value"`. Only runs that open a
/// string outside any literal, and the matching run that closes it, are collapsed.
fn collapse_doubled_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut scanner = Scanner::default();
    let mut doubled = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '"' && !scanner.escaped() {
            let run = quote_run(&chars[i..]);
            let opens = !scanner.in_string()
                && run >= DOUBLED_RUN
                && chars.get(i + run).is_some_and(|&next| starts_doubled_value(next));
            let closes = scanner.in_string() && doubled && run >= DOUBLED_RUN;
            if opens || closes {
                scanner.step('"');
                out.push('"');
                doubled = opens;
                i += run;
                continue;
            }
        }
        if let Lexeme::Quote { opens: false } = scanner.step(c) {
            doubled = false;
        }
        out.push(c);
        i += 1;
    }
    out
}

/// Drops every comma outside strings that is followed by another comma or by a
/// closing bracket, so a run of commas keeps only its last member.
fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut scanner = Scanner::default();
    for (i, c) in text.char_indices() {
        if let Lexeme::Code(',') = scanner.step(c) {
            let rest = text[i + 1..].trim_start();
            let after_run = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
            if rest.starts_with(',') || after_run.starts_with(['}', ']']) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn normalize(text: &str) -> String {
        Normalize.apply(text)
    }

    #[test]
    fn typographic_quotes_become_structural() {
        let text = "{\u{201C}title\u{201D}: \u{201C}Smart hub\u{201D}}";
        assert_eq!(normalize(text), r#"{"title": "Smart hub"}"#);
    }

    #[test]
    fn typographic_quotes_inside_plain_strings_are_escaped() {
        let text = "{\"quote\": \"He said \u{201C}hi\u{201D}, then left\"}";
        let fixed = normalize(text);
        let value: Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(value["quote"], "He said \"hi\", then left");
    }

    #[test]
    fn dashes_ellipses_and_spaces_are_plain() {
        let text = "{\"a\": \"x \u{2014} y\u{2026}\",\u{00A0}\"b\": 1}";
        assert_eq!(normalize(text), "{\"a\": \"x - y...\", \"b\": 1}");
    }

    #[test]
    fn full_width_punctuation_outside_strings_is_mapped() {
        let text = "\u{FF5B}\"a\"\u{FF1A}\"b\u{FF0C}c\"\u{FF5D}";
        assert_eq!(normalize(text), "{\"a\":\"b\u{FF0C}c\"}");
    }

    #[test]
    fn doubled_quotes_collapse() {
        assert_eq!(normalize(r#"{"title": ""Hub""}"#), r#"{"title": "Hub"}"#);
        assert_eq!(normalize(r#"{"a": "", "b": ""}"#), r#"{"a": "", "b": ""}"#);
    }

    #[test]
    fn trailing_commas_are_stripped_outside_strings() {
        assert_eq!(normalize(r#"{"a": [1, 2, ], "b": ",}",}"#), r#"{"a": [1, 2 ], "b": ",}"}"#);
    }

    #[test]
    fn comma_runs_collapse() {
        assert_eq!(normalize("{\"a\": [1,,]}"), "{\"a\": [1]}");
        assert_eq!(normalize("[{\"v\": 1},, {\"v\": 2}]"), "[{\"v\": 1}, {\"v\": 2}]");
        assert_eq!(normalize("[1,,, 2]"), "[1, 2]");
    }

    #[test]
    fn longer_quote_runs_collapse() {
        assert_eq!(normalize(r#"{"a": """b"""}"#), r#"{"a": "b"}"#);
        assert_eq!(normalize(r#"{"a": ""b"", "c": "d"}"#), r#"{"a": "b", "c": "d"}"#);
    }

    #[test]
    fn escaped_quotes_are_not_runs() {
        let text = r#"{"a": "say \"\"hi"}"#;
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn normalization_is_idempotent() {
        let text = "{\u{201C}a\u{201D}: [1,2,], \"b\": \"x\u{2019}s\"}";
        let once = normalize(text);
        assert_eq!(normalize(&once), once);
    }
}
