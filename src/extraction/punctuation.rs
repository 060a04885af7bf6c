//! Structural punctuation repair: missing separators and duplicate keys.

use super::scanner::{Container, Lexeme, Scanner};
use super::RepairPass;
use std::collections::HashSet;
use std::ops::Range;

pub struct PunctuationRepair;

impl RepairPass for PunctuationRepair {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn apply(&self, text: &str) -> String {
        remove_duplicate_keys(&insert_missing_commas(text))
    }
}

fn ends_value(c: char) -> bool {
    matches!(c, '}' | ']' | '"') || c.is_ascii_alphanumeric()
}

fn starts_value(c: char) -> bool {
    matches!(c, '{' | '[' | '"' | '-' | 't' | 'f' | 'n') || c.is_ascii_digit()
}

/// Insert a comma wherever one value ends and the next begins with nothing but
/// whitespace between them, e.g. `}{`, `"a" "b"`, `1 2`.
fn insert_missing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut scanner = Scanner::default();
    // Last structural character outside strings and its end offset in `out`.
    let mut previous: Option<(char, usize)> = None;
    let mut gap = false;

    for c in text.chars() {
        let lexeme = scanner.step(c);
        let next = match lexeme {
            Lexeme::Text => None,
            Lexeme::Space => {
                gap = true;
                None
            }
            Lexeme::Quote { opens: true } => Some('"'),
            Lexeme::Quote { opens: false } => None,
            Lexeme::Code(code) => Some(code),
        };

        if let (Some(next), Some((prev, end))) = (next, previous) {
            // `1e-5` and `true` are single tokens.
            let same_token = !gap
                && prev.is_ascii_alphanumeric()
                && (next.is_ascii_alphanumeric() || next == '-');
            if ends_value(prev) && starts_value(next) && !same_token {
                out.insert(end, ',');
            }
        }

        out.push(c);
        match lexeme {
            Lexeme::Quote { opens: false } | Lexeme::Code(_) => {
                previous = Some((c, out.len()));
                gap = false;
            }
            Lexeme::Quote { opens: true } => {
                previous = None;
                gap = false;
            }
            Lexeme::Text | Lexeme::Space => {}
        }
    }
    out
}

struct KeyFrame {
    container: Container,
    keys: HashSet<String>,
    expects_key: bool,
    last_comma: Option<usize>,
    removing: Option<usize>,
}

impl KeyFrame {
    fn new(container: Container) -> Self {
        Self {
            container,
            keys: HashSet::new(),
            expects_key: container == Container::Object,
            last_comma: None,
            removing: None,
        }
    }
}

/// Drop every repeated key-value pair in an object; the first occurrence wins.
fn remove_duplicate_keys(text: &str) -> String {
    let mut removals: Vec<Range<usize>> = Vec::new();
    let mut stack: Vec<KeyFrame> = Vec::new();
    let mut scanner = Scanner::default();
    let mut key_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match scanner.step(c) {
            Lexeme::Quote { opens: true } => {
                key_start = stack
                    .last()
                    .filter(|frame| frame.container == Container::Object && frame.expects_key)
                    .map(|_| i);
            }
            Lexeme::Quote { opens: false } => {
                if let (Some(start), Some(frame)) = (key_start.take(), stack.last_mut()) {
                    let key = text[start + 1..i].to_string();
                    if !frame.keys.insert(key) && frame.removing.is_none() {
                        frame.removing = Some(frame.last_comma.unwrap_or(start));
                    }
                    frame.expects_key = false;
                }
            }
            Lexeme::Code('{') => stack.push(KeyFrame::new(Container::Object)),
            Lexeme::Code('[') => stack.push(KeyFrame::new(Container::Array)),
            Lexeme::Code(closer @ ('}' | ']')) => {
                if stack.last().is_some_and(|frame| frame.container.closer() == closer) {
                    if let Some(frame) = stack.pop() {
                        if let Some(start) = frame.removing {
                            removals.push(start..i);
                        }
                    }
                }
            }
            Lexeme::Code(',') => {
                if let Some(frame) = stack.last_mut() {
                    if let Some(start) = frame.removing.take() {
                        removals.push(start..i);
                    }
                    frame.last_comma = Some(i);
                    frame.expects_key = frame.container == Container::Object;
                }
            }
            Lexeme::Code(':') => {
                if let Some(frame) = stack.last_mut() {
                    frame.expects_key = false;
                }
            }
            _ => {}
        }
    }

    if removals.is_empty() {
        return text.to_string();
    }
    text.char_indices()
        .filter(|(i, _)| !removals.iter().any(|range| range.contains(i)))
        .map(|(_, c)| c)
        .collect()
}
