//! String-aware lexical scanning shared by the repair passes.
//!
//! Only characters outside string literals are structural; everything a pass
//! rewrites is decided through a [`Scanner`] so that text inside strings survives
//! untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lexeme {
    /// A string delimiter; `opens` is false for the closing quote.
    Quote { opens: bool },
    /// Any character inside a string literal, escapes included.
    Text,
    /// Whitespace outside strings.
    Space,
    /// Any other character outside strings.
    Code(char),
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Scanner {
    in_string: bool,
    escaped: bool,
}

impl Scanner {
    pub fn in_string(&self) -> bool {
        self.in_string
    }

    /// True right after a backslash inside a string.
    pub fn escaped(&self) -> bool {
        self.escaped
    }

    pub fn step(&mut self, c: char) -> Lexeme {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
                return Lexeme::Text;
            }
            match c {
                '\\' => {
                    self.escaped = true;
                    Lexeme::Text
                }
                '"' => {
                    self.in_string = false;
                    Lexeme::Quote { opens: false }
                }
                _ => Lexeme::Text,
            }
        } else if c == '"' {
            self.in_string = true;
            Lexeme::Quote { opens: true }
        } else if c.is_whitespace() {
            Lexeme::Space
        } else {
            Lexeme::Code(c)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Object,
    Array,
}

impl Container {
    pub fn closer(self) -> char {
        match self {
            Container::Object => '}',
            Container::Array => ']',
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub container: Container,
    pub expects_key: bool,
}

/// Bracket structure of a (possibly truncated) text.
#[derive(Debug, Default)]
pub(crate) struct Structure {
    /// Containers still open at the end of the text, outermost first.
    pub stack: Vec<Frame>,
    pub in_string: bool,
    /// Whether the last string opened sits in key position.
    pub string_is_key: bool,
    /// Byte offset of an escape sequence left unfinished at the end of the text.
    pub pending_escape: Option<usize>,
    /// The last token outside strings completes a value.
    pub ends_with_value: bool,
    /// Byte offsets where cutting leaves a prefix that closes into valid structure.
    pub cut_points: Vec<usize>,
    /// Byte offset just past the point where the outermost container first closed.
    pub closed_at: Option<usize>,
}

impl Structure {
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && !self.in_string
    }

    /// Closing brackets for every open container, innermost first.
    pub fn closers(&self) -> String {
        self.stack
            .iter()
            .rev()
            .map(|frame| frame.container.closer())
            .collect()
    }
}

/// Walk `text` once and record its bracket structure. Closers that do not match
/// the innermost open container are ignored.
pub(crate) fn analyze(text: &str) -> Structure {
    let mut structure = Structure::default();
    let mut scanner = Scanner::default();
    let mut bare = String::new();
    let mut unicode_left: Option<u8> = None;

    for (i, c) in text.char_indices() {
        match scanner.step(c) {
            Lexeme::Quote { opens: true } => {
                structure.string_is_key = matches!(
                    structure.stack.last(),
                    Some(Frame {
                        container: Container::Object,
                        expects_key: true
                    })
                );
                structure.ends_with_value = false;
                bare.clear();
            }
            Lexeme::Quote { opens: false } => {
                structure.pending_escape = None;
                if !structure.string_is_key {
                    structure.cut_points.push(i + 1);
                }
                structure.ends_with_value = !structure.string_is_key;
            }
            Lexeme::Text => {
                if scanner.escaped() {
                    structure.pending_escape = Some(i);
                    unicode_left = None;
                } else if let Some(start) = structure.pending_escape {
                    match unicode_left {
                        None if i == start + 1 && c == 'u' => unicode_left = Some(4),
                        Some(n) if n > 1 => unicode_left = Some(n - 1),
                        _ => {
                            structure.pending_escape = None;
                            unicode_left = None;
                        }
                    }
                }
            }
            Lexeme::Space => bare.clear(),
            Lexeme::Code(c) => match c {
                '{' | '[' => {
                    let container = if c == '{' {
                        Container::Object
                    } else {
                        Container::Array
                    };
                    structure.stack.push(Frame {
                        container,
                        expects_key: container == Container::Object,
                    });
                    structure.cut_points.push(i + 1);
                    structure.ends_with_value = false;
                    bare.clear();
                }
                '}' | ']' => {
                    let matches_top = structure
                        .stack
                        .last()
                        .is_some_and(|frame| frame.container.closer() == c);
                    if matches_top {
                        structure.stack.pop();
                        structure.cut_points.push(i + 1);
                        structure.ends_with_value = true;
                        if structure.stack.is_empty() && structure.closed_at.is_none() {
                            structure.closed_at = Some(i + 1);
                        }
                    }
                    bare.clear();
                }
                ',' => {
                    structure.cut_points.push(i);
                    if let Some(frame) = structure.stack.last_mut() {
                        frame.expects_key = frame.container == Container::Object;
                    }
                    structure.ends_with_value = false;
                    bare.clear();
                }
                ':' => {
                    if let Some(frame) = structure.stack.last_mut() {
                        frame.expects_key = false;
                    }
                    structure.ends_with_value = false;
                    bare.clear();
                }
                other => {
                    bare.push(other);
                    structure.ends_with_value = is_complete_scalar(&bare);
                }
            },
        }
    }

    structure.in_string = scanner.in_string();
    structure
}

fn is_complete_scalar(token: &str) -> bool {
    matches!(token, "true" | "false" | "null") || token.ends_with(|c: char| c.is_ascii_digit())
}
