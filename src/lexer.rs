//! Hand-written scanner that classifies Evy source text for
//! syntax-highlighted rendering.
//!
//! The scanner is total: a character that cannot start any token
//! becomes a one-character [`TokenKind::Error`] token and scanning
//! continues, so malformed input still renders best-effort instead
//! of failing closed.

use std::collections::HashSet;

use crate::diagnostics::ErrorLineMap;
use crate::token::{Token, TokenKind};

const EVY_KEYWORDS: &[&str] = &[
    "num", "string", "bool", "any", "true", "false", "and", "or", "if", "else", "func", "return",
    "on", "for", "range", "while", "break", "end",
];

const EVY_BUILTINS: &[&str] = &[
    "abs",
    "assert",
    "atan2",
    "ceil",
    "circle",
    "clear",
    "cls",
    "color",
    "colour",
    "cos",
    "dash",
    "del",
    "ellipse",
    "endswith",
    "exit",
    "fill",
    "floor",
    "font",
    "grid",
    "gridn",
    "has",
    "hsl",
    "index",
    "join",
    "len",
    "line",
    "linecap",
    "log",
    "lower",
    "max",
    "min",
    "move",
    "poly",
    "pow",
    "print",
    "printf",
    "rand",
    "rand1",
    "read",
    "rect",
    "replace",
    "repr",
    "round",
    "sin",
    "sleep",
    "split",
    "sprint",
    "sprintf",
    "sqrt",
    "startswith",
    "str2bool",
    "str2num",
    "stroke",
    "text",
    "trim",
    "upper",
    "width",
];

/// Identifier classification sets for one language.
///
/// Passed by reference into [`tokenize_with`]; the scanner keeps no
/// state between calls beyond what the caller hands it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Reserved keywords.
    pub keywords: HashSet<&'static str>,
    /// Standard-library function names.
    pub builtins: HashSet<&'static str>,
    /// Keyword introducing a function definition; the identifier
    /// that follows it names a function.
    pub func_keyword: &'static str,
    /// Keyword introducing an event-handler definition.
    pub handler_keyword: &'static str,
}

impl Vocabulary {
    /// The Evy language vocabulary.
    #[must_use]
    pub fn evy() -> Self {
        Self {
            keywords: EVY_KEYWORDS.iter().copied().collect(),
            builtins: EVY_BUILTINS.iter().copied().collect(),
            func_keyword: "func",
            handler_keyword: "on",
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::evy()
    }
}

/// Tokenize Evy source with the default vocabulary and no error
/// map. Never fails; see [`tokenize_with`].
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, &Vocabulary::evy(), &ErrorLineMap::new())
}

/// Tokenize `source` into a contiguous, order-preserving token
/// stream, flagging tokens whose column span on their line is
/// targeted by an entry in `error_lines`.
///
/// Declared function and handler names are classified
/// [`TokenKind::Function`] at every occurrence, including forward
/// references that lexically precede the definition.
#[must_use]
pub fn tokenize_with(source: &str, vocabulary: &Vocabulary, error_lines: &ErrorLineMap) -> Vec<Token> {
    Scanner::new(source, vocabulary, error_lines).tokenize()
}

struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    vocabulary: &'a Vocabulary,
    error_lines: &'a ErrorLineMap,
    /// 1-based line of the token currently being scanned.
    line: usize,
    /// Char index where the current line starts.
    line_offset: usize,
    /// Text of the previous non-whitespace token.
    prev: String,
    /// Function names declared so far in this call.
    funcs: HashSet<String>,
}

impl<'a> Scanner<'a> {
    fn new(source: &str, vocabulary: &'a Vocabulary, error_lines: &'a ErrorLineMap) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            vocabulary,
            error_lines,
            line: 1,
            line_offset: 0,
            prev: String::new(),
            funcs: HashSet::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while self.pos < self.chars.len() {
            let start = self.pos;
            let c = self.chars[self.pos];
            self.pos += 1;

            let mut kind = if is_whitespace(c) {
                self.read_whitespace();
                TokenKind::Whitespace
            } else if is_operator(c) {
                if self.peek() == Some('=') {
                    self.pos += 1;
                }
                TokenKind::Operator
            } else if c == ':' && self.peek() == Some('=') {
                self.pos += 1;
                TokenKind::Operator
            } else if is_punctuation(c) || c == ':' {
                TokenKind::Punctuation
            } else if c == '/' && self.peek() == Some('/') {
                self.read_comment();
                TokenKind::Comment
            } else if c == '/' {
                TokenKind::Operator
            } else if c == '"' {
                self.read_string();
                TokenKind::Str
            } else if c.is_ascii_digit() {
                self.read_number();
                TokenKind::Number
            } else if is_identifier_start(c) {
                self.read_identifier();
                TokenKind::Identifier
            } else if c == '\n' {
                TokenKind::Newline
            } else {
                TokenKind::Error
            };

            let text: String = self.chars[start..self.pos].iter().collect();
            if kind == TokenKind::Identifier {
                kind = self.classify_identifier(&text);
            }
            let error = self.error_flag(start);

            if kind != TokenKind::Whitespace {
                self.prev.clone_from(&text);
            }
            if kind == TokenKind::Newline {
                self.line += 1;
                self.line_offset = self.pos;
            }

            tokens.push(Token { kind, text, error });
        }

        // Fix-up sweep: identifiers that turned out to name a
        // declared function, including forward references.
        for token in &mut tokens {
            if token.kind == TokenKind::Identifier && self.funcs.contains(&token.text) {
                token.kind = TokenKind::Function;
            }
        }

        tokens
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn read_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    fn read_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.pos += 1;
        }
    }

    /// Consume a string body after the opening quote. `\` toggles
    /// an escape; an unescaped `"` closes the string. Reaching a
    /// newline ends the token before it: unterminated strings
    /// never cross lines.
    fn read_string(&mut self) {
        let mut escaped = false;
        while let Some(c) = self.peek() {
            if c == '\n' {
                return;
            }
            self.pos += 1;
            if c == '"' && !escaped {
                return;
            }
            escaped = c == '\\' && !escaped;
        }
    }

    fn read_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
    }

    fn read_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_continue) {
            self.pos += 1;
        }
    }

    /// Second-pass identifier classification against the
    /// vocabulary and the functions seen so far. An identifier
    /// immediately preceded by `.` is a field name, exempt from
    /// both the keyword and builtin sets.
    fn classify_identifier(&mut self, text: &str) -> TokenKind {
        let after_dot = self.prev == ".";
        if !after_dot && self.vocabulary.keywords.contains(text) {
            return TokenKind::Keyword;
        }
        if !after_dot && self.vocabulary.builtins.contains(text) {
            return TokenKind::Builtin;
        }
        if self.prev == self.vocabulary.func_keyword || self.prev == self.vocabulary.handler_keyword
        {
            self.funcs.insert(text.to_string());
            return TokenKind::Function;
        }
        if self.funcs.contains(text) {
            return TokenKind::Function;
        }
        TokenKind::Identifier
    }

    /// True when the diagnostic recorded for the current line
    /// lands inside the token spanning `[start, self.pos)`.
    fn error_flag(&self, start: usize) -> bool {
        self.error_lines.get(&self.line).is_some_and(|entry| {
            let column = entry.column.saturating_sub(1);
            let start_col = start - self.line_offset;
            let end_col = self.pos - self.line_offset;
            (start_col..end_col).contains(&column)
        })
    }
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

const fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '%' | '!' | '<' | '>' | '=')
}

const fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | '.')
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
