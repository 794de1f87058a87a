use std::fmt;

/// Token kinds produced by the lexer.
///
/// Each kind maps one-for-one onto a visual class in the rendering
/// layer; [`TokenKind::class`] gives the class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of spaces, tabs, or carriage returns.
    Whitespace,
    /// Operator such as `+`, `<=`, or the define operator `:=`.
    Operator,
    /// Parenthesis, bracket, brace, `.`, or a bare `:`.
    Punctuation,
    /// Line comment (`// ...` through end of line).
    Comment,
    /// Double-quoted string literal.
    Str,
    /// Numeric literal.
    Number,
    /// Plain identifier.
    Identifier,
    /// Reserved keyword.
    Keyword,
    /// Standard-library function name.
    Builtin,
    /// Declared function or event-handler name.
    Function,
    /// Single newline (`\n`), never merged with other whitespace.
    Newline,
    /// Character that cannot start any token.
    Error,
}

impl TokenKind {
    /// Visual class name used by renderers.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Whitespace => "ws",
            Self::Operator => "op",
            Self::Punctuation => "punc",
            Self::Comment => "comment",
            Self::Str => "str",
            Self::Number => "num",
            Self::Identifier => "ident",
            Self::Keyword => "keyword",
            Self::Builtin => "builtin",
            Self::Function => "func",
            Self::Newline => "nl",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// A single classified, contiguous slice of source text.
///
/// Tokens are produced in left-to-right order and are contiguous
/// and non-overlapping: concatenating all `text` fields
/// reconstructs the original source exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Set when a diagnostic's column falls inside this token's
    /// span on its line.
    pub error: bool,
}
