//! Line-indexed gutter records and comment linkification support.
//!
//! Turning these into styled output is the caller's job, HTML
//! escaping included; this module only computes the structure.

use crate::diagnostics::ErrorLineMap;

/// One physical line, ready for gutter rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterLine {
    /// 1-based line number, space-padded to the widest number.
    pub number: String,
    /// Raw line text, unescaped.
    pub text: String,
    /// True when an error-line entry targets this line.
    pub error: bool,
}

/// Build the gutter representation of `value` against the current
/// error map. An empty buffer still has one (empty) line.
#[must_use]
pub fn gutter_lines(value: &str, error_lines: &ErrorLineMap) -> Vec<GutterLine> {
    let lines: Vec<&str> = value.split('\n').collect();
    let width = lines.len().to_string().len();

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| GutterLine {
            number: format!("{:>width$}", i + 1),
            text: (*line).to_string(),
            error: error_lines.contains_key(&(i + 1)),
        })
        .collect()
}

/// A space-delimited word of a comment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentWord<'a> {
    pub text: &'a str,
    /// True when the word should be wrapped as a link.
    pub link: bool,
}

/// Split a comment token's text on single spaces, marking
/// `https://`-prefixed words for linkification. Joining the words
/// back with single spaces reconstructs the text exactly.
#[must_use]
pub fn comment_words(text: &str) -> Vec<CommentWord<'_>> {
    text.split(' ')
        .map(|word| CommentWord { text: word, link: word.starts_with("https://") })
        .collect()
}
