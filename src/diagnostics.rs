//! Maps line-oriented diagnostic text from the language runtime
//! onto buffer lines for error highlighting.
//!
//! The runtime reports one diagnostic per line in the form
//! `line <L> column <C>[: runtime error:] <message>`. Lines that do
//! not match are not discarded: they pass through as raw message
//! text so the user still sees the runtime's output, they just do
//! not attach to a buffer location.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

/// Location of the first diagnostic reported for one line, plus the
/// exact line text at the time the diagnostic was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLine {
    /// 1-based column of the diagnostic.
    pub column: usize,
    /// Snapshot of the offending line. An entry whose snapshot no
    /// longer matches the live line is stale and must be dropped
    /// before the next lex pass.
    pub snapshot: String,
}

/// 1-based line number to the first diagnostic on that line.
pub type ErrorLineMap = BTreeMap<usize, ErrorLine>;

/// Result of mapping one diagnostic batch onto the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Per-line error descriptors for the lexer's flag pass.
    pub error_lines: ErrorLineMap,
    /// Console-facing text: `line <L>: <msg>` per attributed
    /// diagnostic, raw pass-through for unmatched lines, in input
    /// order, newline-terminated.
    pub messages: String,
}

static DIAGNOSTIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^line (?<line>\d+) column (?<col>\d+):(?: runtime error:)? (?<msg>.*)$")
        .expect("diagnostic pattern is valid")
});

/// Parse `diagnostics` against the current buffer `lines`.
///
/// Only the first diagnostic per line number is retained in the
/// map; later diagnostics on the same line still contribute to
/// `messages`. A diagnostic addressing a line beyond the buffer
/// gets no map entry (there is no line text to snapshot).
#[must_use]
pub fn map_diagnostics(diagnostics: &str, lines: &[&str]) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();

    for raw in diagnostics.lines() {
        let parsed = DIAGNOSTIC.captures(raw).and_then(|caps| {
            let line: usize = caps["line"].parse().ok()?;
            let column: usize = caps["col"].parse().ok()?;
            Some((line, column, caps["msg"].to_string()))
        });
        let Some((line, column, msg)) = parsed else {
            log::trace!("unattributed diagnostic line: {raw}");
            report.messages.push_str(raw);
            report.messages.push('\n');
            continue;
        };

        if let Some(text) = line.checked_sub(1).and_then(|i| lines.get(i)) {
            report
                .error_lines
                .entry(line)
                .or_insert_with(|| ErrorLine { column, snapshot: (*text).to_string() });
        }
        let _ = writeln!(report.messages, "line {line}: {msg}");
    }

    report
}

/// Drop entries whose snapshot no longer matches the live line:
/// the buffer changed underneath the diagnostic. Comparison is
/// exact, there is no fuzzy re-matching.
pub fn invalidate_stale(error_lines: &mut ErrorLineMap, lines: &[&str]) {
    error_lines.retain(|line, entry| {
        line.checked_sub(1)
            .and_then(|i| lines.get(i))
            .is_some_and(|live| *live == entry.snapshot)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(value: &str) -> Vec<&str> {
        value.split('\n').collect()
    }

    #[test]
    fn parses_compile_diagnostic() {
        let lines = split("x := 1\ny :== 2");
        let report = map_diagnostics("line 2 column 3: unexpected token", &lines);
        assert_eq!(report.error_lines.len(), 1);
        let entry = &report.error_lines[&2];
        assert_eq!(entry.column, 3);
        assert_eq!(entry.snapshot, "y :== 2");
        assert_eq!(report.messages, "line 2: unexpected token\n");
    }

    #[test]
    fn parses_runtime_diagnostic() {
        let lines = split("x := 1 / 0");
        let report = map_diagnostics("line 1 column 8: runtime error: division by zero", &lines);
        assert_eq!(report.error_lines[&1].column, 8);
        assert_eq!(report.messages, "line 1: division by zero\n");
    }

    #[test]
    fn first_diagnostic_per_line_wins() {
        let lines = split("abc");
        let report = map_diagnostics(
            "line 1 column 2: first\nline 1 column 3: second",
            &lines,
        );
        assert_eq!(report.error_lines[&1].column, 2);
        // both still reach the rendered output
        assert_eq!(report.messages, "line 1: first\nline 1: second\n");
    }

    #[test]
    fn unmatched_lines_pass_through() {
        let lines = split("x");
        let report = map_diagnostics("something broke\nline 1 column 1: bad", &lines);
        assert_eq!(report.messages, "something broke\nline 1: bad\n");
        assert_eq!(report.error_lines.len(), 1);
    }

    #[test]
    fn out_of_range_line_keeps_message_only() {
        let lines = split("x");
        let report = map_diagnostics("line 9 column 1: gone", &lines);
        assert!(report.error_lines.is_empty());
        assert_eq!(report.messages, "line 9: gone\n");
    }

    #[test]
    fn prefixed_line_does_not_match() {
        let lines = split("x");
        let report = map_diagnostics("error: line 1 column 1: bad", &lines);
        assert!(report.error_lines.is_empty());
        assert_eq!(report.messages, "error: line 1 column 1: bad\n");
    }

    #[test]
    fn invalidation_drops_edited_lines_only() {
        let lines = split("one\ntwo");
        let mut report = map_diagnostics(
            "line 1 column 1: a\nline 2 column 1: b",
            &lines,
        );
        let edited = split("one\nchanged");
        invalidate_stale(&mut report.error_lines, &edited);
        assert!(report.error_lines.contains_key(&1));
        assert!(!report.error_lines.contains_key(&2));
    }

    #[test]
    fn invalidation_drops_entries_past_buffer_end() {
        let lines = split("one\ntwo");
        let mut report = map_diagnostics("line 2 column 1: b", &lines);
        let shorter = split("one");
        invalidate_stale(&mut report.error_lines, &shorter);
        assert!(report.error_lines.is_empty());
    }
}
