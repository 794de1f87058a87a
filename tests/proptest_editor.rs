//! Property-based tests with proptest.
//!
//! The lexer properties quantify over arbitrary text, not just
//! well-formed Evy: the scanner is total and must partition any
//! input. The plugin properties replay generated edit sequences
//! through the history and tab plugins and check the round-trip
//! laws.

use evy_editor_rs::{
    BlockIndent, EditorProps, History, InputEvent, Modifiers, Platform, TextPlugin, tokenize,
};
use proptest::prelude::*;

// -- Input strategies --

/// Arbitrary printable text with whitespace and newlines mixed in.
fn any_source() -> impl Strategy<Value = String> {
    "[\\PC\\n\\t\\r]{0,120}".prop_map(|s| s)
}

/// Evy-flavoured source: identifiers, keywords, builtins,
/// operators, strings, comments.
fn evy_source() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        "[a-z][a-z0-9_]{0,6}",
        Just("func".to_string()),
        Just("on".to_string()),
        Just("print".to_string()),
        Just("end".to_string()),
        Just(":=".to_string()),
        Just("123".to_string()),
        Just("3.14".to_string()),
        Just("\"hi\"".to_string()),
        Just("// note".to_string()),
    ];
    prop::collection::vec(prop::collection::vec(word, 0..5), 0..8).prop_map(|lines| {
        lines
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Lines that never start with the four-space tab sequence, so a
/// tab/shift-tab round trip is exact.
fn block_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z ]{0,10}", 1..6)
}

/// A sequence of distinct buffer states standing in for edits.
fn edit_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,8}", 1..10).prop_map(|values| {
        // successive duplicates would not record; make each state
        // distinct from its predecessor by growth
        let mut acc = String::new();
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                acc.push_str(&v);
                acc.push_str(&i.to_string());
                acc.clone()
            })
            .collect()
    })
}

fn undo_modifiers() -> Modifiers {
    match Platform::host() {
        Platform::MacOs => Modifiers { meta: true, ..Modifiers::default() },
        Platform::Other => Modifiers { control: true, ..Modifiers::default() },
    }
}

const Z: u32 = 90;
const TAB: u32 = 9;

fn apply_patch(plugin: &mut dyn TextPlugin, props: &EditorProps, event: &mut InputEvent) -> Option<EditorProps> {
    plugin.apply(props, event).map(|patch| {
        let mut next = props.clone();
        patch.merge_into(&mut next);
        next
    })
}

// -- Property tests --

proptest! {
    /// Concatenating all token texts reconstructs the source
    /// exactly, for any input.
    #[test]
    fn token_texts_partition_the_source(source in any_source()) {
        let rebuilt: String = tokenize(&source).iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, source);
    }

    /// Every char of the source belongs to exactly one token span:
    /// per-token char counts sum to the source's char count and no
    /// token is empty.
    #[test]
    fn every_char_is_covered_once(source in any_source()) {
        let tokens = tokenize(&source);
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
        let covered: usize = tokens.iter().map(|t| t.text.chars().count()).sum();
        prop_assert_eq!(covered, source.chars().count());
    }

    /// Partition also holds on Evy-flavoured programs.
    #[test]
    fn partition_holds_on_evy_source(source in evy_source()) {
        let rebuilt: String = tokenize(&source).iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, source);
    }

    /// Classification depends only on the text: lexing the text a
    /// renderer would re-read yields the same tokens.
    #[test]
    fn classification_is_idempotent(source in evy_source()) {
        let first = tokenize(&source);
        let rebuilt: String = first.iter().map(|t| t.text.as_str()).collect();
        let second = tokenize(&rebuilt);
        prop_assert_eq!(first, second);
    }

    /// Tabbing a selected block then shift-tabbing the resulting
    /// selection restores the original text.
    #[test]
    fn tab_then_shift_tab_round_trips(lines in block_lines()) {
        let value = lines.join("\n");
        let props = EditorProps::with_selection(value.clone(), 0, value.len());
        let mut plugin = BlockIndent::default();

        let mut event = InputEvent::key_down(TAB, Modifiers::default(), props.clone());
        let indented = apply_patch(&mut plugin, &props, &mut event)
            .expect("tab with a selection always patches");

        let mut event = InputEvent::key_down(TAB, Modifiers::shift(), indented.clone());
        let restored = apply_patch(&mut plugin, &indented, &mut event)
            .expect("every line was just indented");

        prop_assert_eq!(restored.value, value);
    }

    /// Applying undo n times returns the state before the edits,
    /// and redo n times returns to the final state.
    #[test]
    fn undo_then_redo_inverts_edits(values in edit_sequence()) {
        let mut history = History::new();

        for value in &values {
            let props = EditorProps::at(value.clone(), value.len());
            let mut event = InputEvent::input(props.clone());
            let _ = history.apply(&props, &mut event);
        }

        let first = EditorProps::at(values[0].clone(), values[0].len());
        let last = EditorProps::at(
            values[values.len() - 1].clone(),
            values[values.len() - 1].len(),
        );

        // undo down to (and past) the oldest entry: clamps there
        let mut current = last.clone();
        for _ in 0..values.len() {
            let mut event = InputEvent::key_down(Z, undo_modifiers(), current.clone());
            if let Some(next) = apply_patch(&mut history, &current, &mut event) {
                current = next;
            }
        }
        prop_assert_eq!(&current, &first);

        // redo the same number of times: clamps at the newest
        for _ in 0..values.len() {
            let mut event = InputEvent::key_down(
                Z,
                Modifiers { shift: true, ..undo_modifiers() },
                current.clone(),
            );
            if let Some(next) = apply_patch(&mut history, &current, &mut event) {
                current = next;
            }
        }
        prop_assert_eq!(&current, &last);
    }
}
