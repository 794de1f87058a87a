//! Keystroke-transforming plugin pipeline.
//!
//! Plugins run in a fixed order over an accumulator seeded from
//! the live surface state carried on the event; each stage may
//! return a partial override that is shallow-merged before the
//! next stage runs. Later stages observe earlier overrides.

use crate::event::InputEvent;
use crate::history::History;
use crate::indent::PreserveIndent;
use crate::tab::BlockIndent;

/// Proposed buffer and selection flowing through the pipeline.
///
/// Selection offsets are byte offsets into `value`, on character
/// boundaries, with `selection_start <= selection_end`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorProps {
    pub value: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl EditorProps {
    /// Props with a collapsed selection at `caret`.
    #[must_use]
    pub fn at(value: impl Into<String>, caret: usize) -> Self {
        Self { value: value.into(), selection_start: caret, selection_end: caret }
    }

    /// Props with a selection spanning `[start, end)`.
    #[must_use]
    pub fn with_selection(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self { value: value.into(), selection_start: start, selection_end: end }
    }
}

/// Partial override returned by a plugin; unset fields keep the
/// accumulator's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropsPatch {
    pub value: Option<String>,
    pub selection_start: Option<usize>,
    pub selection_end: Option<usize>,
}

impl PropsPatch {
    /// Patch replacing all three fields.
    #[must_use]
    pub fn replace(props: EditorProps) -> Self {
        Self {
            value: Some(props.value),
            selection_start: Some(props.selection_start),
            selection_end: Some(props.selection_end),
        }
    }

    /// Patch moving both selection bounds to `caret` in `value`.
    #[must_use]
    pub fn collapsed(value: String, caret: usize) -> Self {
        Self { value: Some(value), selection_start: Some(caret), selection_end: Some(caret) }
    }

    /// Shallow-merge this patch over `props`.
    pub fn merge_into(self, props: &mut EditorProps) {
        if let Some(value) = self.value {
            props.value = value;
        }
        if let Some(start) = self.selection_start {
            props.selection_start = start;
        }
        if let Some(end) = self.selection_end {
            props.selection_end = end;
        }
    }
}

/// A stage in the keystroke pipeline.
///
/// Implementations inspect the accumulated proposal and the raw
/// event and may return a partial override; stateful stages
/// (history) mutate themselves across calls. Returning `None`
/// passes the accumulator through unchanged.
pub trait TextPlugin {
    fn apply(&mut self, props: &EditorProps, event: &mut InputEvent) -> Option<PropsPatch>;
}

/// Run `plugins` in order, starting from the live props carried
/// by `event`, and return the final accumulated proposal.
pub fn run_plugins(plugins: &mut [Box<dyn TextPlugin>], event: &mut InputEvent) -> EditorProps {
    let mut acc = event.props.clone();
    for plugin in &mut *plugins {
        if let Some(patch) = plugin.apply(&acc, event) {
            patch.merge_into(&mut acc);
        }
    }
    acc
}

/// The standard pipeline: indentation preservation, then history,
/// then tab handling. The order is fixed and load-bearing.
#[must_use]
pub fn default_plugins() -> Vec<Box<dyn TextPlugin>> {
    vec![
        Box::new(PreserveIndent),
        Box::new(History::new()),
        Box::new(BlockIndent::default()),
    ]
}
