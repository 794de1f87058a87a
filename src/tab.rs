//! Tab and shift-tab block indentation.

use crate::event::{EventKind, InputEvent};
use crate::key::is_key;
use crate::plugin::{EditorProps, PropsPatch, TextPlugin};

const DEFAULT_TAB: &str = "    ";

/// Indents or outdents the line range spanned by the selection.
///
/// Fires only on `tab` / `shift+tab` key-downs and always claims
/// the event: tab must never move focus off the editor.
#[derive(Debug, Clone)]
pub struct BlockIndent {
    tab: String,
}

impl Default for BlockIndent {
    fn default() -> Self {
        Self { tab: DEFAULT_TAB.to_string() }
    }
}

impl BlockIndent {
    /// Block indent with a custom tab-character sequence.
    #[must_use]
    pub fn new(tab: impl Into<String>) -> Self {
        Self { tab: tab.into() }
    }

    /// The tab-character sequence inserted and stripped.
    #[must_use]
    pub fn tab(&self) -> &str {
        &self.tab
    }

    fn indent(&self, props: &EditorProps) -> PropsPatch {
        // Collapsed selection: plain insertion at the caret.
        if props.selection_start == props.selection_end {
            let mut value = String::with_capacity(props.value.len() + self.tab.len());
            value.push_str(&props.value[..props.selection_start]);
            value.push_str(&self.tab);
            value.push_str(&props.value[props.selection_end..]);
            return PropsPatch::collapsed(value, props.selection_start + self.tab.len());
        }

        let start_line = line_index(&props.value, props.selection_start);
        let end_line = line_index(&props.value, props.selection_end);
        let value: String = props
            .value
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                if i >= start_line && i <= end_line {
                    format!("{}{line}", self.tab)
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        PropsPatch {
            value: Some(value),
            selection_start: Some(props.selection_start + self.tab.len()),
            selection_end: Some(props.selection_end + self.tab.len() * (end_line - start_line + 1)),
        }
    }

    fn outdent(&self, props: &EditorProps) -> Option<PropsPatch> {
        let start_line = line_index(&props.value, props.selection_start);
        let end_line = line_index(&props.value, props.selection_end);

        let mut removed = 0;
        let mut first_line_stripped = false;
        let value: String = props
            .value
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                if i >= start_line && i <= end_line {
                    if let Some(stripped) = line.strip_prefix(self.tab.as_str()) {
                        removed += self.tab.len();
                        if i == start_line {
                            first_line_stripped = true;
                        }
                        return stripped;
                    }
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n");

        if removed == 0 {
            return None;
        }

        let selection_start = if first_line_stripped {
            props.selection_start.saturating_sub(self.tab.len())
        } else {
            props.selection_start
        };
        Some(PropsPatch {
            value: Some(value),
            selection_start: Some(selection_start),
            selection_end: Some(props.selection_end.saturating_sub(removed)),
        })
    }
}

impl TextPlugin for BlockIndent {
    fn apply(&mut self, props: &EditorProps, event: &mut InputEvent) -> Option<PropsPatch> {
        if event.kind != EventKind::KeyDown {
            return None;
        }
        if is_key("shift+tab", event) {
            event.prevent_default();
            return self.outdent(props);
        }
        if is_key("tab", event) {
            event.prevent_default();
            return Some(self.indent(props));
        }
        None
    }
}

/// 0-based index of the line containing byte `offset`.
fn line_index(value: &str, offset: usize) -> usize {
    value[..offset].matches('\n').count()
}
