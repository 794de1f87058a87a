//! Newline insertion that carries the current line's leading
//! whitespace onto the new line.

use crate::event::{EventKind, InputEvent};
use crate::key::is_key;
use crate::plugin::{EditorProps, PropsPatch, TextPlugin};

/// Fires on a plain `enter` key-down. When the line containing
/// the caret has leading whitespace, the plugin claims the event
/// and replaces the selection with a newline plus that whitespace;
/// otherwise the surface's default newline insertion stands.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveIndent;

impl TextPlugin for PreserveIndent {
    fn apply(&mut self, props: &EditorProps, event: &mut InputEvent) -> Option<PropsPatch> {
        if event.kind != EventKind::KeyDown || !is_key("enter", event) {
            return None;
        }

        let line_start = props.value[..props.selection_start].rfind('\n').map_or(0, |i| i + 1);
        let current_line = props.value[line_start..].split('\n').next().unwrap_or("");
        let indent: &str = &current_line
            [..current_line.len() - current_line.trim_start().len()];
        if indent.is_empty() {
            return None;
        }

        event.prevent_default();
        let inserted = format!("\n{indent}");
        let mut value =
            String::with_capacity(props.value.len() + inserted.len());
        value.push_str(&props.value[..props.selection_start]);
        value.push_str(&inserted);
        value.push_str(&props.value[props.selection_end..]);

        Some(PropsPatch::collapsed(value, props.selection_start + inserted.len()))
    }
}
