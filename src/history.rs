//! Linear undo/redo history over editor snapshots.

use crate::event::{EventKind, InputEvent};
use crate::key::is_key;
use crate::plugin::{EditorProps, PropsPatch, TextPlugin};

/// Snapshot stack with a movable cursor.
///
/// The stack is strictly linear: entries are immutable once
/// recorded, the redo tail past the active index is discarded only
/// when a genuinely new edit is recorded, and navigation clamps at
/// both ends rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Vec<EditorProps>,
    active: Option<usize>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Position of the currently displayed snapshot.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn seed(&mut self, props: &EditorProps) {
        self.stack.push(props.clone());
        self.active = Some(0);
    }

    /// True when `props` differs from the entry at the active
    /// index by value or either selection bound.
    fn differs_from_active(&self, props: &EditorProps) -> bool {
        self.active
            .and_then(|i| self.stack.get(i))
            .is_none_or(|entry| entry != props)
    }

    /// Record a new edit: discard the redo tail, append, advance.
    fn record(&mut self, props: &EditorProps) {
        if let Some(active) = self.active {
            self.stack.truncate(active + 1);
        }
        self.stack.push(props.clone());
        self.active = Some(self.stack.len() - 1);
    }

    fn undo(&mut self, props: &EditorProps) -> Option<PropsPatch> {
        let mut active = self.active?;
        // A pending edit may have arrived with this very event
        // (earlier plugins can rewrite the proposal); capture it
        // so undo lands on the state before it.
        if self.differs_from_active(props) {
            self.stack.push(props.clone());
            active += 1;
        }
        let target = active.saturating_sub(1);
        self.active = Some(target);
        Some(PropsPatch::replace(self.stack[target].clone()))
    }

    fn redo(&mut self) -> Option<PropsPatch> {
        let active = self.active?;
        let target = (active + 1).min(self.stack.len() - 1);
        self.active = Some(target);
        Some(PropsPatch::replace(self.stack[target].clone()))
    }
}

impl TextPlugin for History {
    fn apply(&mut self, props: &EditorProps, event: &mut InputEvent) -> Option<PropsPatch> {
        if event.kind == EventKind::KeyDown {
            if is_key("ctrl/cmd+z", event) {
                event.prevent_default();
                if let Some(patch) = self.undo(props) {
                    return Some(patch);
                }
            }
            if is_key("ctrl/cmd+shift+z", event) {
                event.prevent_default();
                if let Some(patch) = self.redo() {
                    return Some(patch);
                }
            }
            if self.active.is_none() {
                self.seed(props);
            } else if self.differs_from_active(props) {
                self.record(props);
            }
            return None;
        }

        // Plain input: the surface applied an edit.
        if self.active.is_none() {
            self.seed(props);
        } else if self.differs_from_active(props) {
            self.record(props);
        }
        None
    }
}
