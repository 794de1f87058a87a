//! Editor text-state controller.
//!
//! Owns the live buffer, selection, and error-line map; drives the
//! lexer and gutter rebuild on every accepted change and notifies
//! at most one registered observer. The undo/redo history lives in
//! the plugin pipeline, not here.

use crate::diagnostics::{ErrorLineMap, invalidate_stale};
use crate::event::InputEvent;
use crate::lexer::{Vocabulary, tokenize_with};
use crate::plugin::{EditorProps, TextPlugin, default_plugins, run_plugins};
use crate::render::{GutterLine, gutter_lines};
use crate::token::Token;

/// Error-annotated render model pushed to the observer after every
/// accepted update.
#[derive(Debug, Clone, Default)]
pub struct RenderedBuffer {
    /// Classified tokens covering the whole buffer; flagged tokens
    /// sit under a diagnostic's column.
    pub tokens: Vec<Token>,
    /// Line-indexed gutter records.
    pub lines: Vec<GutterLine>,
}

/// Partial state accepted by [`Editor::update`]; an omitted field
/// means "unchanged".
#[derive(Debug, Clone, Default)]
pub struct EditorUpdate {
    value: Option<String>,
    selection_start: Option<usize>,
    selection_end: Option<usize>,
    error_lines: Option<ErrorLineMap>,
}

impl EditorUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer text.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Move the selection bounds.
    #[must_use]
    pub const fn selection(mut self, start: usize, end: usize) -> Self {
        self.selection_start = Some(start);
        self.selection_end = Some(end);
        self
    }

    /// Supply a new error-line map. A supplied map fully replaces
    /// the previous one; it is never merged.
    #[must_use]
    pub fn error_lines(mut self, error_lines: ErrorLineMap) -> Self {
        self.error_lines = Some(error_lines);
        self
    }
}

impl From<EditorProps> for EditorUpdate {
    fn from(props: EditorProps) -> Self {
        Self::new()
            .value(props.value)
            .selection(props.selection_start, props.selection_end)
    }
}

/// The editor controller.
///
/// Single-threaded and synchronous: every entry point runs to
/// completion within the caller's input dispatch. The buffer is
/// re-lexed in full on every accepted edit; there is no
/// incremental lexing.
pub struct Editor {
    value: String,
    selection_start: usize,
    selection_end: usize,
    error_lines: ErrorLineMap,
    vocabulary: Vocabulary,
    plugins: Vec<Box<dyn TextPlugin>>,
    observer: Option<Box<dyn FnMut(&RenderedBuffer)>>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// An empty editor with the Evy vocabulary and the standard
    /// plugin pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::evy())
    }

    /// An empty editor highlighting with `vocabulary`.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            value: String::new(),
            selection_start: 0,
            selection_end: 0,
            error_lines: ErrorLineMap::new(),
            vocabulary,
            plugins: default_plugins(),
            observer: None,
        }
    }

    /// Replace the plugin pipeline. Order matters: later plugins
    /// observe earlier plugins' overrides.
    pub fn set_plugins(&mut self, plugins: Vec<Box<dyn TextPlugin>>) {
        self.plugins = plugins;
    }

    /// Register the observer invoked after every accepted update.
    /// At most one observer is held; a new one replaces it.
    pub fn on_update(&mut self, observer: impl FnMut(&RenderedBuffer) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Current buffer text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current selection bounds.
    #[must_use]
    pub const fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// Current error-line map, after stale-entry invalidation.
    #[must_use]
    pub const fn error_lines(&self) -> &ErrorLineMap {
        &self.error_lines
    }

    /// Plain snapshot of buffer and selection, for persistence by
    /// the host (session storage and the like).
    #[must_use]
    pub fn snapshot(&self) -> EditorProps {
        EditorProps {
            value: self.value.clone(),
            selection_start: self.selection_start,
            selection_end: self.selection_end,
        }
    }

    /// Replace the buffer with restored content, clearing any
    /// error overlay.
    pub fn load(&mut self, value: impl Into<String>) {
        self.update(EditorUpdate::new().value(value).error_lines(ErrorLineMap::new()));
    }

    /// Run the plugin pipeline over `event` and apply the result.
    pub fn handle_event(&mut self, event: &mut InputEvent) {
        let props = run_plugins(&mut self.plugins, event);
        self.update(EditorUpdate::from(props));
    }

    /// Merge `update` into the current state and re-render if
    /// anything observable changed.
    ///
    /// A pure cursor move with no error overlay on either side
    /// short-circuits: no re-lex, no observer call.
    pub fn update(&mut self, update: EditorUpdate) {
        let value_changed = update.value.as_ref().is_some_and(|value| *value != self.value);

        if let Some(value) = update.value {
            self.value = value;
        }
        if let Some(start) = update.selection_start {
            self.selection_start = start;
        }
        if let Some(end) = update.selection_end {
            self.selection_end = end;
        }
        self.selection_start = self.selection_start.min(self.value.len());
        self.selection_end = self.selection_end.clamp(self.selection_start, self.value.len());

        let incoming_empty = update.error_lines.as_ref().is_none_or(ErrorLineMap::is_empty);
        if !value_changed && self.error_lines.is_empty() && incoming_empty {
            return;
        }

        // A new diagnostic set fully replaces the previous map.
        if let Some(error_lines) = update.error_lines {
            self.error_lines = error_lines;
        }

        let lines: Vec<&str> = self.value.split('\n').collect();
        invalidate_stale(&mut self.error_lines, &lines);

        let tokens = tokenize_with(&self.value, &self.vocabulary, &self.error_lines);
        log::debug!(
            "update accepted: {} tokens, {} lines, {} error lines",
            tokens.len(),
            lines.len(),
            self.error_lines.len()
        );

        let rendered =
            RenderedBuffer { lines: gutter_lines(&self.value, &self.error_lines), tokens };
        if let Some(observer) = &mut self.observer {
            observer(&rendered);
        }
    }
}
