//! Source-editing core for the Evy playground.
//!
//! A hand-written lexer that classifies Evy source into a flat,
//! order-preserving token stream for syntax-highlighted rendering,
//! a mapper that attaches runtime/compiler diagnostics to buffer
//! lines, and an editor state controller with a pipeline of
//! keystroke-transforming plugins (auto-indent, undo/redo history,
//! tab block indent).
//!
//! The crate is headless: hosts own the editable surface and the
//! painted output, and talk to this crate through plain values.
//!
//! # Quick start
//!
//! ## Tokenize Evy source
//!
//! ```
//! use evy_editor_rs::{TokenKind, tokenize};
//!
//! let tokens = tokenize("x := 12\nprint \"x:\" x");
//! assert_eq!(tokens[2].kind, TokenKind::Operator); // `:=`
//!
//! // token texts partition the source exactly
//! let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(rebuilt, "x := 12\nprint \"x:\" x");
//! ```
//!
//! ## Drive the editor with diagnostics
//!
//! ```
//! use evy_editor_rs::{Editor, EditorUpdate, map_diagnostics};
//!
//! let mut editor = Editor::new();
//! editor.on_update(|_rendered| {
//!     // wrap _rendered.tokens into styled spans, paint the gutter
//! });
//! editor.update(EditorUpdate::new().value("x :== 1"));
//!
//! let lines: Vec<&str> = editor.value().split('\n').collect();
//! let report = map_diagnostics("line 1 column 3: unexpected token", &lines);
//! editor.update(EditorUpdate::new().error_lines(report.error_lines));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod diagnostics;
pub mod editor;
pub mod event;
pub mod history;
pub mod indent;
pub mod key;
pub mod lexer;
pub mod plugin;
pub mod render;
pub mod tab;
pub mod token;

pub use diagnostics::{
    DiagnosticReport, ErrorLine, ErrorLineMap, invalidate_stale, map_diagnostics,
};
pub use editor::{Editor, EditorUpdate, RenderedBuffer};
pub use event::{EventKind, InputEvent, Modifiers};
pub use history::History;
pub use indent::PreserveIndent;
pub use key::{KeySpec, KeySpecError, Platform, is_key};
pub use lexer::{Vocabulary, tokenize, tokenize_with};
pub use plugin::{EditorProps, PropsPatch, TextPlugin, default_plugins, run_plugins};
pub use render::{CommentWord, GutterLine, comment_words, gutter_lines};
pub use tab::BlockIndent;
pub use token::{Token, TokenKind};
