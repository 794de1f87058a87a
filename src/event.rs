//! Host-supplied keyboard and input events.
//!
//! The crate is headless: the host owns the editable surface,
//! reads its live `(value, selectionStart, selectionEnd)` when an
//! event fires, and delivers both together. Plugins may claim the
//! event by preventing its default edit.

use crate::plugin::EditorProps;

/// Event class, mirroring the host surface's input/keydown split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The surface itself inserted or deleted text.
    Input,
    /// A key went down; the default edit has not happened yet.
    KeyDown,
}

/// Modifier flags held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub control: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Shift only.
    #[must_use]
    pub const fn shift() -> Self {
        Self { alt: false, control: false, meta: false, shift: true }
    }
}

/// One keyboard/input event with the live surface state.
#[derive(Debug, Clone)]
pub struct InputEvent {
    pub kind: EventKind,
    /// Key code for key-down events, `None` for plain input.
    pub key_code: Option<u32>,
    pub modifiers: Modifiers,
    /// Live buffer and selection read off the surface when the
    /// event fired.
    pub props: EditorProps,
    default_prevented: bool,
}

impl InputEvent {
    /// A plain text-input event: the surface already applied the
    /// edit reflected in `props`.
    #[must_use]
    pub const fn input(props: EditorProps) -> Self {
        Self {
            kind: EventKind::Input,
            key_code: None,
            modifiers: Modifiers { alt: false, control: false, meta: false, shift: false },
            props,
            default_prevented: false,
        }
    }

    /// A key-down event carrying the pre-edit surface state.
    #[must_use]
    pub const fn key_down(key_code: u32, modifiers: Modifiers, props: EditorProps) -> Self {
        Self { kind: EventKind::KeyDown, key_code: Some(key_code), modifiers, props, default_prevented: false }
    }

    /// Claim the event: the host must skip its default edit.
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// True when some plugin claimed the event.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
