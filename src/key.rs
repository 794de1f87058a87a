//! Key-combo spec grammar and event matching.
//!
//! A spec is tokens joined by `+`, each either a modifier name
//! (`alt`, `control`, `meta`, `shift`, or the platform-resolved
//! `ctrl/cmd`) or a literal key name/character, e.g.
//! `"ctrl/cmd+shift+z"`. Matching is exact on modifiers:
//! specifying none requires none to be held.

use crate::event::{InputEvent, Modifiers};

/// Error produced when parsing a key-combo spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("empty key name in spec {spec:?}")]
pub struct KeySpecError {
    pub spec: String,
}

/// Host platform convention for the `ctrl/cmd` pseudo-modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `ctrl/cmd` means the command (meta) key.
    MacOs,
    /// `ctrl/cmd` means the control key.
    Other,
}

impl Platform {
    /// Convention of the machine this code runs on.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(target_os = "macos") { Self::MacOs } else { Self::Other }
    }
}

/// A parsed key-combo spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    pub modifiers: Modifiers,
    /// Key code to match, `None` for a modifiers-only spec.
    pub code: Option<u32>,
}

impl KeySpec {
    /// Parse `spec` for the host platform.
    pub fn parse(spec: &str) -> Result<Self, KeySpecError> {
        Self::parse_for(spec, Platform::host())
    }

    /// Parse `spec`, resolving `ctrl/cmd` per `platform`. When a
    /// spec names several non-modifier keys the last one wins.
    pub fn parse_for(spec: &str, platform: Platform) -> Result<Self, KeySpecError> {
        let mut modifiers = Modifiers::default();
        let mut code = None;

        for part in spec.split('+') {
            match part {
                "alt" => modifiers.alt = true,
                "control" => modifiers.control = true,
                "meta" => modifiers.meta = true,
                "shift" => modifiers.shift = true,
                "ctrl/cmd" => match platform {
                    Platform::MacOs => modifiers.meta = true,
                    Platform::Other => modifiers.control = true,
                },
                name => {
                    code = Some(
                        key_code(name).ok_or_else(|| KeySpecError { spec: spec.to_string() })?,
                    );
                }
            }
        }

        Ok(Self { modifiers, code })
    }

    /// True when every modifier flag equals the event's exactly
    /// and the key code, if specified, equals the event's.
    #[must_use]
    pub fn matches(&self, event: &InputEvent) -> bool {
        self.modifiers == event.modifiers
            && self.code.is_none_or(|code| event.key_code == Some(code))
    }
}

/// Convenience predicate used by the plugins. An invalid spec
/// never matches.
#[must_use]
pub fn is_key(spec: &str, event: &InputEvent) -> bool {
    KeySpec::parse(spec).is_ok_and(|key| key.matches(event))
}

/// Resolve a key name to its code: the named-key table first,
/// then the uppercased first character.
fn key_code(name: &str) -> Option<u32> {
    named_code(name).or_else(|| name.chars().next().map(|c| u32::from(c.to_ascii_uppercase())))
}

fn named_code(name: &str) -> Option<u32> {
    let code = match name {
        "backspace" => 8,
        "tab" => 9,
        "enter" => 13,
        "pause" => 19,
        "capslock" => 20,
        "escape" => 27,
        " " => 32,
        "pageup" => 33,
        "pagedown" => 34,
        "end" => 35,
        "home" => 36,
        "arrowleft" => 37,
        "arrowup" => 38,
        "arrowright" => 39,
        "arrowdown" => 40,
        "insert" => 45,
        "delete" => 46,
        "numlock" => 144,
        "scrolllock" => 145,
        ";" => 186,
        "=" | "add" => 187,
        "," => 188,
        "-" => 189,
        "." => 190,
        "/" => 191,
        "`" => 192,
        "[" => 219,
        "\\" => 220,
        "]" => 221,
        "'" => 222,
        _ => return None,
    };
    Some(code)
}

/// Key codes for the keys the standard plugins bind.
pub mod codes {
    /// Enter / return.
    pub const ENTER: u32 = 13;
    /// Tab.
    pub const TAB: u32 = 9;
    /// The letter `z` (undo/redo combos).
    pub const Z: u32 = 90;
}
