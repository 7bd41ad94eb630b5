//! Edit classification: raw key events to tagged edit intents.
//!
//! The host delivers key events with Delete already normalized to a key
//! distinct from Backspace. Everything that is not a plain printable
//! character or one of the two delete keys classifies to `None` and must be
//! passed through to the host unmodified (navigation, shortcuts, function
//! keys).

use crate::selection::SelectionRange;

/// A normalized key, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A character-producing key.
    Char(char),
    /// The Backspace key.
    Backspace,
    /// The Delete (forward delete) key.
    Delete,
    /// Navigation, function or other non-editing keys.
    Other,
}

/// A key event with its modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyEvent {
    /// A plain character key with no modifiers.
    pub fn character(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: false,
            alt: false,
        }
    }

    /// The Backspace key with no modifiers.
    pub fn backspace() -> Self {
        Self {
            key: Key::Backspace,
            ctrl: false,
            alt: false,
        }
    }

    /// The Delete key with no modifiers.
    pub fn delete() -> Self {
        Self {
            key: Key::Delete,
            ctrl: false,
            alt: false,
        }
    }
}

/// What an edit does, before the mask has a say.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditIntent {
    /// Insert one character (replacing the selection if non-empty).
    Insert(char),
    /// Backspace: remove the selection, or the character before the caret.
    DeleteBackward,
    /// Delete: remove the selection, or the character after the caret.
    DeleteForward,
}

/// An edit intent plus the selection it applies to.
///
/// A non-empty selection collapses: insert removes the selection and inserts
/// one character; delete removes exactly the selection, consuming no extra
/// character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    pub intent: EditIntent,
    pub selection: SelectionRange,
}

/// Classify a key event into an [`Edit`], or `None` for keys the mask does
/// not handle.
pub fn classify(event: &KeyEvent, selection: SelectionRange) -> Option<Edit> {
    if event.ctrl || event.alt {
        return None;
    }

    let intent = match event.key {
        Key::Char(c) if !c.is_control() => EditIntent::Insert(c),
        Key::Char(_) => return None,
        Key::Backspace => EditIntent::DeleteBackward,
        Key::Delete => EditIntent::DeleteForward,
        Key::Other => return None,
    };

    Some(Edit { intent, selection })
}
