//! # inmask
//!
//! Input masking for text fields.
//!
//! The engine turns raw keystrokes into pattern-constrained, formatted text:
//! integers, decimals with live digit grouping, locale-ordered dates, and
//! custom character-class templates. Invalid edits are silently reverted to
//! the last valid value with the caret held in place, so a masked field can
//! never display an out-of-pattern string.
//!
//! This crate is a facade over the two member crates:
//! - [`mask_core`] — the UI-agnostic engine (definitions, character classes,
//!   formatting, caret reconciliation)
//! - [`mask_field`] — the controller binding the engine to a host text input
//!
//! # Example
//!
//! ```
//! use inmask::{FieldId, MaskDefinition, MaskStore};
//!
//! let mut store = MaskStore::new();
//! let id = FieldId::from_raw(1);
//!
//! store
//!     .set_mask(id, MaskDefinition::decimal(6, 2, false))
//!     .unwrap();
//! assert!(store.is_masked(id));
//! assert_eq!(store.value(id), Some(""));
//! ```
//!
//! Hosts implement [`TextInputHost`] over their text input and feed key
//! events to [`MaskStore::handle_key`]; everything else is written back
//! through the trait.

pub use mask_core::{
    CharacterClass, ClassRegistry, DateFieldOrder, Edit, EditIntent, EditOutcome, FieldId,
    FieldMaskState, Key, KeyEvent, KeyHandlerError, KeyHandlerOutput, LocaleFormats,
    MaskDefinition, MaskDefinitionError, MaskKind, SelectionRange, StaticLocale,
    TemplateSpec, apply_edit, clamp_to_char_boundary, classify,
};
pub use mask_field::{KeyDisposition, MaskStore, TextInputHost};
