//! # mask_core
//!
//! UI-agnostic input masking engine.
//!
//! This crate turns raw keystrokes on a text field into a pattern-constrained,
//! formatted string (integers, decimals, dates, arbitrary character-class
//! templates) while preserving caret/selection position and silently reverting
//! invalid edits to the last known-good value. It provides:
//! - [`MaskDefinition`]: an immutable description of one of four mask kinds
//! - [`ClassRegistry`] / [`CharacterClass`]: template characters mapped to
//!   per-character validators or stateful key handlers
//! - [`classify`]: raw key event + selection → a tagged [`Edit`] intent
//! - [`apply_edit`]: the engine — formats an edit against a
//!   [`FieldMaskState`] and yields the text/caret to write back
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework or widget toolkit
//! - A concrete text-input implementation
//! - Locale negotiation (locale formats are consumed via [`LocaleFormats`])
//!
//! It depends only on `std` plus the `log` facade and provides pure editing
//! semantics that can be tested independently and reused across different
//! host integrations.
//!
//! ## Offsets
//!
//! All public caret and selection offsets are byte offsets into UTF-8
//! strings, always on character boundaries. Offsets supplied by a host are
//! clamped before use (see [`clamp_to_char_boundary`]).

mod class;
mod definition;
mod engine;
mod field_id;
mod intent;
mod locale;
mod numeric;
mod selection;
mod state;
mod template;
mod text;

pub use class::{CharacterClass, ClassRegistry, KeyHandlerError, KeyHandlerOutput};
pub use definition::{MaskDefinition, MaskDefinitionError, MaskKind, TemplateSpec};
pub use engine::{EditOutcome, apply_edit};
pub use field_id::FieldId;
pub use intent::{Edit, EditIntent, Key, KeyEvent, classify};
pub use locale::{DateFieldOrder, LocaleFormats, StaticLocale};
pub use selection::SelectionRange;
pub use state::FieldMaskState;
pub use text::clamp_to_char_boundary;
