//! The mask engine: applies one classified edit to a field's state.
//!
//! The engine is synchronous and infallible from the host's point of view:
//! every call yields the exact text and caret to write back. An invalid edit
//! never propagates an error; it resolves to the last valid value at the
//! pre-edit caret, which the controller re-asserts on the host (a visual
//! no-op for the user).

use crate::definition::MaskDefinition;
use crate::intent::Edit;
use crate::locale::LocaleFormats;
use crate::numeric;
use crate::state::FieldMaskState;
use crate::template;
use crate::text::{byte_at_char_index, char_index_at, clamp_to_char_boundary};

/// What the controller writes back after an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit was accepted; the state now holds `value` as the last valid
    /// value.
    Accepted { value: String, caret: usize },
    /// The edit was rejected; `value` is the last valid value and `caret`
    /// the pre-edit caret to restore.
    Rejected { value: String, caret: usize },
}

/// Internal result of one formatter run, in character indices.
pub(crate) enum Formatted {
    Accept {
        value: String,
        caret: usize,
        new_definition: Option<MaskDefinition>,
    },
    Reject,
}

/// Apply one edit to the field's current text.
///
/// `text` is what the host currently displays; under normal operation it
/// equals `state.last_valid()`, but the engine edits whatever it is handed.
/// On acceptance the state is updated in place (value, caret, and the
/// definition if a key handler swapped it); on rejection the state keeps its
/// value and only the caret moves to the revert position.
pub fn apply_edit(
    state: &mut FieldMaskState,
    text: &str,
    edit: &Edit,
    locale: &dyn LocaleFormats,
) -> EditOutcome {
    // Host offsets are untrusted; clamp before converting to char indices.
    let start_byte = clamp_to_char_boundary(text, edit.selection.start);
    let end_byte = clamp_to_char_boundary(text, edit.selection.end).max(start_byte);
    let sel = (char_index_at(text, start_byte), char_index_at(text, end_byte));

    let formatted = match &state.definition {
        MaskDefinition::Integer {
            max_digits,
            allow_negative,
        } => numeric::apply_integer(*max_digits, *allow_negative, text, sel, &edit.intent),
        MaskDefinition::Decimal {
            max_digits,
            max_decimals,
            allow_negative,
        } => numeric::apply_decimal(
            *max_digits,
            *max_decimals,
            *allow_negative,
            text,
            sel,
            &edit.intent,
            locale,
        ),
        MaskDefinition::Date { template } | MaskDefinition::Custom { template } => {
            template::apply(template, text, sel, &edit.intent, &state.last_valid)
        }
    };

    match formatted {
        Formatted::Accept {
            value,
            caret,
            new_definition,
        } => {
            let caret = byte_at_char_index(&value, caret);
            state.last_valid = value.clone();
            state.caret = caret;
            if let Some(definition) = new_definition {
                state.definition = definition;
            }
            EditOutcome::Accepted { value, caret }
        }
        Formatted::Reject => {
            let caret = clamp_to_char_boundary(&state.last_valid, edit.selection.end);
            state.caret = caret;
            EditOutcome::Rejected {
                value: state.last_valid.clone(),
                caret,
            }
        }
    }
}
