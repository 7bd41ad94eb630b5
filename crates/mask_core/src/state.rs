//! Per-field mask state.

use crate::definition::MaskDefinition;

/// State the engine keeps for one masked field.
///
/// Owned exclusively by that field's controller: created when a mask is
/// attached, destroyed when it is removed. Mutates in place on every
/// accepted keystroke and stays untouched on rejection (apart from the
/// caret, which tracks the revert position).
#[derive(Clone, Debug)]
pub struct FieldMaskState {
    pub(crate) definition: MaskDefinition,
    pub(crate) last_valid: String,
    pub(crate) caret: usize,
}

impl FieldMaskState {
    /// Fresh state for a newly attached mask: empty value, caret at 0.
    pub fn new(definition: MaskDefinition) -> Self {
        Self {
            definition,
            last_valid: String::new(),
            caret: 0,
        }
    }

    /// The currently attached definition.
    pub fn definition(&self) -> &MaskDefinition {
        &self.definition
    }

    /// The most recent accepted formatted value; the revert target when an
    /// edit is rejected.
    pub fn last_valid(&self) -> &str {
        &self.last_valid
    }

    /// Caret byte offset into the last valid value.
    pub fn caret(&self) -> usize {
        self.caret
    }
}
