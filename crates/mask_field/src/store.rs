//! Central store for masked-field state and the key event entry point.
//!
//! This store is UI-agnostic: it does not render, measure, or own a widget.
//! Integration layers deliver normalized key events here and implement
//! [`TextInputHost`](crate::host::TextInputHost) over their actual input;
//! the store classifies the event, runs the engine, and writes the result
//! back through the host.

use std::collections::HashMap;

use mask_core::{
    EditOutcome, FieldId, FieldMaskState, KeyEvent, LocaleFormats, MaskDefinition,
    MaskDefinitionError, apply_edit, classify,
};

use crate::host::TextInputHost;

/// What the controller did with a key event.
///
/// `PassedThrough` means the host must run its default handling (navigation,
/// shortcuts, or an unmasked field); for the other two the controller has
/// already written text and caret back and the host must not process the key
/// again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The edit was accepted and the formatted result written to the host.
    Applied,
    /// The edit was rejected; the last valid value was re-asserted.
    Reverted,
    /// Not an edit this store handles.
    PassedThrough,
}

/// Central store for masked fields.
///
/// Owns one [`FieldMaskState`] per masked field, keyed by [`FieldId`].
/// Fields without an entry are unmasked and every key event on them passes
/// through.
///
/// # Example
///
/// ```
/// use mask_core::{FieldId, MaskDefinition};
/// use mask_field::MaskStore;
///
/// let mut store = MaskStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.set_mask(id, MaskDefinition::integer(5, false)).unwrap();
/// assert!(store.is_masked(id));
/// assert_eq!(store.value(id), Some(""));
/// ```
#[derive(Debug, Default)]
pub struct MaskStore {
    fields: HashMap<FieldId, FieldMaskState>,
}

impl MaskStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Attach a mask to a field, replacing any mask it already has.
    ///
    /// The definition is validated first; on error nothing is attached and
    /// any existing mask on the field stays active. On success the field
    /// starts from fresh state (empty value, caret at 0).
    pub fn set_mask(
        &mut self,
        id: FieldId,
        definition: MaskDefinition,
    ) -> Result<(), MaskDefinitionError> {
        definition.validate()?;
        log::debug!("attaching {:?} mask to field {id:?}", definition.kind());
        self.fields.insert(id, FieldMaskState::new(definition));
        Ok(())
    }

    /// Detach the mask from a field. No-op if the field is unmasked.
    pub fn remove_mask(&mut self, id: FieldId) {
        if self.fields.remove(&id).is_some() {
            log::debug!("detached mask from field {id:?}");
        }
    }

    /// Returns `true` if the field currently has a mask attached.
    pub fn is_masked(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// The field's last valid formatted value, if masked.
    pub fn value(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|s| s.last_valid())
    }

    /// The field's attached definition, if masked.
    ///
    /// A key handler may have swapped this since `set_mask`.
    pub fn definition(&self, id: FieldId) -> Option<&MaskDefinition> {
        self.fields.get(&id).map(|s| s.definition())
    }

    /// Route one key event for a field.
    ///
    /// Classifies the event, runs the engine against the host's current text
    /// and selection, and writes text and caret back for both accepted and
    /// rejected edits. `notify` is invoked once per call at most, only when
    /// an accepted edit changed the value.
    pub fn handle_key(
        &mut self,
        id: FieldId,
        event: &KeyEvent,
        host: &mut dyn TextInputHost,
        locale: &dyn LocaleFormats,
        notify: &mut dyn FnMut(FieldId, &str),
    ) -> KeyDisposition {
        let Some(state) = self.fields.get_mut(&id) else {
            return KeyDisposition::PassedThrough;
        };
        let Some(edit) = classify(event, host.selection()) else {
            return KeyDisposition::PassedThrough;
        };

        let text = host.text();
        match apply_edit(state, &text, &edit, locale) {
            EditOutcome::Accepted { value, caret } => {
                let changed = value != text;
                host.set_text(&value);
                host.set_caret(caret);
                if changed {
                    notify(id, &value);
                }
                KeyDisposition::Applied
            }
            EditOutcome::Rejected { value, caret } => {
                host.set_text(&value);
                host.set_caret(caret);
                KeyDisposition::Reverted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mask_core::{SelectionRange, StaticLocale};

    /// In-memory host standing in for a real text input.
    struct FakeHost {
        text: String,
        caret: usize,
        anchor: Option<usize>,
    }

    impl FakeHost {
        fn new() -> Self {
            Self {
                text: String::new(),
                caret: 0,
                anchor: None,
            }
        }

        fn select(&mut self, start: usize, end: usize) {
            self.anchor = Some(start);
            self.caret = end;
        }
    }

    impl TextInputHost for FakeHost {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
        }

        fn caret(&self) -> usize {
            self.caret
        }

        fn set_caret(&mut self, caret: usize) {
            self.caret = caret;
            self.anchor = None;
        }

        fn selection(&self) -> SelectionRange {
            match self.anchor {
                Some(anchor) => SelectionRange::new(anchor, self.caret),
                None => SelectionRange::caret(self.caret),
            }
        }
    }

    fn type_chars(
        store: &mut MaskStore,
        id: FieldId,
        host: &mut FakeHost,
        keys: &str,
    ) -> Vec<KeyDisposition> {
        let locale = StaticLocale::default();
        keys.chars()
            .map(|c| {
                store.handle_key(
                    id,
                    &KeyEvent::character(c),
                    host,
                    &locale,
                    &mut |_, _| {},
                )
            })
            .collect()
    }

    #[test]
    fn unmasked_field_passes_through_untouched() {
        let mut store = MaskStore::new();
        let mut host = FakeHost::new();
        host.set_text("free text");
        let locale = StaticLocale::default();

        let disposition = store.handle_key(
            FieldId::from_raw(1),
            &KeyEvent::character('x'),
            &mut host,
            &locale,
            &mut |_, _| panic!("no notification expected"),
        );
        assert_eq!(disposition, KeyDisposition::PassedThrough);
        assert_eq!(host.text, "free text");
    }

    #[test]
    fn navigation_keys_pass_through_on_masked_fields() {
        let mut store = MaskStore::new();
        let id = FieldId::from_raw(1);
        store.set_mask(id, MaskDefinition::integer(3, false)).unwrap();

        let mut host = FakeHost::new();
        let locale = StaticLocale::default();
        let arrow = KeyEvent {
            key: mask_core::Key::Other,
            ctrl: false,
            alt: false,
        };
        let disposition =
            store.handle_key(id, &arrow, &mut host, &locale, &mut |_, _| {});
        assert_eq!(disposition, KeyDisposition::PassedThrough);
    }

    #[test]
    fn accepted_edits_write_back_and_notify() {
        let mut store = MaskStore::new();
        let id = FieldId::from_raw(1);
        store.set_mask(id, MaskDefinition::integer(3, false)).unwrap();

        let mut host = FakeHost::new();
        let locale = StaticLocale::default();
        let mut notified = Vec::new();

        let disposition = store.handle_key(
            id,
            &KeyEvent::character('7'),
            &mut host,
            &locale,
            &mut |id, value| notified.push((id, value.to_string())),
        );
        assert_eq!(disposition, KeyDisposition::Applied);
        assert_eq!(host.text, "7");
        assert_eq!(host.caret, 1);
        assert_eq!(notified, vec![(id, "7".to_string())]);
        assert_eq!(store.value(id), Some("7"));
    }

    #[test]
    fn rejected_edits_revert_without_notifying() {
        let mut store = MaskStore::new();
        let id = FieldId::from_raw(1);
        store.set_mask(id, MaskDefinition::integer(3, false)).unwrap();

        let mut host = FakeHost::new();
        type_chars(&mut store, id, &mut host, "123");
        assert_eq!(host.text, "123");

        let locale = StaticLocale::default();
        let disposition = store.handle_key(
            id,
            &KeyEvent::character('4'),
            &mut host,
            &locale,
            &mut |_, _| panic!("rejected edit must not notify"),
        );
        assert_eq!(disposition, KeyDisposition::Reverted);
        assert_eq!(host.text, "123");
        assert_eq!(host.caret, 3);
    }

    #[test]
    fn accepted_no_op_deletes_do_not_notify() {
        let mut store = MaskStore::new();
        let id = FieldId::from_raw(1);
        store.set_mask(id, MaskDefinition::integer(3, false)).unwrap();

        let mut host = FakeHost::new();
        let locale = StaticLocale::default();
        let disposition = store.handle_key(
            id,
            &KeyEvent::backspace(),
            &mut host,
            &locale,
            &mut |_, _| panic!("no-op must not notify"),
        );
        assert_eq!(disposition, KeyDisposition::Applied);
        assert_eq!(host.text, "");
    }

    #[test]
    fn selection_is_replaced_by_the_typed_character() {
        let mut store = MaskStore::new();
        let id = FieldId::from_raw(1);
        store.set_mask(id, MaskDefinition::integer(5, false)).unwrap();

        let mut host = FakeHost::new();
        type_chars(&mut store, id, &mut host, "123");

        host.select(0, 2);
        let locale = StaticLocale::default();
        store.handle_key(
            id,
            &KeyEvent::character('9'),
            &mut host,
            &locale,
            &mut |_, _| {},
        );
        assert_eq!(host.text, "93");
        assert_eq!(host.caret, 1);
    }

    #[test]
    fn set_mask_rejects_invalid_definitions_and_keeps_the_old_mask() {
        let mut store = MaskStore::new();
        let id = FieldId::from_raw(1);
        store.set_mask(id, MaskDefinition::integer(3, false)).unwrap();

        let result = store.set_mask(id, MaskDefinition::integer(0, false));
        assert_eq!(result, Err(MaskDefinitionError::ZeroDigits));
        assert_eq!(
            store.definition(id).map(MaskDefinition::kind),
            Some(mask_core::MaskKind::Integer)
        );
        assert!(store.is_masked(id));
    }

    #[test]
    fn set_mask_replaces_state_of_an_already_masked_field() {
        let mut store = MaskStore::new();
        let id = FieldId::from_raw(1);
        store.set_mask(id, MaskDefinition::integer(3, false)).unwrap();

        let mut host = FakeHost::new();
        type_chars(&mut store, id, &mut host, "12");
        assert_eq!(store.value(id), Some("12"));

        store.set_mask(id, MaskDefinition::decimal(6, 2, false)).unwrap();
        assert_eq!(store.value(id), Some(""));
    }

    #[test]
    fn remove_mask_is_idempotent_and_disables_handling() {
        let mut store = MaskStore::new();
        let id = FieldId::from_raw(1);
        store.set_mask(id, MaskDefinition::integer(3, false)).unwrap();

        store.remove_mask(id);
        store.remove_mask(id);
        assert!(!store.is_masked(id));
        assert_eq!(store.value(id), None);

        let mut host = FakeHost::new();
        let locale = StaticLocale::default();
        let disposition = store.handle_key(
            id,
            &KeyEvent::character('1'),
            &mut host,
            &locale,
            &mut |_, _| {},
        );
        assert_eq!(disposition, KeyDisposition::PassedThrough);
    }

    #[test]
    fn fields_are_tracked_independently() {
        let mut store = MaskStore::new();
        let a = FieldId::from_raw(1);
        let b = FieldId::from_raw(2);
        store.set_mask(a, MaskDefinition::integer(3, false)).unwrap();
        store.set_mask(b, MaskDefinition::integer(3, false)).unwrap();

        let mut host_a = FakeHost::new();
        type_chars(&mut store, a, &mut host_a, "12");

        assert_eq!(store.value(a), Some("12"));
        assert_eq!(store.value(b), Some(""));
    }
}
