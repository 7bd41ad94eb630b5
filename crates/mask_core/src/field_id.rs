//! Generic, UI-agnostic identifier for masked fields.
//!
//! This type intentionally uses a plain `u64` to avoid coupling to any
//! widget- or DOM-specific identifier type. Integration layers can provide
//! `From` implementations to convert from their native ID types.

/// Opaque identifier for a masked text field.
///
/// This is a lightweight, copyable handle that uniquely identifies a field
/// within a mask store. The actual value has no semantic meaning within this
/// crate—it's just a key.
///
/// # Integration
///
/// To use with a widget system, implement `From` in your integration layer:
///
/// ```ignore
/// use mask_core::FieldId;
///
/// impl From<WidgetId> for FieldId {
///     fn from(id: WidgetId) -> Self {
///         FieldId::from_raw(id.0 as u64)
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Create a `FieldId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for FieldId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_round_trip() {
        let raw = 42u64;
        let id = FieldId::from_raw(raw);
        assert_eq!(id.as_raw(), raw);
    }

    #[test]
    fn field_id_hash_and_equality() {
        use std::collections::HashSet;

        assert_eq!(FieldId::from_raw(1), FieldId::from_raw(1));
        assert_ne!(FieldId::from_raw(1), FieldId::from_raw(2));

        let mut set = HashSet::new();
        set.insert(FieldId::from_raw(1));
        set.insert(FieldId::from_raw(2));
        set.insert(FieldId::from_raw(1)); // duplicate
        assert_eq!(set.len(), 2);
    }
}
