//! UTF-8 text utilities for mask editing.
//!
//! The public API of this crate speaks byte offsets; the formatting
//! algorithms walk template positions character by character. These helpers
//! bridge the two without ever slicing inside a multi-byte character.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use mask_core::clamp_to_char_boundary;
///
/// let s = "1\u{a0}234"; // no-break space group separator is 2 bytes
/// assert_eq!(clamp_to_char_boundary(s, 1), 1); // start of '\u{a0}'
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '\u{a0}' -> its start
/// assert_eq!(clamp_to_char_boundary(s, 3), 3); // '2'
/// assert_eq!(clamp_to_char_boundary(s, 100), 6); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Number of characters strictly before the given byte offset.
///
/// `byte` must already be clamped to a character boundary.
pub(crate) fn char_index_at(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

/// Byte offset of the character at `index`, or `s.len()` if `index` is at
/// or beyond the end of the string.
pub(crate) fn byte_at_char_index(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_boundary_basic() {
        let s = "a€b";
        assert_eq!(clamp_to_char_boundary(s, 0), 0);
        assert_eq!(clamp_to_char_boundary(s, 1), 1);
        assert_eq!(clamp_to_char_boundary(s, 2), 1);
        assert_eq!(clamp_to_char_boundary(s, 3), 1);
        assert_eq!(clamp_to_char_boundary(s, 4), 4);
        assert_eq!(clamp_to_char_boundary(s, 100), 5);
    }

    #[test]
    fn char_and_byte_index_round_trip() {
        let s = "1\u{a0}234";
        assert_eq!(char_index_at(s, 0), 0);
        assert_eq!(char_index_at(s, 1), 1);
        assert_eq!(char_index_at(s, 3), 2);
        assert_eq!(char_index_at(s, s.len()), 5);

        assert_eq!(byte_at_char_index(s, 0), 0);
        assert_eq!(byte_at_char_index(s, 1), 1);
        assert_eq!(byte_at_char_index(s, 2), 3);
        assert_eq!(byte_at_char_index(s, 5), s.len());
        assert_eq!(byte_at_char_index(s, 99), s.len());
    }
}
