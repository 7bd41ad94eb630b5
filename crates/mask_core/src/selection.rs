//! Text selection representation.

/// Represents a text selection as a byte range.
///
/// The range is always normalized such that `start <= end`. Both `start` and
/// `end` are byte offsets into a UTF-8 string. A collapsed range
/// (`start == end`) is a plain caret position.
///
/// Offsets arriving from a host are not trusted: the engine clamps them to
/// character boundaries before editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed range representing a bare caret.
    #[inline]
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
    }

    #[test]
    fn selection_range_caret_is_empty() {
        let caret = SelectionRange::caret(3);
        assert!(caret.is_empty());
        assert_eq!(caret.len(), 0);

        let non_empty = SelectionRange::new(3, 5);
        assert!(!non_empty.is_empty());
        assert_eq!(non_empty.len(), 2);
    }
}
