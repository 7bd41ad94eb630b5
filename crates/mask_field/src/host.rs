//! The host text-input abstraction.

use mask_core::SelectionRange;

/// One text input as the controller sees it.
///
/// The controller never renders anything; it reads the current text and
/// selection through this trait and writes the formatted result (or the
/// revert) back. Integration layers implement it over their widget toolkit
/// or DOM binding.
///
/// All offsets are byte offsets into the UTF-8 text. Implementations should
/// report offsets on character boundaries; the engine clamps what it
/// receives, so a sloppy host degrades gracefully instead of panicking.
pub trait TextInputHost {
    /// The text currently displayed.
    fn text(&self) -> String;

    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);

    /// Current caret byte offset.
    fn caret(&self) -> usize;

    /// Move the caret, collapsing any selection.
    fn set_caret(&mut self, caret: usize);

    /// Current selection; a collapsed range at the caret when nothing is
    /// selected.
    fn selection(&self) -> SelectionRange;
}
