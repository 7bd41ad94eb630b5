//! # mask_field
//!
//! The controller layer binding the [`mask_core`] engine to a host text
//! input. Hosts implement [`TextInputHost`] over their widget or DOM input,
//! attach masks through a [`MaskStore`], and route normalized key events to
//! [`MaskStore::handle_key`]; the store writes the formatted text and caret
//! back and reports whether the key was applied, reverted, or should fall
//! through to default handling.

mod host;
mod store;

pub use host::TextInputHost;
pub use store::{KeyDisposition, MaskStore};
