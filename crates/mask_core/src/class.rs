//! Character classes and the template character registry.
//!
//! A template mask assigns a meaning to each character of its template
//! string. Characters registered here are *dynamic*: the user fills them in,
//! subject to a validator predicate or a stateful key handler. Characters
//! not in the registry are static literals, always rendered verbatim and
//! never user-editable.
//!
//! Classes hold first-class function values captured at construction time;
//! nothing is resolved by name at runtime. A registry is built once and then
//! shared immutably (via `Arc`) by every definition that uses it.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::definition::MaskDefinition;

/// Result of a key handler invocation.
pub struct KeyHandlerOutput {
    /// The new partial value up to the position in treatment.
    pub value: String,
    /// Replacement mask to attach before rendering the remaining positions.
    pub mask: Option<MaskDefinition>,
}

impl KeyHandlerOutput {
    /// A handler output that only rewrites the partial value.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            mask: None,
        }
    }

    /// A handler output that rewrites the partial value and swaps the mask.
    pub fn with_mask(value: impl Into<String>, mask: MaskDefinition) -> Self {
        Self {
            value: value.into(),
            mask: Some(mask),
        }
    }
}

/// Error raised by a failing key handler.
///
/// A failing handler is not part of the masking contract: the edit that
/// triggered it is rejected and the failure is logged, nothing more.
#[derive(Clone, Debug)]
pub struct KeyHandlerError {
    message: String,
}

impl KeyHandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for KeyHandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key handler failed: {}", self.message)
    }
}

impl Error for KeyHandlerError {}

/// Validator predicate: does this character fit this template position?
pub(crate) type ValidatorFn = dyn Fn(char) -> bool + Send + Sync;

/// Key handler: `(partial value to caret, last valid value, current
/// template)` → new partial value plus an optional replacement mask.
pub(crate) type KeyHandlerFn =
    dyn Fn(&str, &str, &str) -> Result<KeyHandlerOutput, KeyHandlerError> + Send + Sync;

/// Behavior of one dynamic template character.
#[derive(Clone)]
pub enum CharacterClass {
    /// Accepts a typed character if the predicate holds.
    Validator(Arc<ValidatorFn>),
    /// Transforms the partially rendered value and may swap the mask.
    KeyHandler(Arc<KeyHandlerFn>),
}

impl CharacterClass {
    /// Build a validator class from a predicate.
    pub fn validator(accept: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        Self::Validator(Arc::new(accept))
    }

    /// Build a key-handler class from a handler function.
    pub fn key_handler(
        handler: impl Fn(&str, &str, &str) -> Result<KeyHandlerOutput, KeyHandlerError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self::KeyHandler(Arc::new(handler))
    }
}

impl fmt::Debug for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validator(_) => f.write_str("Validator(..)"),
            Self::KeyHandler(_) => f.write_str("KeyHandler(..)"),
        }
    }
}

/// Maps template characters to their [`CharacterClass`].
///
/// Any template character without an entry is a static literal.
///
/// # Example
///
/// ```
/// use mask_core::ClassRegistry;
///
/// let registry = ClassRegistry::with_defaults();
/// assert!(registry.is_dynamic('0')); // digit slot
/// assert!(!registry.is_dynamic('/')); // literal
/// ```
#[derive(Clone, Default)]
pub struct ClassRegistry {
    classes: HashMap<char, CharacterClass>,
}

impl ClassRegistry {
    /// An empty registry: every template character is a literal.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default classes:
    ///
    /// - `A` — letter (`A-Z`, `a-z`)
    /// - `S` — uppercase letter (`A-Z`)
    /// - `s` — lowercase letter (`a-z`)
    /// - `0` — digit (`0-9`)
    /// - `*` — letter or digit
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register('A', CharacterClass::validator(|c| c.is_ascii_alphabetic()));
        registry.register('S', CharacterClass::validator(|c| c.is_ascii_uppercase()));
        registry.register('s', CharacterClass::validator(|c| c.is_ascii_lowercase()));
        registry.register('0', CharacterClass::validator(|c| c.is_ascii_digit()));
        registry.register('*', CharacterClass::validator(|c| c.is_ascii_alphanumeric()));
        registry
    }

    /// A registry carrying only the `0` digit class, for date masks.
    pub fn digits_only() -> Self {
        let mut registry = Self::new();
        registry.register('0', CharacterClass::validator(|c| c.is_ascii_digit()));
        registry
    }

    /// Register (or override) the class for a template character.
    pub fn register(&mut self, template_char: char, class: CharacterClass) {
        self.classes.insert(template_char, class);
    }

    /// Resolve a template character to its class, if it has one.
    #[inline]
    pub fn resolve(&self, template_char: char) -> Option<&CharacterClass> {
        self.classes.get(&template_char)
    }

    /// Returns `true` if the template character is user-editable.
    #[inline]
    pub fn is_dynamic(&self, template_char: char) -> bool {
        self.classes.contains_key(&template_char)
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars: Vec<char> = self.classes.keys().copied().collect();
        chars.sort_unstable();
        f.debug_struct("ClassRegistry").field("chars", &chars).finish()
    }
}
