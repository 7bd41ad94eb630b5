//! Mask definitions.
//!
//! A [`MaskDefinition`] is an immutable description of what a field accepts:
//! an integer, a decimal number, a locale-formatted date, or a custom
//! character-class template. Definitions are cheap to clone (template masks
//! share their registry through an `Arc`) and are validated once when a
//! field attaches them.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::class::ClassRegistry;
use crate::locale::{DateFieldOrder, LocaleFormats};

/// The four kinds of mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskKind {
    Integer,
    Decimal,
    Date,
    Custom,
}

/// Template string plus the registry its characters resolve against.
///
/// The template length is constant for the lifetime of the definition; the
/// rendered value may be shorter but never longer.
#[derive(Clone, Debug)]
pub struct TemplateSpec {
    /// The template characters, dynamic or literal.
    pub text: String,
    /// Shared, immutable registry resolving the dynamic characters.
    pub registry: Arc<ClassRegistry>,
}

/// Immutable description of one mask.
#[derive(Clone, Debug)]
pub enum MaskDefinition {
    /// Digits only, optional leading minus.
    Integer { max_digits: u32, allow_negative: bool },
    /// Digits with one locale decimal separator; the display carries locale
    /// group separators re-derived on every accepted edit.
    Decimal {
        max_digits: u32,
        max_decimals: u32,
        allow_negative: bool,
    },
    /// A template derived from the locale date field order and separator.
    Date { template: TemplateSpec },
    /// A caller-supplied template and class registry.
    Custom { template: TemplateSpec },
}

impl MaskDefinition {
    /// An integer mask holding at most `max_digits` digits.
    pub fn integer(max_digits: u32, allow_negative: bool) -> Self {
        Self::Integer {
            max_digits,
            allow_negative,
        }
    }

    /// A decimal mask holding at most `max_digits` significant digits, of
    /// which at most `max_decimals` may follow the decimal separator.
    pub fn decimal(max_digits: u32, max_decimals: u32, allow_negative: bool) -> Self {
        Self::Decimal {
            max_digits,
            max_decimals,
            allow_negative,
        }
    }

    /// A date mask: the locale field order joined by the locale date
    /// separator, digits only (e.g. `00/00/0000` for day-first locales).
    pub fn date(locale: &dyn LocaleFormats) -> Self {
        let sep = locale.date_separator();
        let text = match locale.date_field_order() {
            DateFieldOrder::Dmy | DateFieldOrder::Mdy => format!("00{sep}00{sep}0000"),
            DateFieldOrder::Ymd => format!("0000{sep}00{sep}00"),
        };
        Self::Date {
            template: TemplateSpec {
                text,
                registry: Arc::new(ClassRegistry::digits_only()),
            },
        }
    }

    /// A custom template mask resolved against the given registry.
    pub fn custom(template: impl Into<String>, registry: Arc<ClassRegistry>) -> Self {
        Self::Custom {
            template: TemplateSpec {
                text: template.into(),
                registry,
            },
        }
    }

    /// The kind discriminant of this definition.
    pub fn kind(&self) -> MaskKind {
        match self {
            Self::Integer { .. } => MaskKind::Integer,
            Self::Decimal { .. } => MaskKind::Decimal,
            Self::Date { .. } => MaskKind::Date,
            Self::Custom { .. } => MaskKind::Custom,
        }
    }

    /// Check that the definition is internally consistent.
    ///
    /// Attaching an invalid definition must fail up front rather than
    /// misbehave one keystroke at a time, so the store calls this before
    /// touching any field state.
    pub fn validate(&self) -> Result<(), MaskDefinitionError> {
        match self {
            Self::Integer { max_digits, .. } => {
                if *max_digits == 0 {
                    return Err(MaskDefinitionError::ZeroDigits);
                }
            }
            Self::Decimal {
                max_digits,
                max_decimals,
                ..
            } => {
                if *max_digits == 0 {
                    return Err(MaskDefinitionError::ZeroDigits);
                }
                if max_decimals > max_digits {
                    return Err(MaskDefinitionError::DecimalsExceedDigits {
                        max_digits: *max_digits,
                        max_decimals: *max_decimals,
                    });
                }
            }
            Self::Date { template } | Self::Custom { template } => {
                if template.text.is_empty() {
                    return Err(MaskDefinitionError::EmptyTemplate);
                }
                if !template
                    .text
                    .chars()
                    .any(|c| template.registry.is_dynamic(c))
                {
                    return Err(MaskDefinitionError::NoEditablePositions);
                }
            }
        }
        Ok(())
    }

    /// The template spec, for the two template-driven kinds.
    pub(crate) fn template_spec(&self) -> Option<&TemplateSpec> {
        match self {
            Self::Date { template } | Self::Custom { template } => Some(template),
            _ => None,
        }
    }
}

/// An internally inconsistent [`MaskDefinition`], reported when a field
/// tries to attach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskDefinitionError {
    /// A template mask with an empty template string.
    EmptyTemplate,
    /// A template whose characters are all static literals.
    NoEditablePositions,
    /// A numeric mask that can never hold a digit.
    ZeroDigits,
    /// More fractional digits allowed than significant digits overall.
    DecimalsExceedDigits { max_digits: u32, max_decimals: u32 },
}

impl fmt::Display for MaskDefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTemplate => write!(f, "mask template is empty"),
            Self::NoEditablePositions => {
                write!(f, "mask template has no editable positions")
            }
            Self::ZeroDigits => write!(f, "numeric mask allows zero digits"),
            Self::DecimalsExceedDigits {
                max_digits,
                max_decimals,
            } => write!(
                f,
                "decimal mask allows {max_decimals} fractional digits but only \
                 {max_digits} digits overall"
            ),
        }
    }
}

impl Error for MaskDefinitionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::StaticLocale;

    #[test]
    fn builders_report_their_kind() {
        let locale = StaticLocale::default();
        assert_eq!(MaskDefinition::integer(3, false).kind(), MaskKind::Integer);
        assert_eq!(
            MaskDefinition::decimal(6, 2, true).kind(),
            MaskKind::Decimal
        );
        assert_eq!(MaskDefinition::date(&locale).kind(), MaskKind::Date);
        assert_eq!(
            MaskDefinition::custom("00", Arc::new(ClassRegistry::with_defaults())).kind(),
            MaskKind::Custom
        );
    }

    #[test]
    fn date_template_follows_locale_order_and_separator() {
        let mut locale = StaticLocale::default();

        locale.date_field_order = DateFieldOrder::Dmy;
        let def = MaskDefinition::date(&locale);
        let MaskDefinition::Date { template } = &def else {
            panic!("expected date mask");
        };
        assert_eq!(template.text, "00/00/0000");

        locale.date_field_order = DateFieldOrder::Ymd;
        locale.date_separator = '-';
        let def = MaskDefinition::date(&locale);
        let MaskDefinition::Date { template } = &def else {
            panic!("expected date mask");
        };
        assert_eq!(template.text, "0000-00-00");
    }

    #[test]
    fn date_mask_uses_only_the_digit_class() {
        let def = MaskDefinition::date(&StaticLocale::default());
        let template = def.template_spec().unwrap();
        assert!(template.registry.is_dynamic('0'));
        assert!(!template.registry.is_dynamic('A'));
    }

    #[test]
    fn validate_rejects_inconsistent_definitions() {
        let registry = Arc::new(ClassRegistry::with_defaults());

        assert_eq!(
            MaskDefinition::custom("", registry.clone()).validate(),
            Err(MaskDefinitionError::EmptyTemplate)
        );
        assert_eq!(
            MaskDefinition::custom("--/--", registry.clone()).validate(),
            Err(MaskDefinitionError::NoEditablePositions)
        );
        assert_eq!(
            MaskDefinition::integer(0, false).validate(),
            Err(MaskDefinitionError::ZeroDigits)
        );
        assert_eq!(
            MaskDefinition::decimal(2, 4, false).validate(),
            Err(MaskDefinitionError::DecimalsExceedDigits {
                max_digits: 2,
                max_decimals: 4,
            })
        );

        assert!(MaskDefinition::custom("00/00", registry).validate().is_ok());
        assert!(MaskDefinition::integer(5, true).validate().is_ok());
        assert!(MaskDefinition::decimal(6, 2, true).validate().is_ok());
        assert!(
            MaskDefinition::date(&StaticLocale::default())
                .validate()
                .is_ok()
        );
    }
}
