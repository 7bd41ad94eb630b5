//! Locale formats consumed by the engine.
//!
//! The engine never negotiates a locale; the host supplies one through
//! [`LocaleFormats`] and the engine reads the four characters/orders it
//! needs per keystroke.

/// Order of the day, month and year fields in a formatted date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFieldOrder {
    /// Day, month, year (e.g. 31/12/2024).
    Dmy,
    /// Month, day, year (e.g. 12/31/2024).
    Mdy,
    /// Year, month, day (e.g. 2024/12/31).
    Ymd,
}

/// Locale-dependent formats supplied by the host.
pub trait LocaleFormats {
    /// Character separating the integer and fractional parts of a number.
    fn decimal_separator(&self) -> char;

    /// Character inserted every three digits of a number's integer part.
    fn group_separator(&self) -> char;

    /// Order of the date fields.
    fn date_field_order(&self) -> DateFieldOrder;

    /// Character separating the date fields.
    fn date_separator(&self) -> char;
}

/// A fixed set of locale formats.
///
/// Useful for hosts with a single compiled-in locale and for tests. The
/// `Default` value matches en-US conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticLocale {
    pub decimal_separator: char,
    pub group_separator: char,
    pub date_field_order: DateFieldOrder,
    pub date_separator: char,
}

impl Default for StaticLocale {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            date_field_order: DateFieldOrder::Mdy,
            date_separator: '/',
        }
    }
}

impl LocaleFormats for StaticLocale {
    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    fn group_separator(&self) -> char {
        self.group_separator
    }

    fn date_field_order(&self) -> DateFieldOrder {
        self.date_field_order
    }

    fn date_separator(&self) -> char {
        self.date_separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_static_locale_is_en_us() {
        let locale = StaticLocale::default();
        assert_eq!(locale.decimal_separator(), '.');
        assert_eq!(locale.group_separator(), ',');
        assert_eq!(locale.date_field_order(), DateFieldOrder::Mdy);
        assert_eq!(locale.date_separator(), '/');
    }
}
