#![forbid(unsafe_code)]

//! Locale tables consumed by the number grammar.
//!
//! A [`Locale`] is plain data: the characters a locale uses for digits,
//! signs and separators, plus where it places a currency label. A handful
//! of presets ship with the crate; hosts with a full CLDR source build their
//! own with the `with_*` methods.

/// Where a currency label goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurrencyPlacement {
    /// `$12`
    #[default]
    Prefix,
    /// `12 €`
    Suffix,
}

/// Characters used to display numbers in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    identifier: String,
    digits: [char; 10],
    fraction_separator: char,
    grouping_separator: char,
    minus_sign: char,
    plus_sign: char,
    currency_placement: CurrencyPlacement,
}

const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const ARABIC_INDIC_DIGITS: [char; 10] = [
    '\u{0660}', '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}', '\u{0666}', '\u{0667}',
    '\u{0668}', '\u{0669}',
];

impl Locale {
    fn preset(
        identifier: &str,
        fraction_separator: char,
        grouping_separator: char,
        currency_placement: CurrencyPlacement,
    ) -> Self {
        Self {
            identifier: identifier.to_owned(),
            digits: ASCII_DIGITS,
            fraction_separator,
            grouping_separator,
            minus_sign: '-',
            plus_sign: '+',
            currency_placement,
        }
    }

    /// English (United States): `-1,234.5`.
    #[must_use]
    pub fn en_us() -> Self {
        Self::preset("en_US", '.', ',', CurrencyPlacement::Prefix)
    }

    /// English (United Kingdom): `-1,234.5`.
    #[must_use]
    pub fn en_gb() -> Self {
        Self::preset("en_GB", '.', ',', CurrencyPlacement::Prefix)
    }

    /// German (Germany): `-1.234,5`.
    #[must_use]
    pub fn de_de() -> Self {
        Self::preset("de_DE", ',', '.', CurrencyPlacement::Suffix)
    }

    /// French (France): `-1 234,5` with a narrow no-break space.
    #[must_use]
    pub fn fr_fr() -> Self {
        Self::preset("fr_FR", ',', '\u{202F}', CurrencyPlacement::Suffix)
    }

    /// Swedish (Sweden): `−1 234,5` with a no-break space and U+2212 minus.
    #[must_use]
    pub fn sv_se() -> Self {
        Self::preset("sv_SE", ',', '\u{00A0}', CurrencyPlacement::Suffix).with_minus_sign('\u{2212}')
    }

    /// Arabic (Egypt): Arabic-Indic digits and separators.
    #[must_use]
    pub fn ar_eg() -> Self {
        Self::preset("ar_EG", '\u{066B}', '\u{066C}', CurrencyPlacement::Suffix)
            .with_digits(ARABIC_INDIC_DIGITS)
    }

    /// Every built-in preset.
    #[must_use]
    pub fn presets() -> Vec<Self> {
        vec![
            Self::en_us(),
            Self::en_gb(),
            Self::de_de(),
            Self::fr_fr(),
            Self::sv_se(),
            Self::ar_eg(),
        ]
    }

    /// Look up a preset by identifier (`en_US`, `en-us`, ...).
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let wanted = identifier.replace('-', "_");
        Self::presets()
            .into_iter()
            .find(|locale| locale.identifier.eq_ignore_ascii_case(&wanted))
    }

    // --- Builder methods ---

    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    #[must_use]
    pub fn with_digits(mut self, digits: [char; 10]) -> Self {
        self.digits = digits;
        self
    }

    #[must_use]
    pub fn with_fraction_separator(mut self, separator: char) -> Self {
        self.fraction_separator = separator;
        self
    }

    #[must_use]
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    #[must_use]
    pub fn with_minus_sign(mut self, sign: char) -> Self {
        self.minus_sign = sign;
        self
    }

    #[must_use]
    pub fn with_plus_sign(mut self, sign: char) -> Self {
        self.plus_sign = sign;
        self
    }

    #[must_use]
    pub fn with_currency_placement(mut self, placement: CurrencyPlacement) -> Self {
        self.currency_placement = placement;
        self
    }

    // --- Accessors ---

    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[char; 10] {
        &self.digits
    }

    #[inline]
    #[must_use]
    pub fn fraction_separator(&self) -> char {
        self.fraction_separator
    }

    #[inline]
    #[must_use]
    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    #[inline]
    #[must_use]
    pub fn minus_sign(&self) -> char {
        self.minus_sign
    }

    #[inline]
    #[must_use]
    pub fn plus_sign(&self) -> char {
        self.plus_sign
    }

    #[inline]
    #[must_use]
    pub fn currency_placement(&self) -> CurrencyPlacement {
        self.currency_placement
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_and_dash_insensitive() {
        assert_eq!(Locale::from_identifier("en-us"), Some(Locale::en_us()));
        assert_eq!(Locale::from_identifier("SV_se"), Some(Locale::sv_se()));
        assert_eq!(Locale::from_identifier("xx_YY"), None);
    }

    #[test]
    fn presets_have_distinct_separators() {
        for locale in Locale::presets() {
            assert_ne!(
                locale.fraction_separator(),
                locale.grouping_separator(),
                "{}",
                locale.identifier()
            );
        }
    }

    #[test]
    fn builder_overrides_fields() {
        let locale = Locale::en_us()
            .with_identifier("custom")
            .with_grouping_separator('\'');
        assert_eq!(locale.identifier(), "custom");
        assert_eq!(locale.grouping_separator(), '\'');
        assert_eq!(locale.fraction_separator(), '.');
    }
}
