#![forbid(unsafe_code)]

//! Character ↔ component tables derived from a [`Locale`].
//!
//! A lexicon is a pure function of its locale and is never mutated after
//! construction, so one instance can be shared read-only by any number of
//! styles.

use rustc_hash::FxHashMap;

use crate::component::{Component, Digit, Sign};
use crate::locale::Locale;

/// Bidirectional lookup between characters and number components.
#[derive(Debug, Clone)]
pub struct Lexicon {
    locale: Locale,
    components: FxHashMap<char, Component>,
}

impl Lexicon {
    /// Derive the tables for `locale`.
    ///
    /// Besides the locale's own characters, ASCII digits and the ASCII
    /// `-`/`+` signs are always understood.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        let mut components = FxHashMap::default();
        components.insert('-', Component::Sign(Sign::Negative));
        components.insert('+', Component::Sign(Sign::Positive));
        for value in 0..10u8 {
            if let Some(digit) = Digit::new(value) {
                components.insert(digit.ascii(), Component::Digit(digit));
            }
        }
        for (value, character) in (0u8..).zip(locale.digits().iter().copied()) {
            if let Some(digit) = Digit::new(value) {
                components.insert(character, Component::Digit(digit));
            }
        }
        components.insert(locale.minus_sign(), Component::Sign(Sign::Negative));
        components.insert(locale.plus_sign(), Component::Sign(Sign::Positive));
        components.insert(locale.grouping_separator(), Component::GroupingSeparator);
        components.insert(locale.fraction_separator(), Component::FractionSeparator);
        tracing::trace!(
            locale = locale.identifier(),
            components = components.len(),
            "lexicon built"
        );
        Self { locale, components }
    }

    /// The ASCII lexicon: `-1234.5`.
    #[must_use]
    pub fn ascii() -> Self {
        Self::new(Locale::en_us().with_identifier("ascii"))
    }

    #[inline]
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Meaning of `character`, if any.
    #[inline]
    #[must_use]
    pub fn component(&self, character: char) -> Option<Component> {
        self.components.get(&character).copied()
    }

    /// Localized character for a digit.
    #[inline]
    #[must_use]
    pub fn digit(&self, digit: Digit) -> char {
        self.locale.digits()[usize::from(digit.value())]
    }

    /// Localized character for a sign.
    #[inline]
    #[must_use]
    pub fn sign(&self, sign: Sign) -> char {
        match sign {
            Sign::Positive => self.locale.plus_sign(),
            Sign::Negative => self.locale.minus_sign(),
        }
    }

    #[inline]
    #[must_use]
    pub fn fraction_separator(&self) -> char {
        self.locale.fraction_separator()
    }

    #[inline]
    #[must_use]
    pub fn grouping_separator(&self) -> char {
        self.locale.grouping_separator()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_characters_are_always_understood() {
        let lexicon = Lexicon::new(Locale::ar_eg());
        assert_eq!(
            lexicon.component('5'),
            Digit::new(5).map(Component::Digit)
        );
        assert_eq!(
            lexicon.component('\u{0665}'),
            Digit::new(5).map(Component::Digit)
        );
        assert_eq!(lexicon.component('-'), Some(Component::Sign(Sign::Negative)));
    }

    #[test]
    fn localized_separators_win() {
        let lexicon = Lexicon::new(Locale::de_de());
        assert_eq!(lexicon.component(','), Some(Component::FractionSeparator));
        assert_eq!(lexicon.component('.'), Some(Component::GroupingSeparator));
        assert_eq!(lexicon.component('x'), None);
    }

    #[test]
    fn localized_minus() {
        let lexicon = Lexicon::new(Locale::sv_se());
        assert_eq!(lexicon.sign(Sign::Negative), '\u{2212}');
        assert_eq!(
            lexicon.component('\u{2212}'),
            Some(Component::Sign(Sign::Negative))
        );
    }

    #[test]
    fn digits_render_localized() {
        let lexicon = Lexicon::new(Locale::ar_eg());
        assert_eq!(Digit::new(3).map(|d| lexicon.digit(d)), Some('\u{0663}'));
    }
}
