#![forbid(unsafe_code)]

//! Keystroke translation for number fields.
//!
//! Users type ASCII on most keyboards regardless of the field's locale. The
//! reader rewrites a replacement into the locale's characters before it is
//! merged, and recognizes a lone sign as a command rather than as text.

use crate::component::{Component, Sign};
use crate::lexicon::Lexicon;

/// Translates replacements typed into a number field.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Reader<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// The sign requested by a replacement made of one sign character.
    #[must_use]
    pub fn sign_command(&self, replacement: &str) -> Option<Sign> {
        let mut characters = replacement.chars();
        let character = characters.next()?;
        if characters.next().is_some() {
            return None;
        }
        match self.lexicon.component(character) {
            Some(Component::Sign(sign)) => Some(sign),
            _ => None,
        }
    }

    /// Localize digits and signs.
    ///
    /// A single `.`, `,` or locale separator becomes the fraction separator,
    /// so either key starts a fraction. Longer replacements keep their
    /// separators, since pasted text already carries grouping.
    #[must_use]
    pub fn translate(&self, replacement: &str) -> String {
        let mut characters = replacement.chars();
        if let (Some(character), None) = (characters.next(), characters.next()) {
            let locale = self.lexicon.locale();
            if matches!(character, '.' | ',')
                || character == locale.fraction_separator()
                || character == locale.grouping_separator()
            {
                return self.lexicon.fraction_separator().to_string();
            }
        }

        replacement
            .chars()
            .map(|character| match self.lexicon.component(character) {
                Some(Component::Digit(digit)) => self.lexicon.digit(digit),
                Some(Component::Sign(sign)) => self.lexicon.sign(sign),
                _ => character,
            })
            .collect()
    }
}
