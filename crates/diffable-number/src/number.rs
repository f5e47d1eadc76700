#![forbid(unsafe_code)]

//! The parsed number grammar.
//!
//! ```text
//! number   := sign? integer (separator fraction)?
//! integer  := digit*
//! fraction := digit*
//! ```
//!
//! A [`Number`] is rebuilt from a field's content characters on every
//! keystroke. Parsing normalizes redundant leading integer zeros, so `007`
//! becomes `7` and `.5` becomes `0.5`, but keeps everything the user can see
//! matter while typing: a trailing separator and trailing fraction zeros.

use std::fmt;

use smallvec::SmallVec;

use crate::component::{Component, Digit, Sign};
use crate::error::ParseError;
use crate::lexicon::Lexicon;

/// Digit storage; 20 digits covers every integer type without spilling.
pub type Digits = SmallVec<[Digit; 20]>;

/// A number as typed: sign, integer digits, separator, fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Number {
    pub sign: Option<Sign>,
    pub integer: Digits,
    pub separator: bool,
    pub fraction: Digits,
}

/// Digit counts of a number, or remaining capacity of a precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Count {
    pub integer: usize,
    pub fraction: usize,
    pub significant: usize,
}

impl Number {
    /// Parse localized content characters.
    ///
    /// Grouping separators are ignored wherever they appear. A sign is only
    /// accepted as the first component.
    pub fn parse(characters: &str, lexicon: &Lexicon) -> Result<Self, ParseError> {
        let mut number = Self::default();
        let mut seen_digit_or_separator = false;

        for (index, character) in characters.chars().enumerate() {
            match lexicon.component(character) {
                Some(Component::Digit(digit)) => {
                    seen_digit_or_separator = true;
                    if number.separator {
                        number.fraction.push(digit);
                    } else {
                        number.integer.push(digit);
                    }
                }
                Some(Component::Sign(sign)) => {
                    if seen_digit_or_separator || number.sign.is_some() {
                        return Err(ParseError::MisplacedSign { character, index });
                    }
                    number.sign = Some(sign);
                }
                Some(Component::FractionSeparator) => {
                    if number.separator {
                        return Err(ParseError::DuplicateSeparator { index });
                    }
                    seen_digit_or_separator = true;
                    number.separator = true;
                }
                Some(Component::GroupingSeparator) => {}
                None => return Err(ParseError::UnexpectedCharacter { character, index }),
            }
        }

        number.normalize();
        Ok(number)
    }

    /// Parse ASCII text such as `-12.50`.
    pub fn parse_ascii(text: &str) -> Result<Self, ParseError> {
        Self::parse(text, &Lexicon::ascii())
    }

    /// Trim redundant leading zeros; give a bare fraction a `0` integer.
    pub fn normalize(&mut self) {
        let leading = self.leading_zeros();
        let keep_one = leading > 0 && leading == self.integer.len();
        let trim = if keep_one { leading - 1 } else { leading };
        self.integer.drain(..trim);

        if self.integer.is_empty() && (self.separator || !self.fraction.is_empty()) {
            self.integer.push(Digit::ZERO);
        }
    }

    /// No digits and no separator; a sign alone still counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.integer.is_empty() && !self.separator && self.fraction.is_empty()
    }

    /// Every digit is zero (or there are none).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.integer.iter().chain(&self.fraction).all(|d| d.is_zero())
    }

    /// Digit counts, using leading/trailing zero trimming for significance.
    #[must_use]
    pub fn count(&self) -> Count {
        let leading = self.leading_zeros();
        let trailing = self.fraction.iter().rev().take_while(|d| d.is_zero()).count();
        Count {
            integer: self.integer.len(),
            fraction: self.fraction.len(),
            significant: self.integer.len() - leading + self.fraction.len() - trailing,
        }
    }

    /// Drop a trailing separator that can never be followed by a digit.
    ///
    /// `capacity` is what remains after this number's digits are counted.
    pub fn remove_impossible_separator(&mut self, capacity: Count) {
        if self.separator
            && self.fraction.is_empty()
            && (capacity.fraction == 0 || capacity.significant == 0)
        {
            self.separator = false;
        }
    }

    /// Drop a separator with nothing after it.
    pub fn remove_separator_as_suffix(&mut self) {
        if self.separator && self.fraction.is_empty() {
            self.separator = false;
        }
    }

    /// Strip trailing fraction zeros until `minimum` fraction digits remain.
    pub fn trim_fraction(&mut self, minimum: usize) {
        while self.fraction.len() > minimum && self.fraction.last().is_some_and(|d| d.is_zero())
        {
            self.fraction.pop();
        }
        if self.fraction.is_empty() && minimum == 0 {
            self.separator = false;
        }
    }

    /// Pad the fraction with zeros up to `minimum` digits.
    pub fn pad_fraction(&mut self, minimum: usize) {
        if minimum == 0 {
            return;
        }
        while self.fraction.len() < minimum {
            self.fraction.push(Digit::ZERO);
        }
        self.separator = true;
    }

    /// Pad the integer with leading zeros up to `minimum` digits.
    pub fn pad_integer(&mut self, minimum: usize) {
        let missing = minimum.saturating_sub(self.integer.len());
        self.integer
            .insert_many(0, std::iter::repeat_n(Digit::ZERO, missing));
    }

    /// Canonical ASCII form for value conversion: `-12.5`, `0`, `7`.
    ///
    /// A trailing separator is omitted and an empty integer reads as `0`.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut text = String::with_capacity(self.integer.len() + self.fraction.len() + 2);
        if self.sign == Some(Sign::Negative) {
            text.push('-');
        }
        if self.integer.is_empty() {
            text.push('0');
        }
        text.extend(self.integer.iter().map(|d| d.ascii()));
        if !self.fraction.is_empty() {
            text.push('.');
            text.extend(self.fraction.iter().map(|d| d.ascii()));
        }
        text
    }

    fn leading_zeros(&self) -> usize {
        self.integer.iter().take_while(|d| d.is_zero()).count()
    }
}

impl fmt::Display for Number {
    /// Writes the number as typed, including a trailing separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Some(Sign::Negative) => f.write_str("-")?,
            Some(Sign::Positive) => f.write_str("+")?,
            None => {}
        }
        for digit in &self.integer {
            fmt::Write::write_char(f, digit.ascii())?;
        }
        if self.separator {
            f.write_str(".")?;
        }
        for digit in &self.fraction {
            fmt::Write::write_char(f, digit.ascii())?;
        }
        Ok(())
    }
}
