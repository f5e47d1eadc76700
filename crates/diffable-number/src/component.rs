#![forbid(unsafe_code)]

//! Grammar atoms: signs, digits, separators.

use std::fmt;

/// Sign of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        })
    }
}

/// A decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < 10 { Some(Self(value)) } else { None }
    }

    /// Parse an ASCII digit.
    #[must_use]
    pub const fn from_ascii(character: char) -> Option<Self> {
        if character.is_ascii_digit() {
            Some(Self(character as u8 - b'0'))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn ascii(self) -> char {
        (b'0' + self.0) as char
    }
}

/// What a single localized character means to the number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Digit(Digit),
    Sign(Sign),
    /// Decimal separator between integer and fraction digits.
    FractionSeparator,
    /// Thousands separator; carries no meaning when parsing.
    GroupingSeparator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_from_ascii() {
        assert_eq!(Digit::from_ascii('7').map(Digit::value), Some(7));
        assert_eq!(Digit::from_ascii('x'), None);
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(3).map(Digit::ascii), Some('3'));
    }

    #[test]
    fn sign_toggles() {
        assert_eq!(Sign::Positive.toggled(), Sign::Negative);
        assert_eq!(Sign::Negative.toggled().toggled(), Sign::Negative);
    }
}
