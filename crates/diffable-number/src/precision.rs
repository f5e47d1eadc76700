#![forbid(unsafe_code)]

//! Digit-count limits.
//!
//! Two policies exist and they are kept apart:
//!
//! - [`Precision::digits`] limits integer and fraction digits separately.
//! - [`Precision::significant`] limits the total of significant digits,
//!   leaving the split between integer and fraction open.
//!
//! Both are clamped to what the value type stores losslessly
//! ([`NumberValue::PRECISION`]), and integer types never get fraction digits.
//!
//! # Capacity
//!
//! [`Precision::capacity`] subtracts a number's digit counts from the upper
//! limits. Going below zero is an error, which is how one digit too many is
//! caught before anything is formatted.
//!
//! ```
//! use diffable_number::{Number, Part, Precision, PrecisionError};
//!
//! let precision = Precision::<f64>::digits(1..=3, 0..=2);
//! let number = Number::parse_ascii("123.4").unwrap();
//! assert_eq!(precision.capacity(&number).unwrap().fraction, 1);
//!
//! let number = Number::parse_ascii("1234").unwrap();
//! assert_eq!(
//!     precision.capacity(&number),
//!     Err(PrecisionError::Excess { part: Part::Integer, max: 3 }),
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::RangeInclusive;

use crate::bounds::Bounds;
use crate::component::Sign;
use crate::error::{Part, PrecisionError};
use crate::number::{Count, Number};
use crate::value::NumberValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Limits {
    lower: usize,
    upper: usize,
}

impl Limits {
    fn clamped(range: &RangeInclusive<usize>, min: usize, max: usize) -> Self {
        let (a, b) = (*range.start(), *range.end());
        let (lower, upper) = if b < a { (b, a) } else { (a, b) };
        let lower = lower.clamp(min, max);
        Self {
            lower,
            upper: upper.clamp(lower, max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Kind {
    Digits { integer: Limits, fraction: Limits },
    Significant(Limits),
}

/// Digit limits for values of type `V`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct Precision<V> {
    kind: Kind,
    #[cfg_attr(feature = "serde", serde(skip))]
    value: PhantomData<fn() -> V>,
}

impl<V: NumberValue> Precision<V> {
    const fn fraction_max() -> usize {
        if V::INTEGER { 0 } else { V::PRECISION }
    }

    /// Separate integer and fraction limits.
    ///
    /// Integer digits are clamped to `1...PRECISION`, fraction digits to
    /// `0...PRECISION` (zero for integer types), and the lower limits are
    /// shrunk until they fit `PRECISION` together.
    #[must_use]
    pub fn digits(integer: RangeInclusive<usize>, fraction: RangeInclusive<usize>) -> Self {
        let integer = Limits::clamped(&integer, 1, V::PRECISION);
        let mut fraction = Limits::clamped(&fraction, 0, Self::fraction_max());
        fraction.lower = fraction.lower.min(V::PRECISION - integer.lower);
        fraction.upper = fraction.upper.max(fraction.lower);
        Self::from_kind(Kind::Digits { integer, fraction })
    }

    /// Integer limits with default fraction limits.
    #[must_use]
    pub fn integer(integer: RangeInclusive<usize>) -> Self {
        Self::digits(integer, 0..=Self::fraction_max())
    }

    /// Fraction limits with default integer limits.
    #[must_use]
    pub fn fraction(fraction: RangeInclusive<usize>) -> Self {
        Self::digits(1..=V::PRECISION, fraction)
    }

    /// A limit on significant digits, clamped to `1...PRECISION`.
    #[must_use]
    pub fn significant(significant: RangeInclusive<usize>) -> Self {
        Self::from_kind(Kind::Significant(Limits::clamped(
            &significant,
            1,
            V::PRECISION,
        )))
    }

    const fn from_kind(kind: Kind) -> Self {
        Self {
            kind,
            value: PhantomData,
        }
    }

    /// Whether this precision limits significant digits.
    #[inline]
    #[must_use]
    pub fn is_significant(&self) -> bool {
        matches!(self.kind, Kind::Significant(_))
    }

    /// Maximum digits per part.
    #[must_use]
    pub fn upper(&self) -> Count {
        match self.kind {
            Kind::Digits { integer, fraction } => Count {
                integer: integer.upper,
                fraction: fraction.upper,
                significant: V::PRECISION,
            },
            Kind::Significant(significant) => Count {
                integer: V::PRECISION,
                fraction: Self::fraction_max(),
                significant: significant.upper,
            },
        }
    }

    /// Minimum digits per part when a value is formatted.
    #[must_use]
    pub fn lower(&self) -> Count {
        match self.kind {
            Kind::Digits { integer, fraction } => Count {
                integer: integer.lower,
                fraction: fraction.lower,
                significant: 1,
            },
            Kind::Significant(significant) => Count {
                integer: 1,
                fraction: 0,
                significant: significant.lower,
            },
        }
    }

    /// Digits still available after `number`'s digits are counted.
    pub fn capacity(&self, number: &Number) -> Result<Count, PrecisionError> {
        let upper = self.upper();
        let count = number.count();
        let remaining = |part, max: usize, used: usize| {
            max.checked_sub(used)
                .ok_or(PrecisionError::Excess { part, max })
        };
        Ok(Count {
            integer: remaining(Part::Integer, upper.integer, count.integer)?,
            fraction: remaining(Part::Fraction, upper.fraction, count.fraction)?,
            significant: remaining(Part::Significant, upper.significant, count.significant)?,
        })
    }

    /// Largest magnitudes that fit these limits, as bounds.
    ///
    /// `digits(1..=3, 0..=2)` gives `-999.99...999.99`; `significant(1..=3)`
    /// gives `-999...999`. Limits wider than the type fall back to its range.
    #[must_use]
    pub fn limits(&self) -> Bounds<V> {
        let (integer, fraction) = match self.kind {
            Kind::Digits { integer, fraction } => (
                integer.upper,
                fraction
                    .upper
                    .min(V::PRECISION.saturating_sub(integer.upper)),
            ),
            Kind::Significant(significant) => (significant.upper, 0),
        };
        let mut nines = "9".repeat(integer);
        if fraction > 0 {
            nines.push('.');
            nines.push_str(&"9".repeat(fraction));
        }
        let max = V::from_ascii(&nines).unwrap_or(V::MAX);
        let min = V::from_ascii(&format!("-{nines}")).unwrap_or(V::MIN);
        Bounds::new(min, max)
    }

    /// Format `value` as a number within these limits.
    ///
    /// Fraction digits are rounded to what the upper limits leave after the
    /// integer digits, trailing zeros are trimmed down to the lower limit,
    /// and zero loses its sign. Values outside [`limits`](Self::limits)
    /// keep their integer digits; clamp them first.
    #[must_use]
    pub fn round(&self, value: V) -> Number {
        let integer = ascii_number(value, 0).count().significant;
        let fraction = match self.kind {
            Kind::Digits { fraction, .. } => fraction
                .upper
                .min(V::PRECISION.saturating_sub(integer)),
            Kind::Significant(significant) => significant
                .upper
                .saturating_sub(integer)
                .min(Self::fraction_max()),
        };

        let lower = self.lower();
        let mut number = ascii_number(value, fraction);
        number.trim_fraction(lower.fraction);
        number.pad_fraction(lower.fraction);
        number.pad_integer(lower.integer);
        if number.is_zero() {
            number.sign = None;
        } else if number.sign == Some(Sign::Positive) {
            number.sign = None;
        }
        number
    }
}

fn ascii_number<V: NumberValue>(value: V, fraction: usize) -> Number {
    Number::parse_ascii(&value.to_ascii(fraction)).unwrap_or_default()
}

impl<V: NumberValue> Default for Precision<V> {
    fn default() -> Self {
        Self::digits(1..=V::PRECISION, 0..=Self::fraction_max())
    }
}

impl<V> Clone for Precision<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Precision<V> {}

impl<V> PartialEq for Precision<V> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<V> Eq for Precision<V> {}

impl<V> fmt::Debug for Precision<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Digits { integer, fraction } => f
                .debug_struct("Precision")
                .field("integer", &(integer.lower..=integer.upper))
                .field("fraction", &(fraction.lower..=fraction.upper))
                .finish(),
            Kind::Significant(significant) => f
                .debug_struct("Precision")
                .field("significant", &(significant.lower..=significant.upper))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> Number {
        Number::parse_ascii(text).unwrap()
    }

    #[test]
    fn limits_are_clamped_to_the_type() {
        let precision = Precision::<i32>::digits(0..=99, 2..=5);
        assert_eq!(
            precision.upper(),
            Count { integer: 10, fraction: 0, significant: 10 }
        );
        assert_eq!(precision.lower().integer, 1);
        assert_eq!(precision.lower().fraction, 0);
    }

    #[test]
    fn lower_limits_fit_together() {
        let precision = Precision::<f64>::digits(10..=15, 10..=15);
        let lower = precision.lower();
        assert!(lower.integer + lower.fraction <= 15);
    }

    #[test]
    fn default_uses_full_precision() {
        let precision = Precision::<f64>::default();
        assert_eq!(
            precision.upper(),
            Count { integer: 15, fraction: 15, significant: 15 }
        );
        assert_eq!(Precision::<u8>::default().upper().fraction, 0);
    }

    #[test]
    fn capacity_classifies_excess() {
        let precision = Precision::<f64>::digits(1..=3, 0..=2);
        assert_eq!(
            precision.capacity(&number("123.456")),
            Err(PrecisionError::Excess { part: Part::Fraction, max: 2 })
        );
        let capacity = precision.capacity(&number("12.5")).unwrap();
        assert_eq!((capacity.integer, capacity.fraction), (1, 1));

        let significant = Precision::<f64>::significant(1..=4);
        assert_eq!(
            significant.capacity(&number("12.345")),
            Err(PrecisionError::Excess { part: Part::Significant, max: 4 })
        );
        assert!(significant.capacity(&number("0.001")).is_ok());
    }

    #[test]
    fn rounds_digit_limits() {
        let precision = Precision::<f64>::digits(1..=3, 0..=2);
        assert_eq!(precision.round(12.346).to_string(), "12.35");
        assert_eq!(precision.round(12.5).to_string(), "12.5");
        assert_eq!(precision.round(12.0).to_string(), "12");

        let padded = Precision::<f64>::digits(2..=3, 2..=2);
        assert_eq!(padded.round(1.5).to_string(), "01.50");
    }

    #[test]
    fn rounds_significant_limits() {
        let precision = Precision::<f64>::significant(1..=3);
        assert_eq!(precision.round(1.23456).to_string(), "1.23");
        assert_eq!(precision.round(123.456).to_string(), "123");
    }

    #[test]
    fn limits_follow_the_upper_digits() {
        let digits = Precision::<f64>::digits(1..=3, 0..=2).limits();
        assert_eq!((digits.min(), digits.max()), (-999.99, 999.99));

        let significant = Precision::<f64>::significant(1..=3).limits();
        assert_eq!((significant.min(), significant.max()), (-999.0, 999.0));

        let integer = Precision::<i32>::integer(1..=2).limits();
        assert_eq!((integer.min(), integer.max()), (-99, 99));
        assert_eq!(Precision::<i8>::default().limits(), Bounds::default());
        assert_eq!(Precision::<u8>::integer(1..=2).limits().min(), 0);
    }

    #[test]
    fn clamped_values_round_within_capacity() {
        let precision = Precision::<f64>::digits(1..=3, 0..=2);
        for value in [999.999, 999.995, 12345.0, -54321.5] {
            let rounded = precision.round(precision.limits().clamp(value));
            assert!(precision.capacity(&rounded).is_ok(), "{value} -> {rounded}");
        }

        let significant = Precision::<f64>::significant(1..=3);
        for value in [998.7, 99.96, 9.996, 1e9] {
            let rounded = significant.round(significant.limits().clamp(value));
            assert!(significant.capacity(&rounded).is_ok(), "{value} -> {rounded}");
        }
    }

    #[test]
    fn fraction_yields_to_total_precision() {
        let precision = Precision::<f64>::fraction(0..=2);
        let rounded = precision.round(12_345_678_901_234.56);
        assert_eq!(rounded.count().fraction, 1);
        assert!(precision.capacity(&rounded).is_ok());
    }

    #[test]
    fn zero_loses_its_sign() {
        let precision = Precision::<f64>::digits(1..=3, 0..=1);
        let rounded = precision.round(-0.01);
        assert_eq!(rounded.sign, None);
        assert_eq!(rounded.to_string(), "0");
    }
}
