#![forbid(unsafe_code)]

//! Inclusive value bounds.
//!
//! Bounds answer three questions for a number field:
//!
//! 1. Which signs can a value have? ([`autocorrect_sign`](Bounds::autocorrect_sign))
//! 2. Is a value allowed, and is it on an edge? ([`validate`](Bounds::validate))
//! 3. What is the nearest allowed value? ([`clamp`](Bounds::clamp))
//!
//! A value on an edge cannot grow further in magnitude, so a trailing
//! fraction separator is dropped there ([`autocorrect_edge`](Bounds::autocorrect_edge)).
//! When `min == max == 0` both signs are allowed and zero counts as an edge.

use std::ops::RangeInclusive;

use crate::component::Sign;
use crate::error::{BoundsError, SignError};
use crate::number::Number;
use crate::value::NumberValue;

/// Where a valid value sits within its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Strictly inside, or on a bound the value can still move away from.
    Body,
    /// On a bound that further digits would cross.
    Edge,
}

/// Inclusive `min...max` constraint. Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<V> {
    min: V,
    max: V,
}

impl<V: NumberValue> Bounds<V> {
    /// Create bounds, ordering the limits and clamping them to the type.
    #[must_use]
    pub fn new(a: V, b: V) -> Self {
        let (min, max) = if b < a { (b, a) } else { (a, b) };
        Self {
            min: clamp_to(min, V::MIN, V::MAX),
            max: clamp_to(max, V::MIN, V::MAX),
        }
    }

    /// `min...V::MAX`.
    #[must_use]
    pub fn at_least(min: V) -> Self {
        Self::new(min, V::MAX)
    }

    /// `V::MIN...max`.
    #[must_use]
    pub fn at_most(max: V) -> Self {
        Self::new(V::MIN, max)
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> V {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> V {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: V) -> bool {
        self.min <= value && value <= self.max
    }

    /// Nearest value inside the bounds; NaN becomes the clamped zero.
    #[must_use]
    pub fn clamp(&self, value: V) -> V {
        if value.is_nan() {
            return clamp_to(V::ZERO, self.min, self.max);
        }
        clamp_to(value, self.min, self.max)
    }

    /// Flip `sign` when no value of that sign fits the bounds.
    ///
    /// A missing sign reads as positive.
    pub fn autocorrect_sign(&self, sign: &mut Option<Sign>) {
        match sign.unwrap_or(Sign::Positive) {
            Sign::Positive => {
                if self.max <= V::ZERO && self.min != V::ZERO {
                    *sign = Some(Sign::Negative);
                }
            }
            Sign::Negative => {
                if self.min >= V::ZERO && self.max != V::ZERO {
                    *sign = Some(Sign::Positive);
                }
            }
        }
    }

    /// Fail when an explicitly requested sign cannot occur.
    pub fn validate_sign(&self, sign: Sign) -> Result<(), SignError> {
        let mut corrected = Some(sign);
        self.autocorrect_sign(&mut corrected);
        if corrected == Some(sign) {
            Ok(())
        } else {
            Err(SignError {
                sign,
                min: self.min.to_string(),
                max: self.max.to_string(),
            })
        }
    }

    /// Check `value` and classify its location.
    pub fn validate(&self, value: V) -> Result<Location, BoundsError> {
        if self.min < value && value < self.max {
            return Ok(Location::Body);
        }
        if value == self.max {
            return Ok(if value > V::ZERO || self.min == self.max {
                Location::Edge
            } else {
                Location::Body
            });
        }
        if value == self.min {
            return Ok(if value < V::ZERO || self.min == self.max {
                Location::Edge
            } else {
                Location::Body
            });
        }
        Err(BoundsError::OutOfBounds {
            value: value.to_string(),
            min: self.min.to_string(),
            max: self.max.to_string(),
        })
    }

    /// Block fraction entry on an edge by dropping a trailing separator.
    pub fn autocorrect_edge(number: &mut Number, location: Location) {
        if location == Location::Edge {
            number.remove_separator_as_suffix();
        }
    }
}

impl<V: NumberValue> Default for Bounds<V> {
    fn default() -> Self {
        Self::new(V::MIN, V::MAX)
    }
}

impl<V: NumberValue> From<RangeInclusive<V>> for Bounds<V> {
    fn from(range: RangeInclusive<V>) -> Self {
        let (min, max) = range.into_inner();
        Self::new(min, max)
    }
}

fn clamp_to<V: PartialOrd>(value: V, min: V, max: V) -> V {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
