#![forbid(unsafe_code)]

//! Numeric value types a number field can edit.

use std::fmt;

/// A value type with a lossless decimal representation.
///
/// `PRECISION` is the number of decimal digits the type can hold: the digit
/// count of `MAX` for integers, and the guaranteed round-trip digits for
/// floats. `MIN`/`MAX` are the default bounds; for floats they are the
/// largest magnitudes with `PRECISION` digits.
pub trait NumberValue:
    Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;
    const PRECISION: usize;
    /// Whether the type has no fraction digits.
    const INTEGER: bool;

    /// Parse canonical ASCII (`-12.5`). `None` when unrepresentable.
    fn from_ascii(text: &str) -> Option<Self>;

    /// Write canonical ASCII with at most `fraction` fraction digits.
    fn to_ascii(self, fraction: usize) -> String;

    /// Whether the value is NaN; never true for integers.
    fn is_nan(self) -> bool {
        false
    }
}

const fn digits(mut value: u128) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

macro_rules! integer_value {
    ($($ty:ty),* $(,)?) => {$(
        impl NumberValue for $ty {
            const ZERO: Self = 0;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const PRECISION: usize = digits(<$ty>::MAX as u128);
            const INTEGER: bool = true;

            fn from_ascii(text: &str) -> Option<Self> {
                let magnitude = text.strip_prefix('-').unwrap_or(text);
                if !magnitude.is_empty() && magnitude.bytes().all(|b| b == b'0') {
                    return Some(0);
                }
                text.parse().ok()
            }

            fn to_ascii(self, _fraction: usize) -> String {
                self.to_string()
            }
        }
    )*};
}

integer_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_value {
    ($($ty:ty => $precision:expr, $limit:expr);* $(;)?) => {$(
        impl NumberValue for $ty {
            const ZERO: Self = 0.0;
            const MIN: Self = -$limit;
            const MAX: Self = $limit;
            const PRECISION: usize = $precision;
            const INTEGER: bool = false;

            fn from_ascii(text: &str) -> Option<Self> {
                text.parse::<$ty>().ok().filter(|value| value.is_finite())
            }

            fn to_ascii(self, fraction: usize) -> String {
                if self.is_finite() {
                    format!("{:.*}", fraction, self)
                } else {
                    String::from("0")
                }
            }

            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
        }
    )*};
}

float_value! {
    f32 => 7, 9_999_999.0;
    f64 => 15, 999_999_999_999_999.0;
}
