#![forbid(unsafe_code)]

//! Numeric grammar for as-you-type number fields.
//!
//! # Role in diffable
//! `diffable-number` turns the content characters of a field into a
//! [`Number`] and decides whether that number may exist: its sign must fit
//! the [`Bounds`], its value must lie inside them, and its digit counts must
//! fit the [`Precision`]. Every check returns a typed error so a keystroke
//! that would produce an invalid number is declined before any formatting
//! happens.
//!
//! # How it fits in the system
//! The crate depends on nothing else in the workspace. Styles in `diffable`
//! combine it with `diffable-text` snapshots.

pub mod bounds;
pub mod component;
pub mod error;
pub mod lexicon;
pub mod locale;
pub mod number;
pub mod precision;
pub mod reader;
pub mod value;

pub use bounds::{Bounds, Location};
pub use component::{Component, Digit, Sign};
pub use error::{BoundsError, ParseError, Part, PrecisionError, SignError};
pub use lexicon::Lexicon;
pub use locale::{CurrencyPlacement, Locale};
pub use number::{Count, Number};
pub use precision::Precision;
pub use reader::Reader;
pub use value::NumberValue;
