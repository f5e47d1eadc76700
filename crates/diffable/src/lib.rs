#![forbid(unsafe_code)]

//! As-you-type formatting for text fields.
//!
//! # Role in diffable
//! This is the facade crate. A [`DiffableTextStyle`] turns values into
//! attributed [`Snapshot`]s and validates every keystroke as a [`Proposal`].
//! A [`Context`] owns one field's style, value and selection, and applies
//! accepted edits while keeping the caret next to the same content.
//!
//! ```
//! use diffable::prelude::*;
//!
//! let style = NumberTextStyle::<f64>::new(Locale::en_us())
//!     .with_bounds(Bounds::from(0.0..=999.0))
//!     .with_precision(Precision::digits(1..=3, 0..=2));
//! let mut context = Context::new(style, 7.0);
//! context.focus();
//! context.merge(1..1, ".").unwrap();
//! context.merge(2..2, "5").unwrap();
//! assert_eq!(context.text(), "7.5");
//! assert_eq!(*context.value(), 7.5);
//!
//! // One integer digit too many is declined and nothing changes.
//! assert!(context.merge(0..0, "123").is_err());
//! assert_eq!(context.text(), "7.5");
//! ```

pub mod cache;
pub mod context;
pub mod error;
pub mod number_style;
pub mod pattern_style;
pub mod proposal;
pub mod style;

pub use cache::{CacheStats, CurrencyLabel, Labels, StyleCache};
pub use context::Context;
pub use error::{Failure, PatternError, Result};
pub use number_style::NumberTextStyle;
pub use pattern_style::PatternTextStyle;
pub use proposal::Proposal;
pub use style::{Commit, DiffableTextStyle};

pub use diffable_number::{Bounds, Lexicon, Locale, NumberValue, Precision, Sign};
pub use diffable_text::{Attribute, Direction, Encoding, Field, Intent, Snapshot, Symbol};

pub use diffable_number as number;
pub use diffable_text as text;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Attribute, Bounds, Commit, Context, DiffableTextStyle, Direction, Encoding, Failure,
        Intent, Locale, NumberTextStyle, NumberValue, PatternTextStyle, Precision, Proposal,
        Result, Snapshot, StyleCache,
    };
    pub use crate::{number, text};
}
