#![forbid(unsafe_code)]

//! Edit rejection.
//!
//! A [`Failure`] means "do not apply this keystroke". It is returned by
//! [`DiffableTextStyle::merge`](crate::DiffableTextStyle::merge) and by
//! [`Context`](crate::Context) operations, and it never leaves a partial
//! change behind.
//!
//! Descriptions are diagnostic only. Release builds render every failure
//! as the same opaque marker; match on the variant or [`Failure::kind`]
//! instead of parsing text.

use std::fmt;

use diffable_number::{BoundsError, ParseError, PrecisionError, SignError};

// ── Pattern Errors ──────────────────────────────────────────────────────

/// Input a pattern cannot hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// More characters than the pattern has slots.
    #[error("pattern holds at most {max} characters")]
    Capacity { max: usize },
    /// A character rejected by its slot.
    #[error("{character:?} at index {index} does not fit its slot")]
    Invalid { character: char, index: usize },
}

// ── Unified Failure ─────────────────────────────────────────────────────

/// Why an edit was declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The content does not form a number.
    Parse(ParseError),
    /// The requested sign cannot occur within the bounds.
    Sign(SignError),
    /// The value lies outside the bounds.
    Bounds(BoundsError),
    /// Too many digits for the precision.
    Precision(PrecisionError),
    /// The input does not fit the pattern.
    Pattern(PatternError),
    /// The field is not focused.
    Inactive,
}

/// Standard result type for edits.
pub type Result<T> = std::result::Result<T, Failure>;

impl Failure {
    /// Failure label for tracing fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Sign(_) => "sign",
            Self::Bounds(_) => "bounds",
            Self::Precision(_) => "precision",
            Self::Pattern(PatternError::Capacity { .. }) => "pattern.capacity",
            Self::Pattern(PatternError::Invalid { .. }) => "pattern.invalid",
            Self::Inactive => "inactive",
        }
    }

    /// Full description regardless of build profile.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Parse(err) => format!("parse: {err}"),
            Self::Sign(err) => format!("sign: {err}"),
            Self::Bounds(err) => format!("bounds: {err}"),
            Self::Precision(err) => format!("precision: {err}"),
            Self::Pattern(err) => format!("pattern: {err}"),
            Self::Inactive => "field is not focused".to_string(),
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for Failure {
    #[cfg(debug_assertions)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }

    #[cfg(not(debug_assertions))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("edit rejected")
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Sign(err) => Some(err),
            Self::Bounds(err) => Some(err),
            Self::Precision(err) => Some(err),
            Self::Pattern(err) => Some(err),
            Self::Inactive => None,
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<ParseError> for Failure {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<SignError> for Failure {
    fn from(err: SignError) -> Self {
        Self::Sign(err)
    }
}

impl From<BoundsError> for Failure {
    fn from(err: BoundsError) -> Self {
        Self::Bounds(err)
    }
}

impl From<PrecisionError> for Failure {
    fn from(err: PrecisionError) -> Self {
        Self::Precision(err)
    }
}

impl From<PatternError> for Failure {
    fn from(err: PatternError) -> Self {
        Self::Pattern(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffable_number::Part;

    #[test]
    fn kinds_are_stable_labels() {
        let failure = Failure::from(PrecisionError::Excess {
            part: Part::Integer,
            max: 3,
        });
        assert_eq!(failure.kind(), "precision");
        assert_eq!(Failure::Inactive.kind(), "inactive");
        assert_eq!(
            Failure::from(PatternError::Capacity { max: 4 }).kind(),
            "pattern.capacity"
        );
    }

    #[test]
    fn describe_names_the_cause() {
        let failure = Failure::from(PrecisionError::Excess {
            part: Part::Integer,
            max: 3,
        });
        assert_eq!(
            failure.describe(),
            "precision: integer digits exceed the maximum of 3"
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_display_is_descriptive() {
        let failure = Failure::from(PatternError::Invalid {
            character: 'x',
            index: 2,
        });
        assert_eq!(failure.to_string(), failure.describe());
    }

    #[test]
    fn pattern_errors_describe_the_slot() {
        assert_eq!(
            PatternError::Capacity { max: 4 }.to_string(),
            "pattern holds at most 4 characters"
        );
        assert_eq!(
            PatternError::Invalid { character: 'x', index: 2 }.to_string(),
            "'x' at index 2 does not fit its slot"
        );
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn release_display_is_opaque() {
        assert_eq!(Failure::Inactive.to_string(), "edit rejected");
    }

    #[test]
    fn source_chains_to_the_layer_error() {
        use std::error::Error as _;
        let failure = Failure::from(ParseError::DuplicateSeparator { index: 3 });
        assert!(failure.source().is_some());
        assert!(Failure::Inactive.source().is_none());
    }
}
