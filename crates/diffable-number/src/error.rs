#![forbid(unsafe_code)]

//! Rejection reasons raised while validating a number.
//!
//! Every error here describes a keystroke that must not be applied. None of
//! them is fatal; the caller keeps its previous state.

use std::fmt;

use thiserror::Error;

use crate::component::Sign;

/// The characters do not form a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character {character:?} at index {index}")]
    UnexpectedCharacter { character: char, index: usize },
    #[error("sign {character:?} at index {index} does not lead the number")]
    MisplacedSign { character: char, index: usize },
    #[error("second fraction separator at index {index}")]
    DuplicateSeparator { index: usize },
}

/// The requested sign cannot occur within the bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{sign} sign is impossible within {min}...{max}")]
pub struct SignError {
    pub sign: Sign,
    pub min: String,
    pub max: String,
}

/// The value lies outside the bounds or outside its type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("{value} is outside {min}...{max}")]
    OutOfBounds {
        value: String,
        min: String,
        max: String,
    },
    #[error("{text} is not representable")]
    Unrepresentable { text: String },
}

/// Which digit count overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Integer,
    Fraction,
    Significant,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Fraction => "fraction",
            Self::Significant => "significant",
        })
    }
}

/// The number has more digits than the precision allows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecisionError {
    #[error("{part} digits exceed the maximum of {max}")]
    Excess { part: Part, max: usize },
}
