#![forbid(unsafe_code)]

//! Caret validity and autocorrection.
//!
//! A caret sits on a boundary between two symbols. Whether it may rest there
//! depends only on the attributes of its two neighbors, exposed as a
//! [`Peek`]. Field edges count as passthrough neighbors, so a caret prefers
//! to sit next to real content and only falls back to an edge when the
//! whole snapshot is decoration.
//!
//! # Invariants
//!
//! 1. A corrected caret is never further than `len` boundaries from the
//!    proposed one; the search is O(n) worst case and O(1) for the short
//!    passthrough runs formatters actually produce.
//! 2. The result is deterministic for a given snapshot, caret, bound and
//!    intent.
//! 3. A snapshot with at least one non-passthrough symbol always yields a
//!    caret that is not surrounded by passthrough symbols.

use crate::attribute::Attribute;
use crate::snapshot::Snapshot;

/// Direction of caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forwards,
    Backwards,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forwards => Self::Backwards,
            Self::Backwards => Self::Forwards,
        }
    }
}

/// Which role a caret plays in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// A collapsed selection.
    Single,
    /// The lower bound of a non-empty selection.
    Lower,
    /// The upper bound of a non-empty selection.
    Upper,
}

impl Bound {
    /// Search direction used when the caller expresses no intent.
    #[must_use]
    pub const fn preference(self) -> Direction {
        match self {
            Self::Single | Self::Upper => Direction::Backwards,
            Self::Lower => Direction::Forwards,
        }
    }
}

/// Explicit movement direction per selection bound (arrow keys, drags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Intent {
    pub lower: Option<Direction>,
    pub upper: Option<Direction>,
}

impl Intent {
    /// No intent: every bound uses its default preference.
    pub const NONE: Self = Self {
        lower: None,
        upper: None,
    };

    /// The same direction for both bounds.
    #[must_use]
    pub const fn both(direction: Direction) -> Self {
        Self {
            lower: Some(direction),
            upper: Some(direction),
        }
    }
}

impl From<Option<Direction>> for Intent {
    fn from(direction: Option<Direction>) -> Self {
        Self {
            lower: direction,
            upper: direction,
        }
    }
}

/// Attributes on both sides of a caret; `None` at the snapshot edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Peek {
    pub lhs: Option<Attribute>,
    pub rhs: Option<Attribute>,
}

impl Peek {
    /// Whether the symbol before the caret is passthrough (or absent).
    #[inline]
    #[must_use]
    pub fn lhs_is_passthrough(&self) -> bool {
        self.lhs.is_none_or(Attribute::is_passthrough)
    }

    /// Whether the symbol after the caret is passthrough (or absent).
    #[inline]
    #[must_use]
    pub fn rhs_is_passthrough(&self) -> bool {
        self.rhs.is_none_or(Attribute::is_passthrough)
    }

    /// Whether a caret with the given role may rest here.
    #[must_use]
    pub fn is_valid(&self, bound: Bound) -> bool {
        match bound {
            Bound::Single | Bound::Lower => {
                !(self.lhs_is_passthrough() && self.rhs_is_passthrough())
            }
            Bound::Upper => !self.lhs_is_passthrough(),
        }
    }
}

/// Whether `caret` is a valid resting place for `bound` in `snapshot`.
#[must_use]
pub fn is_valid(snapshot: &Snapshot, caret: usize, bound: Bound) -> bool {
    snapshot.peek(caret).is_valid(bound)
}

/// Move `caret` to the nearest valid boundary.
///
/// The search walks in the intent direction (or the bound's preference),
/// then in the opposite direction from the original caret, and finally
/// falls back to the nearest edge of the snapshot.
#[must_use]
pub fn autocorrect(
    snapshot: &Snapshot,
    caret: usize,
    bound: Bound,
    intent: Option<Direction>,
) -> usize {
    let caret = caret.min(snapshot.len());
    if is_valid(snapshot, caret, bound) {
        return caret;
    }

    let direction = intent.unwrap_or(bound.preference());
    if let Some(found) = walk(snapshot, caret, bound, direction) {
        return found;
    }
    if let Some(found) = walk(snapshot, caret, bound, direction.reversed()) {
        return found;
    }

    nearest_edge(snapshot, caret)
}

fn walk(snapshot: &Snapshot, caret: usize, bound: Bound, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Forwards => {
            (caret.saturating_add(1)..=snapshot.len()).find(|&c| is_valid(snapshot, c, bound))
        }
        Direction::Backwards => (0..caret).rev().find(|&c| is_valid(snapshot, c, bound)),
    }
}

fn nearest_edge(snapshot: &Snapshot, caret: usize) -> usize {
    let len = snapshot.len();
    if caret <= len - caret { 0 } else { len }
}
