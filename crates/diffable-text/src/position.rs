#![forbid(unsafe_code)]

//! Translation between snapshot carets and platform text offsets.
//!
//! Platform text controls report selections in their own units (UTF-16 code
//! units on most toolkits). [`Positions`] precomputes cumulative unit sizes
//! for one snapshot, plus the reverse index, so both directions are O(1)
//! lookups after an O(n) build.
//!
//! # Invariants
//!
//! 1. **Monotonicity**: offsets increase strictly with carets.
//! 2. **Round-trip**: `caret → offset → caret` is the identity.
//! 3. **Boundary snapping**: an offset inside a multi-unit character maps to
//!    the caret before that character.
//!
//! ```
//! use diffable_text::{Encoding, Positions, Snapshot};
//!
//! let snapshot = Snapshot::content("a😀b");
//! let positions = Positions::new(&snapshot, Encoding::Utf16);
//! assert_eq!(positions.offset(2), 3);
//! assert_eq!(positions.caret(3), 2);
//! assert_eq!(positions.caret(2), 1); // inside the surrogate pair
//! ```

use std::ops::Range;

use crate::snapshot::Snapshot;

/// Unit in which offsets are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// UTF-8 bytes.
    Utf8,
    /// UTF-16 code units.
    #[default]
    Utf16,
    /// One unit per symbol.
    Character,
}

impl Encoding {
    /// Number of units `character` occupies.
    #[inline]
    #[must_use]
    pub fn size(self, character: char) -> usize {
        match self {
            Self::Utf8 => character.len_utf8(),
            Self::Utf16 => character.len_utf16(),
            Self::Character => 1,
        }
    }

    /// Number of units in `text`.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Utf8 => text.len(),
            Self::Utf16 => text.encode_utf16().count(),
            Self::Character => text.chars().count(),
        }
    }
}

/// Precomputed caret ↔ offset table for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positions {
    /// `offsets[caret]` is the offset of `caret`; `len + 1` entries.
    offsets: Vec<usize>,
    /// `carets[offset]` is the caret at or before `offset`; `end + 1` entries.
    carets: Vec<usize>,
    encoding: Encoding,
}

impl Positions {
    /// Build the table for `snapshot`.
    #[must_use]
    pub fn new(snapshot: &Snapshot, encoding: Encoding) -> Self {
        let mut offsets = Vec::with_capacity(snapshot.len() + 1);
        let mut carets = Vec::with_capacity(snapshot.len() + 1);
        let mut total = 0usize;
        offsets.push(total);
        for (caret, symbol) in snapshot.into_iter().enumerate() {
            let size = encoding.size(symbol.character);
            carets.extend(std::iter::repeat_n(caret, size));
            total += size;
            offsets.push(total);
        }
        carets.push(snapshot.len());
        Self {
            offsets,
            carets,
            encoding,
        }
    }

    #[inline]
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Total length of the snapshot in offset units.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// Offset of a caret. Carets past the end clamp to the end.
    #[must_use]
    pub fn offset(&self, caret: usize) -> usize {
        let caret = caret.min(self.offsets.len() - 1);
        self.offsets[caret]
    }

    /// Caret at or before an offset. Offsets past the end clamp to the end.
    #[must_use]
    pub fn caret(&self, offset: usize) -> usize {
        self.carets[offset.min(self.carets.len() - 1)]
    }

    /// Translate an offset range to a caret range.
    #[must_use]
    pub fn carets(&self, offsets: Range<usize>) -> Range<usize> {
        let start = self.caret(offsets.start);
        let end = self.caret(offsets.end).max(start);
        start..end
    }

    /// Translate a caret range to an offset range.
    #[must_use]
    pub fn offsets(&self, carets: Range<usize>) -> Range<usize> {
        let start = self.offset(carets.start);
        let end = self.offset(carets.end).max(start);
        start..end
    }
}
