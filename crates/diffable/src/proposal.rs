#![forbid(unsafe_code)]

//! A pending edit.

use std::ops::Range;

use diffable_text::{Attribute, Snapshot};

/// Replace `range` of `snapshot` with `replacement`, not yet applied.
///
/// The range is in carets (symbol indices), not platform offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal<'a> {
    snapshot: &'a Snapshot,
    start: usize,
    end: usize,
    replacement: &'a str,
}

impl<'a> Proposal<'a> {
    /// Create a proposal; the range is clamped to the snapshot.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot, range: Range<usize>, replacement: &'a str) -> Self {
        let end = range.end.min(snapshot.len());
        let start = range.start.min(end);
        Self {
            snapshot,
            start,
            end,
            replacement,
        }
    }

    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    #[must_use]
    pub fn replacement(&self) -> &'a str {
        self.replacement
    }

    /// The snapshot with the replacement typed in as content.
    #[must_use]
    pub fn merged(&self) -> Snapshot {
        self.merged_with(self.replacement)
    }

    /// The snapshot with `replacement` typed in place of the proposal's own.
    #[must_use]
    pub fn merged_with(&self, replacement: &str) -> Snapshot {
        let mut merged = self.snapshot.clone();
        merged.replace_subrange(
            self.range(),
            &Snapshot::from_characters(replacement, Attribute::CONTENT),
        );
        merged
    }

    /// Caret directly after the replacement in the merged snapshot.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.start + self.replacement.chars().count()
    }
}
