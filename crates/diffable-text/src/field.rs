#![forbid(unsafe_code)]

//! A snapshot paired with a selection.
//!
//! [`Field`] is rebuilt on every edit. It owns two operations:
//!
//! - [`update_selection`](Field::update_selection): the user moved the caret
//!   or changed the selection; autocorrect each bound so it never rests
//!   inside decoration.
//! - [`update_snapshot`](Field::update_snapshot): the formatter produced new
//!   text; carry the selection across by aligning the unaffected suffix and
//!   prefix, then autocorrect.

use std::ops::Range;

use crate::carets::{self, Bound, Intent};
use crate::position::{Encoding, Positions};
use crate::similarities::{self, Reformatting};
use crate::snapshot::Snapshot;

/// A [`Snapshot`] plus a selection of carets.
///
/// Invariant: `selection.start <= selection.end <= snapshot.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    snapshot: Snapshot,
    selection: Range<usize>,
}

impl Field {
    /// Create a field and autocorrect the proposed selection.
    ///
    /// An anchored snapshot places a collapsed caret on its anchor.
    #[must_use]
    pub fn new(snapshot: Snapshot, selection: Range<usize>) -> Self {
        let mut field = Self {
            snapshot,
            selection: 0..0,
        };
        match field.snapshot.anchor() {
            Some(anchor) => field.selection = anchor..anchor,
            None => field.update_selection(selection, Intent::NONE),
        }
        field
    }

    /// Create a field with a collapsed caret.
    #[must_use]
    pub fn caret(snapshot: Snapshot, caret: usize) -> Self {
        Self::new(snapshot, caret..caret)
    }

    /// Create a field with the caret at the end of the snapshot.
    #[must_use]
    pub fn at_end(snapshot: Snapshot) -> Self {
        let end = snapshot.len();
        Self::caret(snapshot, end)
    }

    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Consume the field and return its snapshot.
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    /// Selection translated to platform offsets.
    #[must_use]
    pub fn selection_offsets(&self, encoding: Encoding) -> Range<usize> {
        Positions::new(&self.snapshot, encoding).offsets(self.selection())
    }

    /// Replace the selection, autocorrecting both bounds.
    pub fn update_selection(&mut self, selection: impl Into<Range<usize>>, intent: impl Into<Intent>) {
        let selection = selection.into();
        let intent = intent.into();
        let len = self.snapshot.len();
        let upper = selection.end.min(len);
        let lower = selection.start.min(upper);

        self.selection = if lower == upper {
            let caret = carets::autocorrect(&self.snapshot, upper, Bound::Single, intent.upper);
            caret..caret
        } else {
            let lower = carets::autocorrect(&self.snapshot, lower, Bound::Lower, intent.lower);
            let upper = carets::autocorrect(&self.snapshot, upper, Bound::Upper, intent.upper);
            if lower <= upper {
                lower..upper
            } else {
                let caret =
                    carets::autocorrect(&self.snapshot, upper, Bound::Single, intent.upper);
                caret..caret
            }
        };
    }

    /// Replace the selection given in platform offsets.
    pub fn update_selection_offsets(
        &mut self,
        offsets: Range<usize>,
        encoding: Encoding,
        intent: impl Into<Intent>,
    ) {
        let carets = Positions::new(&self.snapshot, encoding).carets(offsets);
        self.update_selection(carets, intent);
    }

    /// Replace the snapshot, keeping the selection on the same content.
    pub fn update_snapshot(&mut self, next: Snapshot) {
        if let Some(anchor) = next.anchor() {
            self.snapshot = next;
            self.selection = anchor..anchor;
            return;
        }

        let current = self.snapshot.symbols();
        let upper = {
            let aligned = similarities::suffix(
                &current[self.selection.end..],
                next.symbols(),
                &Reformatting,
            );
            next.len() - aligned.rhs
        };
        let lower = if self.selection.is_empty() {
            upper
        } else {
            let aligned = similarities::prefix(
                &current[..self.selection.start],
                &next.symbols()[..upper],
                &Reformatting,
            );
            aligned.rhs
        };

        tracing::trace!(
            from = ?self.selection,
            to = ?(lower..upper),
            symbols = next.len(),
            "field.update_snapshot"
        );

        self.snapshot = next;
        self.update_selection(lower..upper, Intent::NONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::symbol::Symbol;

    fn grouped(text: &str) -> Snapshot {
        text.chars()
            .map(|c| match c {
                ',' => Symbol::separator(c),
                '$' => Symbol::decoration(c),
                _ => Symbol::content(c),
            })
            .collect()
    }

    #[test]
    fn new_autocorrects_selection() {
        let field = Field::caret(grouped("$12"), 0);
        assert_eq!(field.selection(), 1..1);
    }

    #[test]
    fn anchor_wins_over_selection() {
        let mut snapshot = grouped("$");
        snapshot.anchor_at_end();
        let field = Field::caret(snapshot, 0);
        assert_eq!(field.selection(), 1..1);
    }

    #[test]
    fn selection_is_clamped_and_ordered() {
        let mut field = Field::at_end(grouped("123"));
        field.update_selection(5..9, Intent::NONE);
        assert_eq!(field.selection(), 3..3);
        field.update_selection(2..1, Intent::NONE);
        assert_eq!(field.selection(), 1..1);
    }

    #[test]
    fn range_excludes_trailing_decoration() {
        let mut snapshot = grouped("12");
        snapshot.append_characters(" kr", Attribute::DECORATION);
        let mut field = Field::at_end(snapshot);
        assert_eq!(field.selection(), 2..2);
        field.update_selection(0..5, Intent::NONE);
        assert_eq!(field.selection(), 0..2);
    }

    #[test]
    fn typing_keeps_caret_after_inserted_digit() {
        // "1,2|34" + "5" is proposed as "1,25|34" and formatted as "12,534".
        let mut field = Field::caret(grouped("1,2534"), 4);
        field.update_snapshot(grouped("12,534"));
        assert_eq!(field.snapshot().text(), "12,534");
        assert_eq!(field.selection(), 4..4);
    }

    #[test]
    fn typing_before_group_skips_new_separator() {
        // "|123" + "4" is proposed as "4|123" and formatted as "4,123".
        let mut field = Field::caret(grouped("4123"), 1);
        field.update_snapshot(grouped("4,123"));
        assert_eq!(field.selection(), 1..1);
    }

    #[test]
    fn deleting_digit_keeps_caret_on_content() {
        // "1,2|34" with backspace is proposed as "1,|34" and formatted as "134".
        let mut field = Field::caret(grouped("1,34"), 2);
        field.update_snapshot(grouped("134"));
        assert_eq!(field.selection(), 1..1);
    }

    #[test]
    fn selection_survives_regrouping() {
        let mut field = Field::new(grouped("1,234"), 2..4);
        field.update_snapshot(grouped("12,34"));
        assert_eq!(field.snapshot().characters(), "1234");
        let selected: String = field.snapshot().symbols()[field.selection()]
            .iter()
            .filter(|s| s.is_content())
            .map(|s| s.character)
            .collect();
        assert_eq!(selected, "23");
    }

    #[test]
    fn offsets_round_trip() {
        let mut field = Field::at_end(grouped("$1😀"));
        field.update_selection_offsets(1..4, Encoding::Utf16, Intent::NONE);
        assert_eq!(field.selection(), 1..3);
        assert_eq!(field.selection_offsets(Encoding::Utf16), 1..4);
    }
}
