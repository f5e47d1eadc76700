#![forbid(unsafe_code)]

//! Attributed character sequences.
//!
//! A [`Snapshot`] is what a field displays: the value's content characters
//! interleaved with whatever decoration the formatter adds. Styles build a
//! fresh snapshot on every call; nothing mutates a snapshot once it has been
//! handed to a [`Field`](crate::Field).
//!
//! Caret indices into a snapshot are boundaries: a snapshot of `len` symbols
//! has `len + 1` carets. Replacing a subrange invalidates every caret index
//! computed before the replacement.

use std::fmt;
use std::ops::Range;

use smallvec::SmallVec;

use crate::attribute::Attribute;
use crate::carets::Peek;
use crate::symbol::Symbol;

/// Inline capacity before a snapshot spills to the heap. Typical numeric
/// and masked fields stay below it.
const INLINE_SYMBOLS: usize = 24;

/// An ordered sequence of [`Symbol`]s plus an optional anchor caret.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    symbols: SmallVec<[Symbol; INLINE_SYMBOLS]>,
    anchor: Option<usize>,
}

impl Snapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot where every character has the same attribute.
    #[must_use]
    pub fn from_characters(text: &str, attribute: Attribute) -> Self {
        text.chars().map(|c| Symbol::new(c, attribute)).collect()
    }

    /// Build a snapshot of content characters.
    #[must_use]
    pub fn content(text: &str) -> Self {
        Self::from_characters(text, Attribute::CONTENT)
    }

    /// Build a snapshot of decoration characters.
    #[must_use]
    pub fn decoration(text: &str) -> Self {
        Self::from_characters(text, Attribute::DECORATION)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in display order.
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Preferred caret when the snapshot holds no input.
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Set the anchor caret, clamped to the snapshot's carets.
    pub fn set_anchor(&mut self, anchor: Option<usize>) {
        self.anchor = anchor.map(|caret| caret.min(self.len()));
    }

    /// Anchor the caret at the current end of the snapshot.
    pub fn anchor_at_end(&mut self) {
        self.anchor = Some(self.len());
    }

    pub fn append(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Append every character of `text` with the same attribute.
    pub fn append_characters(&mut self, text: &str, attribute: Attribute) {
        self.symbols
            .extend(text.chars().map(|c| Symbol::new(c, attribute)));
    }

    /// Replace `range` with the symbols of `other`.
    ///
    /// The range is clamped to the snapshot. The anchor is dropped because
    /// its caret index no longer refers to the same boundary.
    pub fn replace_subrange(&mut self, range: Range<usize>, other: &Snapshot) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.symbols.drain(start..end);
        self.symbols.insert_many(start, other.symbols.iter().copied());
        self.anchor = None;
    }

    /// The content characters joined: the logical value string.
    ///
    /// Virtual symbols are display only and never part of the value, even
    /// when marked as content.
    #[must_use]
    pub fn characters(&self) -> String {
        self.symbols
            .iter()
            .filter(|s| s.is_content() && !s.attribute.is_virtual())
            .map(|s| s.character)
            .collect()
    }

    /// Every character, decoration included.
    #[must_use]
    pub fn text(&self) -> String {
        self.symbols.iter().map(|s| s.character).collect()
    }

    /// Attributes on both sides of a caret.
    #[must_use]
    pub fn peek(&self, caret: usize) -> Peek {
        let caret = caret.min(self.len());
        Peek {
            lhs: caret
                .checked_sub(1)
                .and_then(|i| self.symbols.get(i))
                .map(|s| s.attribute),
            rhs: self.symbols.get(caret).map(|s| s.attribute),
        }
    }

    /// Whether any caret of this snapshot can be interactive.
    #[must_use]
    pub fn has_interactive_symbols(&self) -> bool {
        self.symbols.iter().any(|s| !s.is_passthrough())
    }
}

impl FromIterator<Symbol> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
            anchor: None,
        }
    }
}

impl Extend<Symbol> for Snapshot {
    fn extend<I: IntoIterator<Item = Symbol>>(&mut self, iter: I) {
        self.symbols.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            fmt::Write::write_char(f, symbol.character)?;
        }
        Ok(())
    }
}
