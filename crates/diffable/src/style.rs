#![forbid(unsafe_code)]

//! The style contract.
//!
//! A style is a stateless set of three functions over its value type:
//!
//! | Function      | When                    | Result                     |
//! |---------------|-------------------------|----------------------------|
//! | `format`      | field is not focused    | display string             |
//! | `interpret`   | field gains focus       | corrected value + snapshot |
//! | `merge`       | every keystroke         | new value + snapshot, or a rejection |
//!
//! Styles are chosen at construction time and never mutated by editing.

use std::fmt;

use diffable_text::Snapshot;

use crate::error::Result;
use crate::proposal::Proposal;

/// A value and the snapshot that displays it.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit<V> {
    pub value: V,
    pub snapshot: Snapshot,
}

impl<V> Commit<V> {
    #[must_use]
    pub fn new(value: V, snapshot: Snapshot) -> Self {
        Self { value, snapshot }
    }
}

/// Formatting and validation for one kind of field.
pub trait DiffableTextStyle {
    type Value: Clone + PartialEq + fmt::Debug;

    /// Render `value` for display while the field is not being edited.
    fn format(&self, value: &Self::Value) -> String;

    /// Produce the editable form of `value`, correcting it if needed.
    fn interpret(&self, value: &Self::Value) -> Commit<Self::Value>;

    /// Validate and reformat a keystroke.
    ///
    /// # Errors
    ///
    /// Returns a [`Failure`](crate::Failure) when the edit must be declined.
    fn merge(&self, proposal: Proposal<'_>) -> Result<Commit<Self::Value>>;
}
