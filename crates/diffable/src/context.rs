#![forbid(unsafe_code)]

//! One editable field.
//!
//! A [`Context`] owns a style, the current value, and (while focused) a
//! [`Field`]. It is the state machine
//!
//! ```text
//! unfocused(value) --focus--> focused(value, field)
//! focused --merge ok--> focused(value', field')
//! focused --merge declined--> focused(value, field)
//! focused --unfocus--> unfocused(value)
//! ```
//!
//! Platform positions are offsets in the context's [`Encoding`]; they are
//! translated to carets on the way in and back on the way out.
//!
//! # Invariants
//!
//! - A declined edit changes nothing, including the selection.
//! - Clones share storage until one of them is written to.

use std::ops::Range;
use std::rc::Rc;

use diffable_text::{Encoding, Field, Intent, Positions, Snapshot};

use crate::error::{Failure, Result};
use crate::proposal::Proposal;
use crate::style::DiffableTextStyle;

#[derive(Debug, Clone)]
struct Storage<S: DiffableTextStyle> {
    style: S,
    value: S::Value,
    field: Option<Field>,
    encoding: Encoding,
}

/// Copy-on-write owner of a style, its value, and its focused field.
#[derive(Debug, Clone)]
pub struct Context<S: DiffableTextStyle> {
    storage: Rc<Storage<S>>,
}

impl<S: DiffableTextStyle + Clone> Context<S> {
    /// An unfocused context showing `value`.
    #[must_use]
    pub fn new(style: S, value: S::Value) -> Self {
        Self {
            storage: Rc::new(Storage {
                style,
                value,
                field: None,
                encoding: Encoding::default(),
            }),
        }
    }

    /// Measure offsets in `encoding` instead of UTF-16.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        Rc::make_mut(&mut self.storage).encoding = encoding;
        self
    }

    #[inline]
    #[must_use]
    pub fn style(&self) -> &S {
        &self.storage.style
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &S::Value {
        &self.storage.value
    }

    #[inline]
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.storage.encoding
    }

    #[inline]
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.storage.field.is_some()
    }

    /// The editable snapshot while focused.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.storage.field.as_ref().map(Field::snapshot)
    }

    /// Displayed text: the snapshot while focused, the formatted value otherwise.
    #[must_use]
    pub fn text(&self) -> String {
        match &self.storage.field {
            Some(field) => field.snapshot().text(),
            None => self.storage.style.format(&self.storage.value),
        }
    }

    /// Selection in offsets while focused.
    #[must_use]
    pub fn selection(&self) -> Option<Range<usize>> {
        self.storage
            .field
            .as_ref()
            .map(|field| field.selection_offsets(self.storage.encoding))
    }

    /// Start editing; the value may be corrected by the style.
    pub fn focus(&mut self) {
        if self.is_focused() {
            return;
        }
        let _span = self.trace("focus");
        let commit = self.storage.style.interpret(&self.storage.value);
        let storage = Rc::make_mut(&mut self.storage);
        storage.value = commit.value;
        storage.field = Some(Field::at_end(commit.snapshot));
    }

    /// Stop editing and keep the current value.
    pub fn unfocus(&mut self) {
        if !self.is_focused() {
            return;
        }
        let _span = self.trace("unfocus");
        Rc::make_mut(&mut self.storage).field = None;
    }

    /// Replace the value; a focused field keeps its caret on the same content.
    pub fn set_value(&mut self, value: S::Value) {
        let _span = self.trace("set_value");
        let storage = Rc::make_mut(&mut self.storage);
        match &mut storage.field {
            Some(field) => {
                let commit = storage.style.interpret(&value);
                field.update_snapshot(commit.snapshot);
                storage.value = commit.value;
            }
            None => storage.value = value,
        }
    }

    /// Replace `offsets` with `replacement`.
    ///
    /// # Errors
    ///
    /// [`Failure::Inactive`] when unfocused, or the style's rejection. Either
    /// way the context is left as it was.
    pub fn merge(&mut self, offsets: Range<usize>, replacement: &str) -> Result<()> {
        let _span = self.trace("merge");
        let storage = &*self.storage;
        let Some(field) = storage.field.as_ref() else {
            return Err(Failure::Inactive);
        };

        let carets = Positions::new(field.snapshot(), storage.encoding).carets(offsets);
        let proposal = Proposal::new(field.snapshot(), carets, replacement);
        let commit = match storage.style.merge(proposal) {
            Ok(commit) => commit,
            Err(failure) => {
                tracing::debug!(kind = failure.kind(), failure = %failure, "edit declined");
                return Err(failure);
            }
        };

        let mut next = Field::caret(proposal.merged(), proposal.caret());
        next.update_snapshot(commit.snapshot);

        let storage = Rc::make_mut(&mut self.storage);
        storage.value = commit.value;
        storage.field = Some(next);
        Ok(())
    }

    /// Move the selection to `offsets`, autocorrecting both bounds.
    ///
    /// # Errors
    ///
    /// [`Failure::Inactive`] when unfocused.
    pub fn select(&mut self, offsets: Range<usize>, intent: impl Into<Intent>) -> Result<()> {
        let _span = self.trace("select");
        if !self.is_focused() {
            return Err(Failure::Inactive);
        }
        let storage = Rc::make_mut(&mut self.storage);
        if let Some(field) = storage.field.as_mut() {
            field.update_selection_offsets(offsets, storage.encoding, intent);
        }
        Ok(())
    }

    fn trace(&self, operation: &'static str) -> tracing::span::EnteredSpan {
        let field = self.storage.field.as_ref();
        let span = tracing::debug_span!(
            "context.edit",
            operation,
            caret = field.map(|f| f.selection().end),
            symbols = field.map(|f| f.snapshot().len()),
            focused = field.is_some()
        )
        .entered();
        tracing::trace!("context operation");
        span
    }
}
