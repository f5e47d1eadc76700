#![forbid(unsafe_code)]

//! Number fields.
//!
//! # Merge pipeline
//!
//! 1. Translate the replacement to the locale; a lone sign becomes a command.
//! 2. Parse the merged content characters as a [`Number`].
//! 3. Apply the sign command, then fit the sign to the bounds.
//! 4. Check digit capacity and drop a separator no digit can follow.
//! 5. Convert to the value type and check the bounds.
//! 6. Drop a trailing separator on an edge, then render.
//!
//! Rendering during a merge starts from the parsed number, so a trailing
//! separator and trailing fraction zeros survive while the user types.
//! `interpret` starts from the value instead.
//!
//! # Fitting a value
//!
//! `interpret` and `format` clamp to the bounds, then to the largest
//! magnitude the precision holds, then round. A rounded number that left
//! the bounds is replaced by the nearer rounded bound. When neither bound
//! survives rounding, the clamped value is shown at full precision so the
//! commit stays inside the bounds.

use std::sync::Arc;

use diffable_number::{
    Bounds, BoundsError, CurrencyPlacement, Lexicon, Locale, Number, NumberValue, Precision,
    Reader, Sign,
};
use diffable_text::{Attribute, Snapshot, Symbol};

use crate::error::Result;
use crate::proposal::Proposal;
use crate::style::{Commit, DiffableTextStyle};

/// Style for a numeric value of type `V`.
#[derive(Debug, Clone)]
pub struct NumberTextStyle<V: NumberValue> {
    lexicon: Arc<Lexicon>,
    bounds: Bounds<V>,
    precision: Precision<V>,
    prefix: String,
    suffix: String,
    grouping: bool,
}

impl<V: NumberValue> NumberTextStyle<V> {
    /// Unbounded style with full precision and grouping.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self::with_lexicon(Arc::new(Lexicon::new(locale)))
    }

    /// Style sharing an existing lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            bounds: Bounds::default(),
            precision: Precision::default(),
            prefix: String::new(),
            suffix: String::new(),
            grouping: true,
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds<V>) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: Precision<V>) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Place a label before or after the number, per `placement`.
    #[must_use]
    pub fn with_label(self, label: &str, placement: CurrencyPlacement) -> Self {
        match placement {
            CurrencyPlacement::Prefix => self.with_prefix(label),
            CurrencyPlacement::Suffix => self.with_suffix(format!("\u{00A0}{label}")),
        }
    }

    /// Whether integer digits are grouped.
    #[must_use]
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    #[inline]
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Bounds<V> {
        self.bounds
    }

    #[inline]
    #[must_use]
    pub fn precision(&self) -> Precision<V> {
        self.precision
    }

    /// Attributed form of `number` with this style's decoration.
    #[must_use]
    pub fn snapshot(&self, number: &Number) -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.append_characters(&self.prefix, Attribute::DECORATION);
        let prefix = snapshot.len();

        if number.sign == Some(Sign::Negative) {
            snapshot.append(Symbol::content(self.lexicon.sign(Sign::Negative)));
        }

        let count = number.integer.len();
        for (index, &digit) in number.integer.iter().enumerate() {
            if self.grouping && index > 0 && (count - index) % 3 == 0 {
                snapshot.append(Symbol::separator(self.lexicon.grouping_separator()));
            }
            snapshot.append(Symbol::content(self.lexicon.digit(digit)));
        }

        if number.separator {
            let attribute = if number.fraction.is_empty() {
                Attribute::CONTENT | Attribute::REMOVABLE
            } else {
                Attribute::CONTENT
            };
            snapshot.append(Symbol::new(self.lexicon.fraction_separator(), attribute));
        }
        for &digit in &number.fraction {
            snapshot.append(Symbol::content(self.lexicon.digit(digit)));
        }

        snapshot.append_characters(&self.suffix, Attribute::DECORATION);
        if number.is_empty() && number.sign.is_none() {
            snapshot.set_anchor(Some(prefix));
        }
        snapshot
    }

    /// Value and number that satisfy both the bounds and the precision.
    fn fit(&self, value: V) -> (V, Number) {
        let clamped = self.bounds.clamp(value);
        let number = self.precision.round(self.precision.limits().clamp(clamped));
        if let Some(value) = self.accepts(&number) {
            return (value, number);
        }

        let below = Self::value(&number).is_ok_and(|rounded| rounded < self.bounds.min());
        let edges = if below {
            [self.bounds.min(), self.bounds.max()]
        } else {
            [self.bounds.max(), self.bounds.min()]
        };
        for edge in edges {
            let number = self.precision.round(edge);
            if let Some(value) = self.accepts(&number) {
                return (value, number);
            }
        }

        tracing::debug!(value = %clamped, "precision cannot represent the bounds");
        let number = Precision::<V>::default().round(clamped);
        (Self::value(&number).unwrap_or(clamped), number)
    }

    fn accepts(&self, number: &Number) -> Option<V> {
        self.precision.capacity(number).ok()?;
        Self::value(number)
            .ok()
            .filter(|value| self.bounds.contains(*value))
    }

    fn value(number: &Number) -> Result<V> {
        let text = number.to_ascii();
        V::from_ascii(&text).ok_or_else(|| BoundsError::Unrepresentable { text }.into())
    }
}

impl<V: NumberValue> DiffableTextStyle for NumberTextStyle<V> {
    type Value = V;

    fn format(&self, value: &V) -> String {
        let (_, number) = self.fit(*value);
        self.snapshot(&number).text()
    }

    fn interpret(&self, value: &V) -> Commit<V> {
        let (value, number) = self.fit(*value);
        Commit::new(value, self.snapshot(&number))
    }

    fn merge(&self, proposal: Proposal<'_>) -> Result<Commit<V>> {
        let reader = Reader::new(&self.lexicon);
        let command = reader.sign_command(proposal.replacement());
        let replacement = match command {
            Some(_) => String::new(),
            None => reader.translate(proposal.replacement()),
        };

        let merged = proposal.merged_with(&replacement);
        let mut number = Number::parse(&merged.characters(), &self.lexicon)?;

        if let Some(sign) = command {
            let sign = if sign == Sign::Negative && number.sign == Some(sign) {
                sign.toggled()
            } else {
                sign
            };
            self.bounds.validate_sign(sign)?;
            number.sign = Some(sign);
        }
        self.bounds.autocorrect_sign(&mut number.sign);

        let capacity = self.precision.capacity(&number)?;
        number.remove_impossible_separator(capacity);

        let value = Self::value(&number)?;
        let location = self.bounds.validate(value)?;
        Bounds::<V>::autocorrect_edge(&mut number, location);

        tracing::trace!(number = %number, "merged number");
        Ok(Commit::new(value, self.snapshot(&number)))
    }
}
