#![forbid(unsafe_code)]

//! Memoized locale tables for style construction.
//!
//! Building a [`Lexicon`] hashes every digit, sign and separator of a locale,
//! and currency styles additionally need a label and a fraction digit count.
//! These are pure functions of `(locale identifier, currency code)`, so
//! [`StyleCache`] keeps them in an LRU map and hands out shared [`Arc`]s.
//!
//! The cache is owned by whoever constructs styles; there is no global
//! instance. Entries are keyed by identifier, so two locales sharing an
//! identifier must share their tables.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use diffable_number::{Lexicon, Locale, NumberValue, Precision};

use crate::number_style::NumberTextStyle;

/// Display label and default fraction digits of a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyLabel {
    pub code: String,
    pub symbol: String,
    pub fraction: usize,
}

impl CurrencyLabel {
    /// Label for an ISO 4217 code; unknown codes display as themselves.
    #[must_use]
    pub fn new(code: &str) -> Self {
        let code = code.to_ascii_uppercase();
        let (symbol, fraction) = match code.as_str() {
            "USD" => ("$", 2),
            "EUR" => ("€", 2),
            "GBP" => ("£", 2),
            "SEK" => ("kr", 2),
            "JPY" => ("¥", 0),
            "KRW" => ("₩", 0),
            other => (other, 2),
        };
        Self {
            symbol: symbol.to_string(),
            code,
            fraction,
        }
    }
}

/// Tables shared by every style built for one key.
#[derive(Debug)]
pub struct Labels {
    pub lexicon: Arc<Lexicon>,
    pub currency: Option<CurrencyLabel>,
}

/// Statistics for the style cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

type Key = (String, Option<String>);

/// LRU cache of [`Labels`] keyed by locale identifier and currency code.
pub struct StyleCache {
    cache: LruCache<Key, Arc<Labels>>,
    stats: CacheStats,
}

impl StyleCache {
    /// Create a cache holding at most `capacity` entries (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            stats: CacheStats {
                capacity: capacity.max(1),
                ..Default::default()
            },
        }
    }

    /// Tables for `locale` and an optional currency `code`.
    pub fn labels(&mut self, locale: &Locale, code: Option<&str>) -> Arc<Labels> {
        let key = (
            locale.identifier().to_string(),
            code.map(str::to_ascii_uppercase),
        );

        if let Some(labels) = self.cache.get(&key) {
            self.stats.hits += 1;
            tracing::trace!(locale = %key.0, code = ?key.1, "style cache hit");
            return Arc::clone(labels);
        }

        self.stats.misses += 1;
        tracing::trace!(locale = %key.0, code = ?key.1, "style cache miss");
        let labels = Arc::new(Labels {
            lexicon: self.lexicon(locale, &key.0),
            currency: code.map(CurrencyLabel::new),
        });
        self.cache.put(key, Arc::clone(&labels));
        self.stats.size = self.cache.len();
        labels
    }

    /// Reuse a lexicon already built for the same locale under another code.
    fn lexicon(&self, locale: &Locale, identifier: &str) -> Arc<Lexicon> {
        self.cache
            .iter()
            .find(|((id, _), _)| id == identifier)
            .map(|(_, labels)| Arc::clone(&labels.lexicon))
            .unwrap_or_else(|| Arc::new(Lexicon::new(locale.clone())))
    }

    /// A plain number style for `locale`.
    pub fn number<V: NumberValue>(&mut self, locale: &Locale) -> NumberTextStyle<V> {
        let labels = self.labels(locale, None);
        NumberTextStyle::with_lexicon(Arc::clone(&labels.lexicon))
    }

    /// A currency style for `locale` showing `code`'s label.
    ///
    /// Fraction digits default to the currency's minor unit.
    pub fn currency<V: NumberValue>(&mut self, locale: &Locale, code: &str) -> NumberTextStyle<V> {
        let labels = self.labels(locale, Some(code));
        let style = NumberTextStyle::with_lexicon(Arc::clone(&labels.lexicon));
        match &labels.currency {
            Some(currency) => style
                .with_label(&currency.symbol, locale.currency_placement())
                .with_precision(Precision::fraction(currency.fraction..=currency.fraction)),
            None => style,
        }
    }

    /// Current cache statistics.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            ..self.stats
        }
    }

    /// Drop every entry and reset statistics.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats = CacheStats {
            capacity: self.stats.capacity,
            ..Default::default()
        };
    }

    /// Change the capacity, evicting least recently used entries.
    pub fn resize(&mut self, capacity: usize) {
        self.cache
            .resize(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN));
        self.stats.capacity = capacity.max(1);
        self.stats.size = self.cache.len();
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new(16)
    }
}
