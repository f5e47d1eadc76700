#![forbid(unsafe_code)]

//! Pattern (mask) fields such as phone numbers and card numbers.
//!
//! A pattern mixes literal characters with placeholder slots. The value is
//! the string of characters that fill the slots, in order. Literals render
//! as decoration; unfilled slots render as placeholders in visible mode and
//! are cut off in hidden mode.
//!
//! ```
//! use diffable::{DiffableTextStyle, PatternTextStyle};
//!
//! let style = PatternTextStyle::new("(###) ###-####")
//!     .with_placeholder('#', |c| c.is_ascii_digit());
//! assert_eq!(style.format(&"5551234".to_string()), "(555) 123-4###");
//! ```

use std::fmt;
use std::sync::Arc;

use diffable_text::{Attribute, Snapshot, Symbol};

use crate::error::{PatternError, Result};
use crate::proposal::Proposal;
use crate::style::{Commit, DiffableTextStyle};

type Predicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

#[derive(Clone)]
struct Placeholder {
    character: char,
    predicate: Predicate,
}

/// Style for a string value typed into a fixed pattern.
#[derive(Clone)]
pub struct PatternTextStyle {
    pattern: Vec<char>,
    placeholders: Vec<Placeholder>,
    hidden: bool,
}

impl PatternTextStyle {
    /// A pattern with no placeholders yet.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.chars().collect(),
            placeholders: Vec::new(),
            hidden: false,
        }
    }

    /// Treat `character` in the pattern as a slot accepting `predicate`.
    ///
    /// A later registration for the same character replaces the earlier one.
    #[must_use]
    pub fn with_placeholder(
        mut self,
        character: char,
        predicate: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.placeholders.retain(|p| p.character != character);
        self.placeholders.push(Placeholder {
            character,
            predicate: Arc::new(predicate),
        });
        self
    }

    /// Cut rendering off at the first unfilled slot.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Number of slots in the pattern.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pattern
            .iter()
            .filter(|&&c| self.placeholder(c).is_some())
            .count()
    }

    fn placeholder(&self, character: char) -> Option<&Placeholder> {
        self.placeholders.iter().find(|p| p.character == character)
    }

    fn slots(&self) -> impl Iterator<Item = &Placeholder> {
        self.pattern.iter().filter_map(|&c| self.placeholder(c))
    }

    /// Check `value` slot by slot.
    fn validate(&self, value: &str) -> std::result::Result<(), PatternError> {
        let mut slots = self.slots();
        for (index, character) in value.chars().enumerate() {
            let Some(slot) = slots.next() else {
                return Err(PatternError::Capacity {
                    max: self.capacity(),
                });
            };
            if !(slot.predicate)(character) {
                return Err(PatternError::Invalid { character, index });
            }
        }
        Ok(())
    }

    /// Attributed form of `value`; `value` must already fit the slots.
    #[must_use]
    pub fn snapshot(&self, value: &str) -> Snapshot {
        let mut snapshot = Snapshot::new();
        let mut characters = value.chars();
        let mut anchored = false;

        for &character in &self.pattern {
            if self.placeholder(character).is_none() {
                snapshot.append(Symbol::new(character, Attribute::DECORATION));
                continue;
            }
            match characters.next() {
                Some(filled) => snapshot.append(Symbol::content(filled)),
                None if self.hidden => break,
                None => {
                    if !anchored {
                        snapshot.anchor_at_end();
                        anchored = true;
                    }
                    snapshot.append(Symbol::new(character, Attribute::PLACEHOLDER));
                }
            }
        }

        if self.hidden && value.chars().count() < self.capacity() {
            snapshot.anchor_at_end();
        }
        snapshot
    }
}

impl DiffableTextStyle for PatternTextStyle {
    type Value = String;

    fn format(&self, value: &String) -> String {
        self.interpret(value).snapshot.text()
    }

    fn interpret(&self, value: &String) -> Commit<String> {
        let mut accepted = String::with_capacity(value.len());
        let mut slots = self.slots().peekable();
        for character in value.chars() {
            let Some(slot) = slots.peek() else { break };
            if (slot.predicate)(character) {
                accepted.push(character);
                slots.next();
            }
        }
        let snapshot = self.snapshot(&accepted);
        Commit::new(accepted, snapshot)
    }

    fn merge(&self, proposal: Proposal<'_>) -> Result<Commit<String>> {
        let value = proposal.merged().characters();
        self.validate(&value)?;
        let snapshot = self.snapshot(&value);
        Ok(Commit::new(value, snapshot))
    }
}

impl fmt::Debug for PatternTextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternTextStyle")
            .field("pattern", &self.pattern.iter().collect::<String>())
            .field(
                "placeholders",
                &self.placeholders.iter().map(|p| p.character).collect::<Vec<_>>(),
            )
            .field("hidden", &self.hidden)
            .finish()
    }
}
