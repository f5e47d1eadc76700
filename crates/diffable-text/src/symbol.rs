#![forbid(unsafe_code)]

//! A single displayed character and its attributes.

use crate::attribute::Attribute;

/// One character of a [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    /// The displayed character.
    pub character: char,
    /// How the character behaves while editing.
    pub attribute: Attribute,
}

impl Symbol {
    /// Create a symbol with explicit attributes.
    #[must_use]
    pub const fn new(character: char, attribute: Attribute) -> Self {
        Self {
            character,
            attribute,
        }
    }

    /// A content symbol.
    #[must_use]
    pub const fn content(character: char) -> Self {
        Self::new(character, Attribute::CONTENT)
    }

    /// A decorative symbol (label or literal).
    #[must_use]
    pub const fn decoration(character: char) -> Self {
        Self::new(character, Attribute::DECORATION)
    }

    /// A grouping separator.
    #[must_use]
    pub const fn separator(character: char) -> Self {
        Self::new(character, Attribute::SEPARATOR)
    }

    #[inline]
    #[must_use]
    pub const fn is_content(&self) -> bool {
        self.attribute.is_content()
    }

    #[inline]
    #[must_use]
    pub const fn is_passthrough(&self) -> bool {
        self.attribute.is_passthrough()
    }
}

impl From<char> for Symbol {
    fn from(character: char) -> Self {
        Self::content(character)
    }
}
