#![forbid(unsafe_code)]

//! Symbol attribute flags.

use bitflags::bitflags;

bitflags! {
    /// Classification of a single displayed character.
    ///
    /// Every symbol carries exactly one of [`CONTENT`](Self::CONTENT) or
    /// [`PHANTOM`](Self::PHANTOM); the remaining flags refine how the symbol
    /// takes part in parsing, caret placement, and alignment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Attribute: u8 {
        /// A user-meaningful character (digit, sign, typed letter).
        const CONTENT     = 1 << 0;
        /// A decorative character (currency label, pattern literal).
        const PHANTOM     = 1 << 1;
        /// Display only; excluded when the value is rebuilt from the snapshot.
        const VIRTUAL     = 1 << 2;
        /// May appear between two snapshots without counting as an edit.
        const INSERTABLE  = 1 << 3;
        /// May vanish between two snapshots without counting as an edit.
        const REMOVABLE   = 1 << 4;
        /// Not an interactive boundary; carets avoid resting beside it.
        const PASSTHROUGH = 1 << 5;
        /// Skipped entirely when snapshots are aligned.
        const FORMATTING  = 1 << 6;

        /// Prefix/suffix labels and pattern literals.
        const DECORATION = Self::PHANTOM.bits()
            | Self::VIRTUAL.bits()
            | Self::INSERTABLE.bits()
            | Self::REMOVABLE.bits()
            | Self::PASSTHROUGH.bits();
        /// Grouping separators inserted by a formatter.
        const SEPARATOR = Self::PHANTOM.bits()
            | Self::VIRTUAL.bits()
            | Self::FORMATTING.bits()
            | Self::INSERTABLE.bits()
            | Self::REMOVABLE.bits();
        /// Unfilled pattern slots.
        const PLACEHOLDER = Self::PHANTOM.bits()
            | Self::VIRTUAL.bits()
            | Self::REMOVABLE.bits();
    }
}

impl Attribute {
    /// Whether the symbol contributes to the logical value.
    #[inline]
    #[must_use]
    pub const fn is_content(self) -> bool {
        self.contains(Self::CONTENT)
    }

    /// Whether the symbol is decorative.
    #[inline]
    #[must_use]
    pub const fn is_phantom(self) -> bool {
        self.contains(Self::PHANTOM)
    }

    /// Whether the symbol is left out of the logical value.
    #[inline]
    #[must_use]
    pub const fn is_virtual(self) -> bool {
        self.contains(Self::VIRTUAL)
    }

    /// Whether a caret should avoid this symbol.
    #[inline]
    #[must_use]
    pub const fn is_passthrough(self) -> bool {
        self.contains(Self::PASSTHROUGH)
    }

    /// Whether the alignment walk compares this symbol at all.
    #[inline]
    #[must_use]
    pub const fn is_formatting(self) -> bool {
        self.contains(Self::FORMATTING)
    }

    /// Whether exactly one of `CONTENT` and `PHANTOM` is set.
    #[inline]
    #[must_use]
    pub const fn is_well_formed(self) -> bool {
        self.is_content() != self.is_phantom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_phantom() {
        for preset in [
            Attribute::DECORATION,
            Attribute::SEPARATOR,
            Attribute::PLACEHOLDER,
        ] {
            assert!(preset.is_phantom());
            assert!(!preset.is_content());
            assert!(preset.is_well_formed());
        }
    }

    #[test]
    fn content_and_phantom_are_exclusive() {
        assert!(Attribute::CONTENT.is_well_formed());
        assert!((Attribute::CONTENT | Attribute::REMOVABLE).is_well_formed());
        assert!(!(Attribute::CONTENT | Attribute::PHANTOM).is_well_formed());
        assert!(!Attribute::empty().is_well_formed());
    }

    #[test]
    fn separator_is_formatting_but_not_passthrough() {
        assert!(Attribute::SEPARATOR.is_formatting());
        assert!(!Attribute::SEPARATOR.is_passthrough());
        assert!(Attribute::DECORATION.is_passthrough());
        assert!(!Attribute::DECORATION.is_formatting());
    }
}
