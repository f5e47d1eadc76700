#![forbid(unsafe_code)]

//! Prefix/suffix alignment of two attributed sequences.
//!
//! When a formatter rewrites the displayed text, the user's caret has to
//! follow the content it was attached to. The alignment walk answers a
//! narrow question: how far can two sequences be walked in lockstep from one
//! end before they genuinely diverge?
//!
//! A [`Comparator`] chooses which elements are looked at ([`inspect`]) and
//! what to do with each inspected pair ([`compare`]). Uninspected elements
//! are consumed silently on either side.
//!
//! ```
//! use diffable_text::{Attribute, Reformatting, Snapshot, Symbol, similarities};
//!
//! let current = Snapshot::content("1234");
//! let mut next = Snapshot::content("1");
//! next.append(Symbol::separator(','));
//! next.append_characters("234", Attribute::CONTENT);
//!
//! let aligned = similarities::suffix(&current, &next, &Reformatting);
//! assert_eq!((aligned.lhs, aligned.rhs), (4, 5));
//! ```
//!
//! Each call is linear in the shorter aligned run and allocation-free.
//!
//! [`inspect`]: Comparator::inspect
//! [`compare`]: Comparator::compare

use crate::attribute::Attribute;
use crate::symbol::Symbol;

/// What the walk does after comparing one inspected pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Both elements correspond; advance both sides.
    ContinueOnBoth,
    /// The left element vanished; advance the left side only.
    ContinueOnLhsOnly,
    /// The right element appeared; advance the right side only.
    ContinueOnRhsOnly,
    /// The sequences diverge here.
    Stop,
}

/// Element selection and comparison policy for an alignment walk.
pub trait Comparator<T: ?Sized> {
    /// Whether `element` takes part in comparisons at all.
    fn inspect(&self, _element: &T) -> bool {
        true
    }

    /// Decide how to proceed from an inspected pair.
    fn compare(&self, lhs: &T, rhs: &T) -> Instruction;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Instruction,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Instruction {
        self(lhs, rhs)
    }
}

/// Number of elements consumed on each side by a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Alignment {
    pub lhs: usize,
    pub rhs: usize,
}

/// Comparator used when a snapshot is reformatted.
///
/// Equal characters align; a removable old symbol may vanish; an insertable
/// new symbol may appear; anything else is where the edit happened.
/// Formatting symbols are not inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reformatting;

impl Comparator<Symbol> for Reformatting {
    #[inline]
    fn inspect(&self, element: &Symbol) -> bool {
        !element.attribute.is_formatting()
    }

    fn compare(&self, lhs: &Symbol, rhs: &Symbol) -> Instruction {
        if lhs.character == rhs.character {
            Instruction::ContinueOnBoth
        } else if lhs.attribute.contains(Attribute::REMOVABLE) {
            Instruction::ContinueOnLhsOnly
        } else if rhs.attribute.contains(Attribute::INSERTABLE) {
            Instruction::ContinueOnRhsOnly
        } else {
            Instruction::Stop
        }
    }
}

/// Align two sequences from their start.
pub fn prefix<'a, T, L, R, C>(lhs: L, rhs: R, comparator: &C) -> Alignment
where
    T: 'a + ?Sized,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    walk(lhs.into_iter(), rhs.into_iter(), comparator)
}

/// Align two sequences from their end.
pub fn suffix<'a, T, L, R, C>(lhs: L, rhs: R, comparator: &C) -> Alignment
where
    T: 'a + ?Sized,
    L: IntoIterator<Item = &'a T>,
    L::IntoIter: DoubleEndedIterator,
    R: IntoIterator<Item = &'a T>,
    R::IntoIter: DoubleEndedIterator,
    C: Comparator<T> + ?Sized,
{
    walk(lhs.into_iter().rev(), rhs.into_iter().rev(), comparator)
}

fn walk<'a, T, C>(
    lhs: impl Iterator<Item = &'a T>,
    rhs: impl Iterator<Item = &'a T>,
    comparator: &C,
) -> Alignment
where
    T: 'a + ?Sized,
    C: Comparator<T> + ?Sized,
{
    let mut lhs = lhs.peekable();
    let mut rhs = rhs.peekable();
    let mut alignment = Alignment::default();

    loop {
        while lhs.next_if(|e| !comparator.inspect(e)).is_some() {
            alignment.lhs += 1;
        }
        while rhs.next_if(|e| !comparator.inspect(e)).is_some() {
            alignment.rhs += 1;
        }
        let (Some(l), Some(r)) = (lhs.peek(), rhs.peek()) else {
            break;
        };
        match comparator.compare(l, r) {
            Instruction::ContinueOnBoth => {
                lhs.next();
                rhs.next();
                alignment.lhs += 1;
                alignment.rhs += 1;
            }
            Instruction::ContinueOnLhsOnly => {
                lhs.next();
                alignment.lhs += 1;
            }
            Instruction::ContinueOnRhsOnly => {
                rhs.next();
                alignment.rhs += 1;
            }
            Instruction::Stop => break,
        }
    }

    alignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    fn grouped(text: &str) -> Snapshot {
        text.chars()
            .map(|c| {
                if c == ',' {
                    Symbol::separator(c)
                } else {
                    Symbol::content(c)
                }
            })
            .collect()
    }

    fn exact(lhs: &char, rhs: &char) -> Instruction {
        if lhs == rhs {
            Instruction::ContinueOnBoth
        } else {
            Instruction::Stop
        }
    }

    #[test]
    fn generic_over_plain_sequences() {
        let a = ['a', 'b', 'c', 'd'];
        let b = ['a', 'b', 'x', 'd'];
        assert_eq!(prefix(&a, &b, &exact), Alignment { lhs: 2, rhs: 2 });
        assert_eq!(suffix(&a, &b, &exact), Alignment { lhs: 1, rhs: 1 });
    }

    #[test]
    fn empty_sides_align_nothing() {
        let empty: [char; 0] = [];
        assert_eq!(prefix(&empty, &['a'], &exact), Alignment::default());
        assert_eq!(suffix(&['a'], &empty, &exact), Alignment::default());
    }

    #[test]
    fn separators_are_skipped() {
        let current = grouped("12,345");
        let next = grouped("1,2345");
        let aligned = suffix(&current, &next, &Reformatting);
        assert_eq!(aligned, Alignment { lhs: 6, rhs: 6 });
    }

    #[test]
    fn divergence_bounds_the_suffix() {
        // "12|34" with `5` typed is proposed as "125|34" and formatted as "12,534".
        let current = grouped("12534");
        let next = grouped("12,534");
        let aligned = suffix(&current.symbols()[3..], &next, &Reformatting);
        assert_eq!(aligned.lhs, 2);
        assert_eq!(aligned.rhs, 2);
    }

    #[test]
    fn removable_lhs_is_skipped() {
        let mut current = Snapshot::content("1");
        current.append(Symbol::new('.', Attribute::CONTENT | Attribute::REMOVABLE));
        current.append_characters("2", Attribute::CONTENT);
        let next = Snapshot::content("12");
        let aligned = prefix(&current, &next, &Reformatting);
        assert_eq!(aligned, Alignment { lhs: 3, rhs: 2 });
    }

    #[test]
    fn insertable_rhs_is_skipped() {
        let current = Snapshot::content("5");
        let mut next = Snapshot::decoration("$");
        next.append_characters("5", Attribute::CONTENT);
        let aligned = prefix(&current, &next, &Reformatting);
        assert_eq!(aligned, Alignment { lhs: 1, rhs: 2 });
    }

    #[test]
    fn content_mismatch_stops() {
        let current = Snapshot::content("12");
        let next = Snapshot::content("13");
        assert_eq!(
            prefix(&current, &next, &Reformatting),
            Alignment { lhs: 1, rhs: 1 }
        );
    }
}
