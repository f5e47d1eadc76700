//! Property-based invariant tests for carets, fields, and alignment.
//!
//! 1. Autocorrected bounds never rest between two passthrough neighbors
//!    when the snapshot has any interactive symbol.
//! 2. Autocorrected selections stay ordered and inside the snapshot.
//! 3. Regrouping a snapshot keeps the caret after the same content symbol.
//! 4. Offset translation round-trips for every caret.
//! 5. Alignment never consumes more than either side holds.

use diffable_text::{
    Attribute, Direction, Encoding, Field, Intent, Positions, Reformatting, Snapshot, Symbol,
    similarities,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        3 => proptest::char::range('0', '9').prop_map(Symbol::content),
        1 => Just(Symbol::separator(',')),
        1 => prop_oneof![Just('$'), Just(' '), Just('k'), Just('r')].prop_map(Symbol::decoration),
    ]
}

fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    proptest::collection::vec(arb_symbol(), 0..24).prop_map(Snapshot::from_iter)
}

fn arb_direction() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Forwards)),
        Just(Some(Direction::Backwards)),
    ]
}

fn grouped(digits: &str, size: usize) -> Snapshot {
    let count = digits.chars().count();
    let mut snapshot = Snapshot::new();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (count - index) % size == 0 {
            snapshot.append(Symbol::separator(','));
        }
        snapshot.append(Symbol::content(digit));
    }
    snapshot
}

/// Caret directly after the `k`-th content symbol.
fn caret_after_content(snapshot: &Snapshot, k: usize) -> usize {
    if k == 0 {
        return 0;
    }
    snapshot
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_content())
        .nth(k - 1)
        .map(|(i, _)| i + 1)
        .unwrap_or(snapshot.len())
}

fn content_before(snapshot: &Snapshot, caret: usize) -> usize {
    snapshot.symbols()[..caret]
        .iter()
        .filter(|s| s.is_content())
        .count()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Caret validity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn corrected_bounds_avoid_passthrough(
        snapshot in arb_snapshot(),
        a in 0usize..30,
        b in 0usize..30,
        lower in arb_direction(),
        upper in arb_direction(),
    ) {
        let mut field = Field::at_end(snapshot.clone());
        field.update_selection(a.min(b)..a.max(b), Intent { lower, upper });
        let selection = field.selection();

        prop_assert!(selection.start <= selection.end);
        prop_assert!(selection.end <= snapshot.len());

        if snapshot.has_interactive_symbols() {
            for caret in [selection.start, selection.end] {
                let peek = snapshot.peek(caret);
                prop_assert!(
                    !(peek.lhs_is_passthrough() && peek.rhs_is_passthrough()),
                    "caret {} of {:?} rests inside decoration", caret, snapshot.text()
                );
            }
        } else {
            for caret in [selection.start, selection.end] {
                prop_assert!(caret == 0 || caret == snapshot.len());
            }
        }
    }
}

proptest! {
    #[test]
    fn correction_is_idempotent(snapshot in arb_snapshot(), a in 0usize..30, b in 0usize..30) {
        let mut field = Field::at_end(snapshot);
        field.update_selection(a.min(b)..a.max(b), Intent::NONE);
        let once = field.selection();
        field.update_selection(once.clone(), Intent::NONE);
        prop_assert_eq!(field.selection(), once);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Alignment stability under regrouping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn regrouping_keeps_caret_on_content(
        digits in "[0-9]{1,12}",
        k in 0usize..13,
        from in 1usize..5,
        to in 1usize..5,
    ) {
        let k = k.min(digits.len());
        let current = grouped(&digits, from);
        let next = grouped(&digits, to);
        let caret = caret_after_content(&current, k);

        let mut field = Field::caret(current, caret);
        field.update_snapshot(next);

        let selection = field.selection();
        prop_assert!(selection.is_empty());
        prop_assert_eq!(content_before(field.snapshot(), selection.end), k);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Offset round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_round_trip(text in "\\PC{0,16}") {
        let snapshot = Snapshot::content(&text);
        for encoding in [Encoding::Utf8, Encoding::Utf16, Encoding::Character] {
            let positions = Positions::new(&snapshot, encoding);
            prop_assert_eq!(positions.end(), encoding.measure(&text));
            for caret in 0..=snapshot.len() {
                prop_assert_eq!(positions.caret(positions.offset(caret)), caret);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Alignment bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn alignment_stays_in_bounds(lhs in arb_snapshot(), rhs in arb_snapshot()) {
        let p = similarities::prefix(&lhs, &rhs, &Reformatting);
        let s = similarities::suffix(&lhs, &rhs, &Reformatting);
        prop_assert!(p.lhs <= lhs.len() && p.rhs <= rhs.len());
        prop_assert!(s.lhs <= lhs.len() && s.rhs <= rhs.len());
    }

    #[test]
    fn identical_snapshots_align_fully(snapshot in arb_snapshot()) {
        let p = similarities::prefix(&snapshot, &snapshot, &Reformatting);
        prop_assert_eq!(p.lhs, snapshot.len());
        prop_assert_eq!(p.rhs, snapshot.len());
    }
}

#[test]
fn decoration_attribute_is_passthrough() {
    assert!(Attribute::DECORATION.is_passthrough());
}
