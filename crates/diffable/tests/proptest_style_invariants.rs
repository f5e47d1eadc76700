//! Property-based invariant tests for styles and contexts.
//!
//! 1. Interpreted snapshots read back to their value in every locale.
//! 2. Interpreted values always lie inside the bounds.
//! 3. A declined merge leaves the context untouched.
//! 4. After any accepted merge the caret rests on a valid boundary.
//! 5. Pattern values never exceed the slot count.

use diffable::number::{Lexicon, Number};
use diffable::prelude::*;
use diffable::text::{Bound, carets};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_locale() -> impl Strategy<Value = Locale> {
    proptest::sample::select(Locale::presets())
}

fn arb_replacement() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::char::range('0', '9').prop_map(String::from),
        1 => Just(String::new()),
        1 => Just(".".to_string()),
        1 => Just("-".to_string()),
        1 => Just(",".to_string()),
        1 => "[0-9.,x-]{2,5}",
    ]
}

fn arb_edits() -> impl Strategy<Value = Vec<(usize, usize, String)>> {
    proptest::collection::vec((0usize..16, 0usize..4, arb_replacement()), 1..24)
}

fn currency() -> Context<NumberTextStyle<f64>> {
    let style = NumberTextStyle::new(Locale::en_us())
        .with_prefix("$")
        .with_suffix(" USD")
        .with_bounds(Bounds::from(-9_999.0..=9_999.0))
        .with_precision(Precision::digits(1..=4, 0..=2));
    let mut context = Context::new(style, 0.0);
    context.focus();
    context
}

fn read_back(snapshot: &Snapshot, lexicon: &Lexicon) -> Option<f64> {
    let number = Number::parse(&snapshot.characters(), lexicon).ok()?;
    f64::from_ascii(&number.to_ascii())
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Interpret
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpreted_snapshots_read_back(cents in -99_999_999i64..99_999_999, locale in arb_locale()) {
        let value = cents as f64 / 100.0;
        let style = NumberTextStyle::<f64>::new(locale)
            .with_precision(Precision::digits(1..=6, 0..=2));
        let commit = style.interpret(&value);
        prop_assert_eq!(commit.value, value);
        prop_assert_eq!(read_back(&commit.snapshot, style.lexicon()), Some(value));
    }

    #[test]
    fn interpreted_values_are_in_bounds(
        a in -1_000i32..1_000,
        b in -1_000i32..1_000,
        value in any::<i32>(),
    ) {
        let bounds = Bounds::new(a, b);
        let style = NumberTextStyle::<i32>::new(Locale::en_us()).with_bounds(bounds);
        let commit = style.interpret(&value);
        prop_assert!(bounds.contains(commit.value));
        prop_assert_eq!(commit.value, bounds.clamp(value));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Merge through a context
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn declined_merges_change_nothing(edits in arb_edits()) {
        let mut context = currency();
        for (start, length, replacement) in edits {
            let before = context.clone();
            let end = context.text().chars().count();
            let start = start.min(end);
            let range = start..(start + length).min(end);
            if context.merge(range, &replacement).is_err() {
                prop_assert_eq!(context.text(), before.text());
                prop_assert_eq!(context.selection(), before.selection());
                prop_assert_eq!(context.value(), before.value());
            }
        }
    }

    #[test]
    fn carets_stay_valid(edits in arb_edits()) {
        let mut context = currency();
        for (start, length, replacement) in edits {
            let end = context.text().chars().count();
            let start = start.min(end);
            let _ = context.merge(start..(start + length).min(end), &replacement);

            let snapshot = context.snapshot().cloned().unwrap_or_default();
            let selection = context.selection().unwrap_or_default();
            if snapshot.has_interactive_symbols() {
                prop_assert!(carets::is_valid(&snapshot, selection.end, Bound::Single));
            }
            prop_assert!(context.value().abs() <= 9_999.0);
            prop_assert_eq!(read_back(&snapshot, &Lexicon::new(Locale::en_us())), Some(*context.value()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Patterns
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pattern_values_fit(edits in arb_edits(), hidden in any::<bool>()) {
        let style = PatternTextStyle::new("(###) ###-####")
            .with_placeholder('#', |c| c.is_ascii_digit())
            .with_hidden(hidden);
        let capacity = style.capacity();
        let mut context = Context::new(style, String::new());
        context.focus();
        for (start, length, replacement) in edits {
            let end = context.text().chars().count();
            let start = start.min(end);
            let _ = context.merge(start..(start + length).min(end), &replacement);
            prop_assert!(context.value().chars().count() <= capacity);
            prop_assert!(context.value().chars().all(|c| c.is_ascii_digit()));
        }
    }
}
