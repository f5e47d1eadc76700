#![no_main]

use arbitrary::Arbitrary;
use diffable::prelude::*;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Edit {
    start: u8,
    length: u8,
    replacement: String,
}

#[derive(Debug, Arbitrary)]
struct Session {
    locale: u8,
    min: i32,
    max: i32,
    integer: u8,
    fraction: u8,
    edits: Vec<Edit>,
}

fuzz_target!(|session: Session| {
    let presets = Locale::presets();
    let locale = presets[usize::from(session.locale) % presets.len()].clone();
    let bounds = Bounds::new(f64::from(session.min), f64::from(session.max));
    let precision = Precision::digits(
        1..=usize::from(session.integer % 16),
        0..=usize::from(session.fraction % 16),
    );
    let style = NumberTextStyle::new(locale)
        .with_prefix("<")
        .with_suffix(">")
        .with_bounds(bounds)
        .with_precision(precision);

    let mut context = Context::new(style, 0.0);
    context.focus();

    for edit in session.edits.iter().take(64) {
        let end = context.snapshot().map_or(0, Snapshot::len);
        let start = usize::from(edit.start).min(end);
        let stop = (start + usize::from(edit.length)).min(end);
        let before = context.clone();

        match context.merge(start..stop, &edit.replacement) {
            // Accepted values must lie inside the bounds.
            Ok(()) => assert!(bounds.contains(*context.value())),
            // Declined edits leave everything as it was.
            Err(_) => {
                assert_eq!(context.text(), before.text());
                assert_eq!(context.selection(), before.selection());
            }
        }

        let selection = context.selection().unwrap_or_default();
        assert!(selection.start <= selection.end);
    }
});
