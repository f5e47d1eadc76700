#![no_main]

use diffable_text::{Field, Reformatting, Snapshot, Symbol, similarities};
use libfuzzer_sys::fuzz_target;

fn snapshot(bytes: &[u8]) -> Snapshot {
    bytes
        .iter()
        .map(|&b| match b % 4 {
            0 => Symbol::separator(','),
            1 => Symbol::decoration('$'),
            _ => Symbol::content(char::from(b'0' + b % 10)),
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&caret, rest)) = data.split_first() else {
        return;
    };
    let split = rest.len() / 2;
    let current = snapshot(&rest[..split]);
    let next = snapshot(&rest[split..]);

    // Alignment never consumes more than either side holds.
    let prefix = similarities::prefix(current.symbols(), next.symbols(), &Reformatting);
    assert!(prefix.lhs <= current.len() && prefix.rhs <= next.len());
    let suffix = similarities::suffix(current.symbols(), next.symbols(), &Reformatting);
    assert!(suffix.lhs <= current.len() && suffix.rhs <= next.len());

    // Carrying a selection across must keep it ordered and in range.
    let mut field = Field::caret(current, usize::from(caret));
    field.update_snapshot(next);
    let selection = field.selection();
    assert!(selection.start <= selection.end);
    assert!(selection.end <= field.snapshot().len());
});
