#![no_main]

use diffable_text::{Encoding, Positions, Snapshot};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let snapshot = Snapshot::content(text);

    for encoding in [Encoding::Utf8, Encoding::Utf16, Encoding::Character] {
        let positions = Positions::new(&snapshot, encoding);
        assert_eq!(positions.end(), encoding.measure(text));

        // caret → offset → caret is the identity.
        for caret in 0..=snapshot.len() {
            assert_eq!(positions.caret(positions.offset(caret)), caret);
        }

        // Any offset snaps to a caret at or before it.
        for offset in 0..=positions.end() + 1 {
            let caret = positions.caret(offset);
            assert!(caret <= snapshot.len());
            assert!(positions.offset(caret) <= offset);
        }
    }
});
