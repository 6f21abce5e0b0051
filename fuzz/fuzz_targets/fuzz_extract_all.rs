#![no_main]

use afthumb::formats::png::PNG_SIGNATURE;
use afthumb::{extract_all, select_best, SelectionStrategy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let found = extract_all(data);

    let mut last_end = 0;
    for c in &found {
        assert!(c.offset() >= last_end);
        assert!(c.end() <= data.len());
        assert_eq!(&c.as_bytes()[..8], &PNG_SIGNATURE);
        last_end = c.end();
    }

    for strategy in [
        SelectionStrategy::Smallest,
        SelectionStrategy::Largest,
        SelectionStrategy::First,
    ] {
        assert_eq!(select_best(&found, strategy).is_some(), !found.is_empty());
    }
});
