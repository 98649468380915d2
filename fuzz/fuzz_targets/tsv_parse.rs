//! Fuzz target for selection TSV parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the TSV parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use gostyle::tsv::from_tsv_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    if let Ok(set) = from_tsv_slice(data) {
        // Anything that parses must export and parse back to the same set.
        let text = set.export().expect("export parsed set");
        let again = from_tsv_slice(text.as_bytes()).expect("re-parse export");
        assert_eq!(set, again);
    }
});
