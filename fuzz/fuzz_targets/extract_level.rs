#![no_main]

use bstr::ByteSlice;
use libfuzzer_sys::fuzz_target;
use logtally::level::{extract_level, strip_brackets};

fuzz_target!(|data: &[u8]| {
    match extract_level(data) {
        None => assert!(data.trim().is_empty()),
        Some(level) => {
            assert!(!level.chars().any(char::is_whitespace));
            assert_eq!(strip_brackets(level), level);
        }
    }
});
