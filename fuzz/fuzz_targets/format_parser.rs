//! Fuzz target for formatting-code parsing
//!
//! Feeds arbitrary lines to the parser under both malformed-color
//! policies and checks the offset invariants renderers depend on.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

use slirc_fmt::{parse_with_policy, FormattedStringExt, InvalidColorPolicy};

fuzz_target!(|data: &[u8]| {
    // The parser takes str input; skip non-UTF-8 and oversized lines
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 512 {
            return;
        }

        for policy in [InvalidColorPolicy::AbortScan, InvalidColorPolicy::KeepLiteral] {
            let parsed = parse_with_policy(input, policy);
            assert!(parsed.text.len() <= input.len());
            for run in &parsed.styles {
                assert!(run.start <= run.end);
                assert!(run.end <= parsed.text.len());
                assert!(parsed.text.is_char_boundary(run.start));
                assert!(parsed.text.is_char_boundary(run.end));
            }
        }

        // Stripping must never panic either
        let _ = input.strip_formatting();
    }
});
