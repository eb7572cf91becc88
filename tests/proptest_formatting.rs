//! Property-based tests for the formatting parser.
//!
//! Uses proptest to generate lines with and without embedded formatting
//! codes and verify that:
//! 1. Parsing never panics on any input
//! 2. Run offsets always land inside the stripped text
//! 3. Stripping accounts for every consumed byte
//! 4. A full pass is idempotent

use proptest::prelude::*;
use slirc_fmt::{
    parse, parse_with_policy, FormattedStringExt, InvalidColorPolicy, StyleKind,
};

// =============================================================================
// STRATEGIES - Generators for formatted lines
// =============================================================================

/// Literal message text: printable, no control bytes.
fn literal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?'#@:/-]{0,40}").expect("valid regex")
}

/// One formatting token: a toggle byte, a reset, or a well-formed color
/// code (two-digit indices, space-terminated so a digit in the following
/// literal text cannot turn the code malformed).
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\x02".to_string()),
        Just("\x1d".to_string()),
        Just("\x1f".to_string()),
        Just("\x16".to_string()),
        Just("\x0f".to_string()),
        (0u8..=99).prop_map(|fg| format!("\x03{:02} ", fg)),
        (0u8..=99, 0u8..=99).prop_map(|(fg, bg)| format!("\x03{:02},{:02} ", fg, bg)),
    ]
}

/// A line interleaving literal text with well-formed formatting tokens.
fn formatted_line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((literal_strategy(), token_strategy()), 0..8).prop_map(|pieces| {
        let mut line = String::new();
        for (text, token) in pieces {
            line.push_str(&text);
            line.push_str(&token);
        }
        line
    })
}

/// Arbitrary text, including lone/malformed control bytes.
fn arbitrary_line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[\x02\x03\x0f\x16\x1d\x1f,a-z0-9 ]{0,60}").expect("valid regex")
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Parsing must never panic, whatever the input looks like.
    #[test]
    fn parse_never_panics(line in arbitrary_line_strategy()) {
        let _ = parse(&line);
        let _ = parse_with_policy(&line, InvalidColorPolicy::KeepLiteral);
        let _ = line.as_str().strip_formatting();
    }

    /// Every run lands inside the stripped text.
    #[test]
    fn offsets_are_valid(line in arbitrary_line_strategy()) {
        let parsed = parse(&line);
        for run in &parsed.styles {
            prop_assert!(run.start <= run.end);
            prop_assert!(run.end <= parsed.text.len());
            prop_assert!(parsed.text.is_char_boundary(run.start));
            prop_assert!(parsed.text.is_char_boundary(run.end));
        }
    }

    /// Color runs carry a color, other kinds never do, and reset runs
    /// are never emitted.
    #[test]
    fn color_presence_matches_kind(line in formatted_line_strategy()) {
        let parsed = parse(&line);
        for run in &parsed.styles {
            match run.kind {
                StyleKind::Foreground | StyleKind::Background => {
                    prop_assert!(run.color.is_some())
                }
                StyleKind::Reset => prop_assert!(false, "reset run emitted"),
                _ => prop_assert!(run.color.is_none()),
            }
        }
    }

    /// On well-formed lines the stripped length equals the input length
    /// minus every control byte and color parameter.
    #[test]
    fn length_accounting(line in formatted_line_strategy()) {
        let parsed = parse(&line);
        prop_assert!(parsed.text.len() <= line.len());
        // well-formed input: the literal text is exactly what survives
        let stripped = line.as_str().strip_formatting();
        prop_assert_eq!(&parsed.text, stripped.as_ref());
    }

    /// A second pass over fully parsed text finds nothing to do.
    #[test]
    fn full_pass_is_idempotent(line in formatted_line_strategy()) {
        let once = parse(&line);
        let twice = parse(&once.text);
        prop_assert_eq!(&twice.text, &once.text);
        prop_assert!(twice.styles.is_empty());
    }

    /// The corrected policy interprets every code: only literal color
    /// bytes may survive in the text.
    #[test]
    fn keep_literal_leaves_only_color_bytes(line in arbitrary_line_strategy()) {
        let parsed = parse_with_policy(&line, InvalidColorPolicy::KeepLiteral);
        for b in parsed.text.bytes() {
            prop_assert!(b != 0x02 && b != 0x0f && b != 0x16 && b != 0x1d && b != 0x1f);
        }
    }
}
