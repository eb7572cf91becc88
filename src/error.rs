//! Error types for the formatting library.
//!
//! Parsing itself is total: malformed input yields a partial but valid
//! result, never an error. The only fallible operation in the public API
//! is strict palette-index conversion.

use thiserror::Error;

/// A palette index outside the valid 0–15 range.
///
/// Returned by [`IrcColor::try_from`](crate::IrcColor). The parser itself
/// never produces this; it folds out-of-range indices onto the base
/// palette instead (see [`crate::IrcColor::from_index_lossy`]).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("color index out of range: {0} (palette has 16 entries)")]
pub struct InvalidColorIndex(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InvalidColorIndex(42);
        assert_eq!(
            format!("{}", err),
            "color index out of range: 42 (palette has 16 entries)"
        );
    }
}
