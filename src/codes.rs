//! mIRC formatting control bytes.
//!
//! Six byte values embedded in message text carry formatting instead of
//! content. This module defines them, provides quick predicates over raw
//! lines, and builds formatted text for the outgoing path. Full
//! interpretation (stripping plus style-run extraction) lives in
//! [`crate::parse`].

use std::borrow::Cow;

use crate::palette::IrcColor;

/// Color code: `0x03` followed by `N` or `N,M` (1–2 digit palette indices).
pub const COLOR: u8 = 0x03;
/// Bold toggle.
pub const BOLD: u8 = 0x02;
/// Italic toggle.
pub const ITALIC: u8 = 0x1D;
/// Underline toggle.
pub const UNDERLINE: u8 = 0x1F;
/// Reverse-video toggle.
pub const REVERSE: u8 = 0x16;
/// Reset: drop all active formatting.
pub const RESET: u8 = 0x0F;

/// Whether `byte` is one of the six recognized formatting control bytes.
#[inline]
pub fn is_format_byte(byte: u8) -> bool {
    matches!(byte, COLOR | BOLD | ITALIC | UNDERLINE | REVERSE | RESET)
}

/// Extension methods for working with formatted IRC strings.
///
/// # Examples
///
/// ```
/// use slirc_fmt::FormattedStringExt;
///
/// assert!(!"plain text".is_formatted());
/// assert!("\x02bold\x02".is_formatted());
///
/// assert_eq!("\x0304red\x0f text".strip_formatting(), "red text");
/// ```
pub trait FormattedStringExt<'a> {
    /// Whether the string contains any formatting control byte.
    fn is_formatted(&self) -> bool;

    /// Remove every formatting control byte and its color parameters.
    ///
    /// Unlike [`crate::parse`], this always consumes malformed codes too:
    /// the result never contains a formatting byte. Borrows when the input
    /// has no formatting.
    fn strip_formatting(self) -> Cow<'a, str>;
}

impl<'a> FormattedStringExt<'a> for &'a str {
    fn is_formatted(&self) -> bool {
        self.bytes().any(is_format_byte)
    }

    fn strip_formatting(self) -> Cow<'a, str> {
        if !self.is_formatted() {
            return Cow::Borrowed(self);
        }
        Cow::Owned(strip(self))
    }
}

impl FormattedStringExt<'static> for String {
    fn is_formatted(&self) -> bool {
        self.as_str().is_formatted()
    }

    fn strip_formatting(self) -> Cow<'static, str> {
        if !self.as_str().is_formatted() {
            return Cow::Owned(self);
        }
        Cow::Owned(strip(&self))
    }
}

/// Unconditional strip: control bytes go, color parameters go, everything
/// else is copied through.
fn strip(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut seg = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !is_format_byte(bytes[i]) {
            i += 1;
            continue;
        }
        out.push_str(&input[seg..i]);
        if bytes[i] == COLOR {
            i += 1 + color_params_len(&bytes[i + 1..]);
        } else {
            i += 1;
        }
        seg = i;
    }
    out.push_str(&input[seg..]);
    out
}

/// Length in bytes of the `N` / `N,M` parameter sequence following a color
/// byte, zero if none.
fn color_params_len(rest: &[u8]) -> usize {
    let digits = |s: &[u8]| s.iter().take_while(|b| b.is_ascii_digit()).take(2).count();
    let fg = digits(rest);
    if fg == 0 {
        return 0;
    }
    let mut len = fg;
    if rest.get(len) == Some(&b',') {
        let bg = digits(&rest[len + 1..]);
        if bg > 0 {
            len += 1 + bg;
        }
    }
    len
}

/// Wrap `text` in bold toggles.
pub fn bold(text: &str) -> String {
    format!("{b}{text}{b}", b = BOLD as char)
}

/// Wrap `text` in italic toggles.
pub fn italic(text: &str) -> String {
    format!("{i}{text}{i}", i = ITALIC as char)
}

/// Wrap `text` in underline toggles.
pub fn underline(text: &str) -> String {
    format!("{u}{text}{u}", u = UNDERLINE as char)
}

/// Wrap `text` in reverse-video toggles.
pub fn reverse(text: &str) -> String {
    format!("{r}{text}{r}", r = REVERSE as char)
}

/// Color `text` with a foreground and optional background, terminated by a
/// reset.
///
/// Indices are always written as two digits so the code cannot swallow a
/// leading digit of the text itself.
pub fn colored(fg: IrcColor, bg: Option<IrcColor>, text: &str) -> String {
    match bg {
        Some(bg) => format!(
            "{c}{:02},{:02}{text}{r}",
            fg.index(),
            bg.index(),
            c = COLOR as char,
            r = RESET as char
        ),
        None => format!(
            "{c}{:02}{text}{r}",
            fg.index(),
            c = COLOR as char,
            r = RESET as char
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_formatted() {
        assert!(!"hello world".is_formatted());
        assert!("\x02bold\x02".is_formatted());
        assert!("tail reset\x0f".is_formatted());
        assert!(!"".is_formatted());
    }

    #[test]
    fn test_strip_borrows_plain_text() {
        let stripped = "no codes here".strip_formatting();
        assert!(matches!(stripped, Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_removes_codes_and_params() {
        assert_eq!("\x02bold\x02".strip_formatting(), "bold");
        assert_eq!("\x034,8warn\x0f ok".strip_formatting(), "warn ok");
        assert_eq!("\x0312,04x".strip_formatting(), "x");
    }

    #[test]
    fn test_strip_malformed_color() {
        // no digits after the color byte: byte still goes, text stays
        assert_eq!("\x03no digits".strip_formatting(), "no digits");
        // bare comma is not a background parameter
        assert_eq!("\x034,none".strip_formatting(), ",none");
    }

    #[test]
    fn test_strip_string_owned() {
        let s = String::from("\x1funder\x1f");
        assert_eq!(s.strip_formatting(), "under");
    }

    #[test]
    fn test_compose_helpers() {
        assert_eq!(bold("hi"), "\x02hi\x02");
        assert_eq!(underline("hi"), "\x1fhi\x1f");
        assert_eq!(colored(IrcColor::Red, None, "alert"), "\x0304alert\x0f");
        assert_eq!(
            colored(IrcColor::White, Some(IrcColor::Navy), "x"),
            "\x0300,02x\x0f"
        );
    }

    #[test]
    fn test_compose_survives_leading_digit() {
        // two-digit encoding keeps "1" out of the color parameter
        let s = colored(IrcColor::Green, None, "1st");
        assert_eq!(s.strip_formatting(), "1st");
    }
}
