//! The formatting parser: one pass from raw line to stripped text plus
//! style runs.
//!
//! The input is consumed left to right. Literal bytes are copied into a
//! forward accumulator; when a control byte is hit, the accumulator length
//! *at that moment* is the run boundary. Because the stripped text only
//! ever grows at the tail, an offset recorded this way stays valid in the
//! final text, so runs need no remapping pass and the whole transform is
//! linear in the input length.
//!
//! Open runs are tracked in a per-kind ledger of indices into the run
//! list. A toggle byte closes the open run of its kind or opens a new one;
//! a reset byte closes everything; the end-of-input sweep closes whatever
//! is still open at the final text length, so no unterminated run ever
//! reaches the caller.

use nom::{
    bytes::complete::take_while_m_n,
    error::{Error, ErrorKind},
    IResult,
};

use crate::codes::{is_format_byte, BOLD, COLOR, ITALIC, RESET, REVERSE, UNDERLINE};
use crate::palette::IrcColor;
use crate::style::{StyleKind, StyleRun, StyledText};

#[cfg(feature = "tracing")]
use tracing::trace;
#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($t:tt)*) => {};
}

/// What to do when a color byte is not followed by a valid 1–2 digit
/// foreground index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidColorPolicy {
    /// Stop scanning at the malformed code. The color byte itself is
    /// consumed, open runs are closed at the end of the stripped prefix,
    /// and the rest of the line is appended verbatim, later control
    /// bytes included and uninterpreted. This matches the classic client
    /// behavior and is the default.
    #[default]
    AbortScan,
    /// Keep the color byte as literal text and carry on scanning. No
    /// client renders a bare color byte, but this policy never leaves a
    /// later code uninterpreted.
    KeepLiteral,
}

/// Parse a line with the default [`InvalidColorPolicy::AbortScan`] policy.
///
/// # Examples
///
/// ```
/// use slirc_fmt::{parse, IrcColor, StyleKind};
///
/// let parsed = parse("\x034Hello\x0f World");
/// assert_eq!(parsed.text, "Hello World");
/// assert_eq!(parsed.styles.len(), 1);
/// assert_eq!(parsed.styles[0].kind, StyleKind::Foreground);
/// assert_eq!(parsed.styles[0].start..parsed.styles[0].end, 0..5);
/// assert_eq!(parsed.styles[0].color, Some(IrcColor::Red.resolved()));
/// ```
pub fn parse(input: &str) -> StyledText {
    parse_with_policy(input, InvalidColorPolicy::default())
}

/// Parse a line into stripped text plus style runs.
///
/// Never fails: malformed input yields a valid, possibly partial, result
/// (see [`InvalidColorPolicy`] for the one behavioral choice involved).
pub fn parse_with_policy(input: &str, policy: InvalidColorPolicy) -> StyledText {
    let bytes = input.as_bytes();
    let mut text = String::with_capacity(input.len());
    let mut styles: Vec<StyleRun> = Vec::new();
    let mut open = OpenRuns::default();

    // start of the literal segment not yet copied into `text`
    let mut seg = 0;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if !is_format_byte(byte) {
            i += 1;
            continue;
        }
        text.push_str(&input[seg..i]);
        let at = text.len();

        match byte {
            BOLD => open.toggle(StyleKind::Bold, at, &mut styles),
            ITALIC => open.toggle(StyleKind::Italic, at, &mut styles),
            UNDERLINE => open.toggle(StyleKind::Underline, at, &mut styles),
            REVERSE => open.toggle(StyleKind::Reverse, at, &mut styles),
            RESET => open.close_all(at, &mut styles),
            _ => {
                // COLOR
                match color_index(&bytes[i + 1..]) {
                    Ok((rest, fg)) => {
                        i = bytes.len() - rest.len();
                        open.reopen_color(StyleKind::Foreground, at, fg, &mut styles);
                        // optional ",M" background; a failed background
                        // parse leaves the comma as literal text and the
                        // scan continues
                        if bytes.get(i) == Some(&b',') {
                            if let Ok((rest, bg)) = color_index(&bytes[i + 1..]) {
                                i = bytes.len() - rest.len();
                                open.reopen_color(StyleKind::Background, at, bg, &mut styles);
                            }
                        }
                        seg = i;
                        continue;
                    }
                    Err(_) => match policy {
                        InvalidColorPolicy::AbortScan => {
                            trace!(offset = i, "malformed color code, aborting scan");
                            open.close_all(at, &mut styles);
                            text.push_str(&input[i + 1..]);
                            return StyledText { text, styles };
                        }
                        InvalidColorPolicy::KeepLiteral => {
                            text.push(COLOR as char);
                        }
                    },
                }
            }
        }
        i += 1;
        seg = i;
    }

    text.push_str(&input[seg..]);
    open.close_all(text.len(), &mut styles);

    trace!(
        stripped = text.len(),
        runs = styles.len(),
        "parsed formatted line"
    );
    StyledText { text, styles }
}

/// A 1–2 digit palette index. Three or more digits is malformed, not
/// "take the first two".
fn color_index(input: &[u8]) -> IResult<&[u8], u8> {
    let (rest, digits) = take_while_m_n(1, 2, |b: u8| b.is_ascii_digit())(input)?;
    if rest.first().is_some_and(|b| b.is_ascii_digit()) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::TooLarge)));
    }
    // at most two ASCII digits, cannot overflow
    let value = digits.iter().fold(0u8, |acc, d| acc * 10 + (d - b'0'));
    Ok((rest, value))
}

/// Per-kind handles to the runs still open during the scan, as indices
/// into the run list.
#[derive(Default)]
struct OpenRuns([Option<usize>; 6]);

impl OpenRuns {
    fn slot(&mut self, kind: StyleKind) -> &mut Option<usize> {
        let idx = match kind {
            StyleKind::Foreground => 0,
            StyleKind::Background => 1,
            StyleKind::Bold => 2,
            StyleKind::Italic => 3,
            StyleKind::Underline => 4,
            StyleKind::Reverse => 5,
            // reset never opens a run, so it has no slot
            StyleKind::Reset => unreachable!("reset is not trackable"),
        };
        &mut self.0[idx]
    }

    /// Toggle semantics: close the open run of this kind, or open a new
    /// one at `at`.
    fn toggle(&mut self, kind: StyleKind, at: usize, styles: &mut Vec<StyleRun>) {
        let slot = self.slot(kind);
        match slot.take() {
            Some(run) => styles[run].end = at,
            None => {
                *slot = Some(styles.len());
                styles.push(StyleRun {
                    kind,
                    start: at,
                    end: at,
                    color: None,
                });
            }
        }
    }

    /// Color semantics: a new code always starts a new run, closing any
    /// open run of the same kind at the same position first.
    fn reopen_color(&mut self, kind: StyleKind, at: usize, index: u8, styles: &mut Vec<StyleRun>) {
        let slot = self.slot(kind);
        if let Some(run) = slot.take() {
            styles[run].end = at;
        }
        *slot = Some(styles.len());
        styles.push(StyleRun {
            kind,
            start: at,
            end: at,
            color: Some(IrcColor::from_index_lossy(index).resolved()),
        });
    }

    /// Reset semantics: close every open run of every kind at `at`.
    fn close_all(&mut self, at: usize, styles: &mut [StyleRun]) {
        for slot in self.0.iter_mut() {
            if let Some(run) = slot.take() {
                styles[run].end = at;
            }
        }
    }
}
