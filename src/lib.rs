//! # slirc-fmt
//!
//! A Rust library for interpreting mIRC-style inline formatting codes in
//! IRC message text.
//!
//! ## Features
//!
//! - Single-pass, linear-time parsing of color/bold/italic/underline/
//!   reverse/reset control bytes
//! - Stripped plain text plus byte-offset style runs, ready to replay
//!   against a rich-text rendering surface
//! - The 16-color mIRC palette with render-ready channel-swapped values
//! - Explicit policy for malformed color codes (classic abort vs. keep
//!   the byte literal)
//! - Quick `is_formatted` / `strip_formatting` helpers and formatted-text
//!   composition for the outgoing path

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing formatted lines
//!
//! ```rust
//! use slirc_fmt::{parse, StyleKind};
//!
//! let parsed = parse("\x02\x034Hi\x0f there");
//! assert_eq!(parsed.text, "Hi there");
//!
//! // one bold run and one foreground run, both over "Hi"
//! assert_eq!(parsed.styles.len(), 2);
//! for run in &parsed.styles {
//!     assert_eq!(run.start..run.end, 0..2);
//! }
//! ```
//!
//! ### Stripping and composing
//!
//! ```rust
//! use slirc_fmt::{codes, FormattedStringExt, IrcColor};
//!
//! assert_eq!("\x0313pink\x0f!".strip_formatting(), "pink!");
//!
//! let outgoing = codes::colored(IrcColor::Red, None, "deploy failed");
//! assert!(outgoing.is_formatted());
//! ```

pub mod codes;
pub mod error;
pub mod palette;
pub mod parse;
pub mod style;

pub use self::codes::FormattedStringExt;
pub use self::error::InvalidColorIndex;
pub use self::palette::IrcColor;
pub use self::parse::{parse, parse_with_policy, InvalidColorPolicy};
pub use self::style::{StyleKind, StyleRun, StyledText};
