//! Style runs: the output side of the formatting parser.
//!
//! A parsed line is plain text plus an ordered list of [`StyleRun`]s. Each
//! run describes one formatting instruction over a half-open byte range of
//! the stripped text, ready to be replayed against a rich-text surface
//! (`apply_effect(kind, start, end, color?)` on the rendering side).

/// The kind of formatting a [`StyleRun`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleKind {
    /// Foreground (text) color. Carries a resolved color value.
    Foreground,
    /// Background color. Carries a resolved color value.
    Background,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Reverse video (swap foreground/background). Tracked by the parser
    /// but renderers commonly ignore it; reserved for future use.
    Reverse,
    /// Reset all formatting to defaults. Part of the renderer's effect
    /// vocabulary; the parser itself never emits a run of this kind, a
    /// reset byte only closes the runs that are open.
    Reset,
}

/// One formatting instruction over the stripped text.
///
/// `start` and `end` are byte offsets into [`StyledText::text`], with
/// `start <= end <= text.len()`. A run with `start == end` is legal (the
/// formatting was toggled on and off with no text in between) and may be
/// skipped by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRun {
    /// What to apply over the range.
    pub kind: StyleKind,
    /// Start byte offset into the stripped text (inclusive).
    pub start: usize,
    /// End byte offset into the stripped text (exclusive).
    pub end: usize,
    /// Resolved color value for `Foreground`/`Background` runs, already in
    /// the rendering surface's byte order (`0x00BBGGRR`, see
    /// [`crate::palette::IrcColor::resolved`]). `None` for all other kinds.
    pub color: Option<u32>,
}

impl StyleRun {
    /// Byte length of the stripped-text range this run covers.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the run covers no text at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The result of parsing one formatted line: stripped text plus style runs.
///
/// Runs are ordered by *discovery* order (the order their opening control
/// byte appeared in the input), which is not necessarily `start` order:
/// a color code and a bold toggle at the same position produce runs with
/// equal `start`. Consumers that need runs sorted by `start` must sort.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledText {
    /// The line with all interpreted control bytes removed.
    pub text: String,
    /// Formatting instructions over `text`, in discovery order.
    pub styles: Vec<StyleRun>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_len() {
        let run = StyleRun {
            kind: StyleKind::Bold,
            start: 3,
            end: 7,
            color: None,
        };
        assert_eq!(run.len(), 4);
        assert!(!run.is_empty());
    }

    #[test]
    fn test_empty_run() {
        let run = StyleRun {
            kind: StyleKind::Underline,
            start: 5,
            end: 5,
            color: None,
        };
        assert_eq!(run.len(), 0);
        assert!(run.is_empty());
    }
}
