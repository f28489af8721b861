//! Terminal output line types.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Presentation class of an output line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineKind {
    /// Plain foreground text
    #[default]
    Neutral,
    /// Success message (green)
    Success,
    /// Error message (red)
    Error,
    /// Info message (yellow)
    Info,
    /// ASCII art (preformatted, with glow)
    Ascii,
}

impl LineKind {
    /// Stable lowercase name, used as a CSS hook by the view.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Ascii => "ascii",
        }
    }
}

/// A single line of terminal output with a unique ID.
///
/// `text` may embed simple inline markup (`<span class="highlight">`).
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keyed rendering
    pub id: usize,
    pub kind: LineKind,
    pub text: String,
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }

    pub fn neutral(s: impl Into<String>) -> Self {
        Self::new(LineKind::Neutral, s)
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(LineKind::Success, s)
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(LineKind::Error, s)
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(LineKind::Info, s)
    }

    pub fn ascii(s: impl Into<String>) -> Self {
        Self::new(LineKind::Ascii, s)
    }

    /// Blank neutral line.
    pub fn empty() -> Self {
        Self::neutral("")
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs never compare
        self.kind == other.kind && self.text == other.text
    }
}
