//! Environment seam between command handlers and the page they run in.

use chrono::NaiveDateTime;

/// Browser viewport facts shown by `neofetch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Logical CPU cores.
    pub cores: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            cores: 4,
        }
    }
}

/// What handlers may ask of the surrounding page.
pub trait Host {
    /// Local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    fn viewport(&self) -> Viewport;

    /// Whether the page has an element with this id to scroll to.
    fn has_anchor(&self, id: &str) -> bool;
}

/// A host with fixed answers, for running the terminal off-browser.
#[derive(Clone, Debug)]
pub struct StaticHost {
    pub now: NaiveDateTime,
    pub viewport: Viewport,
    pub anchors: Vec<String>,
}

impl Host for StaticHost {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn has_anchor(&self, id: &str) -> bool {
        self.anchors.iter().any(|a| a == id)
    }
}
