//! Command execution result type.

use crate::models::OutputLine;

/// A page-level side effect requested by a command.
///
/// Applied by the view after the immediate output has been printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Replace the current page (`open home`, `exit`).
    Navigate(String),
    /// Open a URL in a new tab.
    OpenTab(String),
    /// Smooth-scroll to the element with this id.
    ScrollTo(String),
    /// Wipe the scrollback.
    ClearScreen,
}

/// Output printed after a delay, for commands that emit over time.
#[derive(Clone, Debug, PartialEq)]
pub struct Deferred {
    /// Wait before printing, in milliseconds.
    pub delay_ms: u32,
    pub lines: Vec<OutputLine>,
}

/// Result of executing a command.
///
/// `output` is printed immediately; `deferred` batches follow in order. The
/// submission is complete only once the last batch has been printed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandResult {
    pub output: Vec<OutputLine>,
    pub effect: Option<Effect>,
    pub deferred: Vec<Deferred>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// Create a result with a single line.
    pub fn line(line: OutputLine) -> Self {
        Self::output(vec![line])
    }

    /// Create an empty result (no output, no effect).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach a side effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Queue lines to print after `delay_ms`.
    pub fn then_after(mut self, delay_ms: u32, lines: Vec<OutputLine>) -> Self {
        self.deferred.push(Deferred { delay_ms, lines });
        self
    }

    /// Whether the view must keep draining after the immediate output.
    pub fn is_pending(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Total delay before the last deferred batch prints.
    pub fn total_delay_ms(&self) -> u32 {
        self.deferred.iter().map(|d| d.delay_ms).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let result = CommandResult::line(OutputLine::success("ok"))
            .with_effect(Effect::Navigate("/".into()))
            .then_after(500, vec![OutputLine::neutral("a")])
            .then_after(250, vec![]);

        assert_eq!(result.output.len(), 1);
        assert_eq!(result.effect, Some(Effect::Navigate("/".into())));
        assert!(result.is_pending());
        assert_eq!(result.total_delay_ms(), 750);
    }

    #[test]
    fn test_empty() {
        let result = CommandResult::empty();
        assert!(result.output.is_empty());
        assert!(result.effect.is_none());
        assert!(!result.is_pending());
    }
}
