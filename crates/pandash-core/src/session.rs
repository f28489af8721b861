//! Per-session terminal state.

/// Working directory and command history of one terminal session.
///
/// Created at session start and mutated only by the interpreter and the
/// history-recall keys. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    current_path: String,
    history: Vec<String>,
    /// Steps back from the most recent entry; `None` when not browsing.
    cursor: Option<usize>,
}

impl SessionState {
    /// Start a session in `home`.
    pub fn new(home: impl Into<String>) -> Self {
        Self {
            current_path: home.into(),
            history: Vec::new(),
            cursor: None,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub(crate) fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// Submitted commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Append a submitted command and stop browsing.
    ///
    /// Blank input is not recorded.
    pub fn record(&mut self, cmd: &str) {
        let cmd = cmd.trim();
        if cmd.is_empty() {
            return;
        }
        self.history.push(cmd.to_string());
        self.cursor = None;
    }

    /// Move one entry further back (ArrowUp).
    ///
    /// Returns the recalled entry, or `None` when history is empty. Clamps
    /// at the oldest entry.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let oldest = self.history.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(oldest),
        };
        self.cursor = Some(next);
        self.entry_at_cursor()
    }

    /// Move one entry toward the present (ArrowDown).
    ///
    /// Returns `None` once the cursor leaves history; the input is then
    /// cleared.
    pub fn recall_next(&mut self) -> Option<&str> {
        self.cursor = match self.cursor {
            Some(i) if i > 0 => Some(i - 1),
            _ => None,
        };
        self.entry_at_cursor()
    }

    fn entry_at_cursor(&self) -> Option<&str> {
        let steps = self.cursor?;
        let index = self.history.len().checked_sub(steps + 1)?;
        self.history.get(index).map(String::as_str)
    }
}
