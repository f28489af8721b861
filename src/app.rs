//! Root application module.
//!
//! Contains the main App component, AppContext definition and TerminalState.

use leptos::prelude::*;
use pandash_core::{Interpreter, OutputLine, SessionState};

use crate::components::terminal::Shell;
use crate::config::SCROLLBACK_CAPACITY;
use crate::utils::Scrollback;

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Rendered output (bounded by `SCROLLBACK_CAPACITY`).
    pub scrollback: RwSignal<Scrollback<OutputLine>>,
    /// Working directory and command history.
    pub session: RwSignal<SessionState>,
    /// True while deferred output is still printing; input is disabled.
    pub busy: RwSignal<bool>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            scrollback: RwSignal::new(Scrollback::new(SCROLLBACK_CAPACITY)),
            session: RwSignal::new(SessionState::new(pandash_core::config::DEFAULT_HOME)),
            busy: RwSignal::new(false),
        }
    }

    pub fn push_output(&self, line: OutputLine) {
        self.scrollback.update(|s| s.push(line));
    }

    pub fn push_lines(&self, lines: Vec<OutputLine>) {
        if !lines.is_empty() {
            self.scrollback.update(|s| s.extend(lines));
        }
    }

    /// Snapshot of the scrollback, oldest first.
    pub fn visible_lines(&self) -> Vec<OutputLine> {
        self.scrollback.with(|s| s.to_vec())
    }

    pub fn clear_screen(&self) {
        self.scrollback.update(|s| s.clear());
    }

    /// Step through history; negative `direction` goes back in time.
    ///
    /// `None` means the input should be cleared.
    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        self.session
            .try_update(|session| {
                let entry = if direction < 0 {
                    session.recall_previous()
                } else {
                    session.recall_next()
                };
                entry.map(str::to_string)
            })
            .flatten()
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root and read with `use_context::<AppContext>()`.
/// The interpreter is `None` until the boot sequence has loaded content.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub terminal: TerminalState,
    pub interpreter: RwSignal<Option<Interpreter>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            terminal: TerminalState::new(),
            interpreter: RwSignal::new(None),
        }
    }

    /// Install an interpreter and start a fresh session at its home.
    pub fn start_session(&self, interpreter: Interpreter) {
        self.terminal.session.set(interpreter.new_session());
        self.interpreter.set(Some(interpreter));
    }

    /// Current prompt, empty until booted.
    pub fn prompt(&self) -> String {
        self.interpreter.with(|interp| {
            interp
                .as_ref()
                .map(|i| self.terminal.session.with(|s| i.prompt(s)))
                .unwrap_or_default()
        })
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e14;
                    color: #c5c8c6;
                    font-family: 'Fira Code', monospace;
                ">
                    <h1 style="color: #ff5f56; margin-bottom: 1rem;">
                        "Terminal crashed"
                    </h1>
                    <ul style="color: #ff5f56; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #27c93f;
                            color: #0a0e14;
                            border: none;
                            padding: 0.75rem 2rem;
                            cursor: pointer;
                            font-family: inherit;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
