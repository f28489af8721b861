//! Command interpreter.
//!
//! Owns the content-derived state shared by every session (the virtual
//! filesystem, the registry, the site content) and turns one raw input line
//! into a [`CommandResult`].

use crate::autocomplete::{self, Completion};
use crate::commands::{CommandRegistry, CommandResult, ExecContext};
use crate::filesystem::VirtualFs;
use crate::host::Host;
use crate::models::{OutputLine, SiteContent};
use crate::parser::tokenize;
use crate::session::SessionState;

/// Parses, dispatches and executes terminal input.
#[derive(Clone, Debug)]
pub struct Interpreter {
    registry: CommandRegistry,
    fs: VirtualFs,
    content: SiteContent,
}

impl Interpreter {
    /// Interpreter with every built-in command.
    pub fn new(content: SiteContent) -> Self {
        Self::with_registry(content, CommandRegistry::builtin())
    }

    pub fn with_registry(content: SiteContent, registry: CommandRegistry) -> Self {
        let fs = VirtualFs::new(content.terminal.filesystem.clone());
        Self {
            registry,
            fs,
            content,
        }
    }

    /// Fresh session positioned at home.
    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.content.terminal.home.clone())
    }

    /// Message of the day, shown once when the terminal starts.
    pub fn motd(&self) -> Vec<OutputLine> {
        self.content
            .terminal
            .motd
            .iter()
            .map(|line| OutputLine::ascii(line.as_str()))
            .collect()
    }

    /// `user@host:path$ `
    pub fn prompt(&self, session: &SessionState) -> String {
        format!(
            "{}@{}:{}$ ",
            self.content.terminal.user,
            self.content.terminal.hostname,
            session.current_path()
        )
    }

    /// The submitted line as echoed into the scrollback.
    pub fn echo_line(&self, session: &SessionState, raw: &str) -> OutputLine {
        OutputLine::neutral(format!("{}{}", self.prompt(session), raw))
    }

    /// Execute one line of input.
    ///
    /// Non-blank input is recorded in history before dispatch, so `history`
    /// sees itself. Handler failures become a single error line.
    pub fn submit(&self, session: &mut SessionState, raw: &str, host: &dyn Host) -> CommandResult {
        let Some(invocation) = tokenize(raw) else {
            return CommandResult::empty();
        };
        session.record(raw);

        let Some(cmd) = self.registry.lookup(&invocation.lookup_key()) else {
            log::debug!("unknown command: {}", invocation.name);
            return CommandResult::line(OutputLine::error(format!(
                "Command not found: {}. Type 'help' for available commands.",
                invocation.name
            )));
        };

        log::debug!("exec {} {:?}", cmd.name(), invocation.args);
        let mut ctx = ExecContext {
            session,
            fs: &self.fs,
            content: &self.content,
            registry: &self.registry,
            host,
        };

        match cmd.execute(&invocation.args, &mut ctx) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("{} failed: {}", cmd.name(), e);
                CommandResult::line(OutputLine::error(format!(
                    "Error executing command: {}",
                    e
                )))
            }
        }
    }

    /// Tab-complete the last token of `input` against command names.
    pub fn complete(&self, input: &str) -> Completion {
        autocomplete::complete(input, self.registry.names())
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }
}
