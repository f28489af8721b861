//! Built-in commands and their registry.
//!
//! This module provides:
//! - [`Builtin`], one variant per command, with its name, description and usage
//! - [`CommandRegistry`], the ordered, case-insensitive name table
//! - [`ExecContext`], everything a handler may read or change
//! - [`CommandResult`], what a handler produces
//!
//! # Architecture
//!
//! The interpreter looks a name up in the registry, then calls
//! [`Builtin::execute`], which dispatches to a handler in one of the
//! submodules. Handlers are plain functions over [`ExecContext`], so each
//! can be tested without a DOM.

mod content;
mod navigation;
mod result;
mod system;

pub use result::{CommandResult, Deferred, Effect};

use crate::error::CommandError;
use crate::filesystem::VirtualFs;
use crate::host::Host;
use crate::models::SiteContent;
use crate::path::PathResolver;
use crate::session::SessionState;

// =============================================================================
// Builtin Commands
// =============================================================================

/// A built-in terminal command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    Ls,
    Cd,
    Pwd,
    Cat,
    Echo,
    Whoami,
    Hostname,
    Date,
    Uptime,
    Uname,
    Neofetch,
    Clear,
    History,
    Man,
    Ping,
    Curl,
    Tree,
    Skills,
    Contact,
    Projects,
    Research,
    Open,
    Sudo,
    Exit,
    Cowsay,
    Matrix,
}

impl Builtin {
    /// Every built-in, in registration order.
    pub const ALL: &'static [Builtin] = &[
        Self::Help,
        Self::Ls,
        Self::Cd,
        Self::Pwd,
        Self::Cat,
        Self::Echo,
        Self::Whoami,
        Self::Hostname,
        Self::Date,
        Self::Uptime,
        Self::Uname,
        Self::Neofetch,
        Self::Clear,
        Self::History,
        Self::Man,
        Self::Ping,
        Self::Curl,
        Self::Tree,
        Self::Skills,
        Self::Contact,
        Self::Projects,
        Self::Research,
        Self::Open,
        Self::Sudo,
        Self::Exit,
        Self::Cowsay,
        Self::Matrix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Pwd => "pwd",
            Self::Cat => "cat",
            Self::Echo => "echo",
            Self::Whoami => "whoami",
            Self::Hostname => "hostname",
            Self::Date => "date",
            Self::Uptime => "uptime",
            Self::Uname => "uname",
            Self::Neofetch => "neofetch",
            Self::Clear => "clear",
            Self::History => "history",
            Self::Man => "man",
            Self::Ping => "ping",
            Self::Curl => "curl",
            Self::Tree => "tree",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Projects => "projects",
            Self::Research => "research",
            Self::Open => "open",
            Self::Sudo => "sudo",
            Self::Exit => "exit",
            Self::Cowsay => "cowsay",
            Self::Matrix => "matrix",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Display available commands",
            Self::Ls => "List directory contents",
            Self::Cd => "Change directory",
            Self::Pwd => "Print working directory",
            Self::Cat => "Display file contents",
            Self::Echo => "Display a line of text",
            Self::Whoami => "Print current user",
            Self::Hostname => "Print system hostname",
            Self::Date => "Display current date and time",
            Self::Uptime => "Show system uptime",
            Self::Uname => "Print system information",
            Self::Neofetch => "Display system information with ASCII art",
            Self::Clear => "Clear the terminal",
            Self::History => "Show command history",
            Self::Man => "Display manual for command",
            Self::Ping => "Ping a host (simulated)",
            Self::Curl => "Transfer data from URL (simulated)",
            Self::Tree => "Display directory tree",
            Self::Skills => "List technical skills",
            Self::Contact => "Show contact information",
            Self::Projects => "List all projects",
            Self::Research => "List research papers",
            Self::Open => "Open a page or URL",
            Self::Sudo => "Execute as superuser",
            Self::Exit => "Close terminal session",
            Self::Cowsay => "Display message with ASCII cow",
            Self::Matrix => "Enter the Matrix",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::Help => "help [command]",
            Self::Ls => "ls [-la] [path]",
            Self::Cd => "cd [directory]",
            Self::Cat => "cat [file]",
            Self::Echo => "echo [text]",
            Self::Uname => "uname [-a]",
            Self::Man => "man [command]",
            Self::Ping => "ping [host]",
            Self::Curl => "curl [url]",
            Self::Tree => "tree [path]",
            Self::Open => "open [target]",
            Self::Sudo => "sudo [command]",
            Self::Cowsay => "cowsay [message]",
            other => other.name(),
        }
    }

    /// Run the handler.
    ///
    /// `Err` means the handler itself failed; expected problems (missing
    /// files, bad arguments) come back as error lines inside `Ok`.
    pub fn execute(
        self,
        args: &[String],
        ctx: &mut ExecContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        let result = match self {
            Self::Help => system::help(args, ctx),
            Self::Ls => navigation::ls(args, ctx),
            Self::Cd => navigation::cd(args, ctx),
            Self::Pwd => navigation::pwd(ctx),
            Self::Cat => navigation::cat(args, ctx),
            Self::Echo => system::echo(args),
            Self::Whoami => system::whoami(ctx),
            Self::Hostname => system::hostname(ctx),
            Self::Date => system::date(ctx),
            Self::Uptime => system::uptime(ctx),
            Self::Uname => system::uname(args, ctx),
            Self::Neofetch => content::neofetch(ctx),
            Self::Clear => CommandResult::empty().with_effect(Effect::ClearScreen),
            Self::History => system::history(ctx),
            Self::Man => system::man(args, ctx),
            Self::Ping => system::ping(args),
            Self::Curl => system::curl(args)?,
            Self::Tree => navigation::tree(args, ctx),
            Self::Skills => content::skills(ctx),
            Self::Contact => content::contact(ctx),
            Self::Projects => content::projects(ctx),
            Self::Research => content::research(ctx),
            Self::Open => system::open(args),
            Self::Sudo => system::sudo(),
            Self::Exit => system::exit(),
            Self::Cowsay => content::cowsay(args),
            Self::Matrix => content::matrix(ctx),
        };
        Ok(result)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Fixed, ordered table of commands.
///
/// Lookup of the typed command name is case-insensitive; listing keeps
/// registration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRegistry {
    commands: Vec<Builtin>,
}

impl CommandRegistry {
    /// Registry of every built-in.
    pub fn builtin() -> Self {
        Self::with_commands(Builtin::ALL.to_vec())
    }

    /// Registry of a chosen subset, in the given order.
    pub fn with_commands(commands: Vec<Builtin>) -> Self {
        Self { commands }
    }

    pub fn lookup(&self, name: &str) -> Option<Builtin> {
        self.commands
            .iter()
            .copied()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }

    /// Case-sensitive lookup, for command names passed as arguments.
    pub fn lookup_exact(&self, name: &str) -> Option<Builtin> {
        self.commands.iter().copied().find(|cmd| cmd.name() == name)
    }

    /// Command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|cmd| cmd.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = Builtin> + '_ {
        self.commands.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Execution Context
// =============================================================================

/// Everything a handler can see for one invocation.
pub struct ExecContext<'a> {
    pub session: &'a mut SessionState,
    pub fs: &'a VirtualFs,
    pub content: &'a SiteContent,
    pub registry: &'a CommandRegistry,
    pub host: &'a dyn Host,
}

impl ExecContext<'_> {
    pub fn home(&self) -> &str {
        &self.content.terminal.home
    }

    pub fn user(&self) -> &str {
        &self.content.terminal.user
    }

    pub fn hostname(&self) -> &str {
        &self.content.terminal.hostname
    }

    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(self.fs, self.home())
    }
}

// =============================================================================
// Test Fixture
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = Builtin::ALL.iter().map(|b| b.name()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.lookup("ls"), Some(Builtin::Ls));
        assert_eq!(registry.lookup("LS"), Some(Builtin::Ls));
        assert_eq!(registry.lookup("NeoFetch"), Some(Builtin::Neofetch));
        assert_eq!(registry.lookup("foobar"), None);
    }

    #[test]
    fn test_lookup_exact_keeps_case() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.lookup_exact("ls"), Some(Builtin::Ls));
        assert_eq!(registry.lookup_exact("LS"), None);
    }

    #[test]
    fn test_registration_order() {
        let registry = CommandRegistry::builtin();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(&names[..5], ["help", "ls", "cd", "pwd", "cat"]);
        assert_eq!(names.last(), Some(&"matrix"));
        assert_eq!(registry.len(), Builtin::ALL.len());
    }

    #[test]
    fn test_subset_registry() {
        let registry = CommandRegistry::with_commands(vec![Builtin::Projects, Builtin::Pwd]);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["projects", "pwd"]);
        assert_eq!(registry.lookup("ls"), None);
    }

    #[test]
    fn test_usage_defaults_to_name() {
        assert_eq!(Builtin::Pwd.usage(), "pwd");
        assert_eq!(Builtin::Ls.usage(), "ls [-la] [path]");
    }

    #[test]
    fn test_clear_requests_screen_wipe() {
        let mut fx = testing::Fixture::new();
        let result = fx.run(Builtin::Clear, &[]);
        assert!(result.output.is_empty());
        assert_eq!(result.effect, Some(Effect::ClearScreen));
    }
}
