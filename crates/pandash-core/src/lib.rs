//! Core of the pandash terminal: everything that runs without a browser.
//!
//! This crate provides:
//! - [`VirtualFs`] and [`PathResolver`] over the content's directory table
//! - [`SessionState`] for the working directory and history recall
//! - [`CommandRegistry`] of [`Builtin`] commands
//! - [`Interpreter`], turning a raw line into a [`CommandResult`]
//! - [`Host`], the seam to the page (clock, viewport, scroll anchors)
//!
//! Output is a list of [`OutputLine`]s plus an optional [`Effect`] and
//! timed [`Deferred`] batches; applying them is left to the view.

pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod format;
pub mod host;
pub mod interpreter;
pub mod models;
pub mod parser;
pub mod path;
pub mod session;

pub use autocomplete::Completion;
pub use commands::{Builtin, CommandRegistry, CommandResult, Deferred, Effect, ExecContext};
pub use error::{CommandError, PathError};
pub use filesystem::VirtualFs;
pub use host::{Host, StaticHost, Viewport};
pub use interpreter::Interpreter;
pub use models::{LineKind, OutputLine, SiteContent};
pub use path::PathResolver;
pub use session::SessionState;
