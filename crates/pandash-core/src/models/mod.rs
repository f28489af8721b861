//! Data models for the terminal.
//!
//! Contains domain types for:
//! - [`OutputLine`], [`LineKind`] - Terminal output
//! - [`SiteContent`] and its sections - Content consumed by commands

mod content;
mod terminal;

pub use content::{FilesystemTree, Project, Research, SiteContent, Skills, Social, TerminalData};
pub use terminal::{LineKind, OutputLine};
