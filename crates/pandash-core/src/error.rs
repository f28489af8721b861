//! Error types for the terminal core.
//!
//! - [`PathError`] - a target did not resolve against the virtual filesystem
//! - [`CommandError`] - a handler failed while executing
//!
//! Neither is fatal to a session: the interpreter turns both into output lines.

use thiserror::Error;

/// Path resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Target is not a directory key in the filesystem.
    #[error("{0}: No such file or directory")]
    NotFound(String),
}

/// Failure raised by a command handler.
///
/// Surfaced to the user as `Error executing command: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// `curl` was given a URL with no host.
    #[error("curl: (3) URL rejected: Malformed input to a URL function")]
    MalformedUrl { url: String },

    /// `curl` was given a scheme it does not speak.
    #[error("curl: (1) Protocol \"{scheme}\" not supported")]
    UnsupportedProtocol { scheme: String },
}
