//! Utility modules for web, DOM, and data structure operations.
//!
//! Provides:
//! - [`Scrollback`] - Bounded output buffer
//! - [`load_site_content`] - Content fetching with YAML/JSON fallback
//! - [`dom`] - Browser helpers and the page-backed host

pub mod dom;
mod fetch;
mod scrollback;

pub use fetch::load_site_content;
pub use scrollback::Scrollback;
