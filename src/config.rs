//! Application configuration.
//!
//! Centralizes the constants of the browser front end. Command-level
//! constants live in `pandash_core::config`.

// =============================================================================
// Content
// =============================================================================

/// Site content, tried first.
pub const CONTENT_YAML_URL: &str = "/public/data/site.yaml";

/// Site content in JSON, used when the YAML document fails to load.
pub const CONTENT_JSON_URL: &str = "/public/data/site.json";

// =============================================================================
// Terminal
// =============================================================================

/// DOM id of the command line input.
pub const TERMINAL_INPUT_ID: &str = "terminal-input";

/// Maximum output lines kept in the scrollback.
pub const SCROLLBACK_CAPACITY: usize = 1000;

/// Milliseconds per second, for boot timestamps.
pub const MS_PER_SECOND: f64 = 1000.0;

/// Boot sequence pauses (milliseconds).
pub mod boot_delays {
    pub const KERNEL_INIT: u32 = 120;
    pub const CONTENT_LOADED: u32 = 80;
}
