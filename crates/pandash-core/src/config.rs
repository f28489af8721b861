//! Terminal configuration.
//!
//! Centralizes the constants the command handlers format against.

// =============================================================================
// Identity
// =============================================================================

/// Home directory used when the content data does not name one.
pub const DEFAULT_HOME: &str = "/home/nguyenpanda";

/// Prompt user when `terminal.user` is missing.
pub const DEFAULT_USER: &str = "guest";

/// Prompt host when `terminal.hostname` is missing.
pub const DEFAULT_HOSTNAME: &str = "nguyenpanda";

/// Simulated operating system name (`uname`, `neofetch`).
pub const OS_NAME: &str = "NguyenPandaOS";

/// Release string on the `neofetch` OS line.
pub const NEOFETCH_OS: &str = "NguyenPanda OS 2.0 (Web)";

/// Neofetch logo, rendered above the system summary.
pub const NEOFETCH_LOGO: &str = include_str!("../assets/neofetch.txt");

// =============================================================================
// Navigation
// =============================================================================

/// Page keys understood by `open`, in the order they are suggested.
pub const PAGES: &[(&str, &str)] = &[
    ("home", "/"),
    ("projects", "/projects"),
    ("research", "/research"),
    ("hpc", "/hpc"),
    ("archive", "/archive"),
];

/// In-page sections `cd` scrolls to when no directory matches.
pub const SCROLL_ANCHORS: &[&str] = &["projects", "research"];

/// Page `exit` returns to.
pub const EXIT_URL: &str = "/";

// =============================================================================
// Listing
// =============================================================================

/// Long listing (`ls -l`) constants.
pub mod listing {
    pub const PERMISSIONS: &str = "rwxr-xr-x";
    pub const OWNER: &str = "guest";
    pub const GROUP: &str = "guest";
    pub const DIR_SIZE: &str = "4096";
    pub const FILE_SIZE: &str = " 512";
}

/// Column width command names are padded to in `help` and `contact`.
pub const NAME_COLUMN_WIDTH: usize = 12;

// =============================================================================
// Simulated network
// =============================================================================

/// `ping` simulation constants.
pub mod ping {
    /// Host pinged when none is given.
    pub const DEFAULT_HOST: &str = "google.com";
    /// Echo requests sent per invocation.
    pub const COUNT: usize = 3;
    /// Delay before each reply (milliseconds).
    pub const INTERVAL_MS: u32 = 500;
    /// Reply time range (milliseconds).
    pub const MIN_TIME_MS: f64 = 10.0;
    pub const TIME_SPREAD_MS: f64 = 50.0;
}

/// `curl` simulation constants.
pub mod curl {
    /// Schemes accepted before `://`; a bare host is also accepted.
    pub const SCHEMES: &[&str] = &["http", "https"];
}

/// `uptime` simulation constants.
pub mod uptime {
    /// The simulated boot lies at most this many days before midnight.
    pub const MAX_DAYS: u64 = 30;
    pub const SECS_PER_DAY: u64 = 86_400;
}

// =============================================================================
// Effects
// =============================================================================

/// `matrix` rain constants.
pub mod matrix {
    /// Half-width katakana and digits the rain is drawn from.
    pub const GLYPHS: &str = "ｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝ0123456789";
    pub const ROWS: usize = 10;
    pub const COLUMNS: usize = 60;
    /// Delay between rows (milliseconds).
    pub const INTERVAL_MS: u32 = 100;
}
