//! Cycle constants and runtime configuration defaults

// Environment variables resolved at startup
/// Personal access token used for every GitHub request
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
/// Account whose contribution graph is painted
pub const ENV_USER: &str = "GITHUB_USER";
/// Repository holding the state file
pub const ENV_REPO: &str = "GITHUB_REPO";
/// Path of the state file inside the repository
pub const ENV_STATE_FILE: &str = "GITHUB_STATE_FILE";
/// IANA timezone that decides when a day starts
pub const ENV_TIMEZONE: &str = "GITHUB_TIMEZONE";

/// Every variable that must resolve to a non-empty value
pub const REQUIRED_ENV_KEYS: [&str; 5] = [
    ENV_TOKEN,
    ENV_USER,
    ENV_REPO,
    ENV_STATE_FILE,
    ENV_TIMEZONE,
];

/// Marker for values that must go through the key service
pub const ENVELOPE_PREFIX: &str = "kms:";

// Remote endpoints
/// GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// GitHub web root serving the contribution graph
pub const DEFAULT_WEB_URL: &str = "https://github.com";
/// Per-request timeout
pub const HTTP_TIMEOUT_SECS: u64 = 30;
/// Sent with every request, GitHub rejects anonymous agents
pub const USER_AGENT: &str = concat!("graphart/", env!("CARGO_PKG_VERSION"));

// Commit identity
/// Prefix for the committer name, followed by the account name
pub const COMMITTER_NAME_PREFIX: &str = "Contribution Graph Bot B/O";
/// Domain for the committer's noreply address
pub const NOREPLY_EMAIL_DOMAIN: &str = "users.noreply.github.com";

// Cycle geometry
/// Storage format for cycle dates
pub const CYCLE_DATE_FORMAT: &str = "%Y-%m-%d";
/// Rows in a contribution graph column
pub const DAYS_PER_WEEK: u64 = 7;

/// Day cells of the contribution graph, legacy SVG and current table markup
pub const DAY_CELL_SELECTOR: &str = "rect.day[data-date], td.ContributionCalendar-day[data-date]";

/// Message returned by a completed handler run
pub const COMPLETE_MESSAGE: &str = "Complete";
/// Status code returned by a completed handler run
pub const COMPLETE_STATUS: u16 = 200;

// Progress bar display settings
/// Width of the commit progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
