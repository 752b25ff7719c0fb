//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure not covered below.
    pub const GENERAL: i32 = 1;

    /// Resource not found (recipe ID, or no recipe matches a filter).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The store file could not be opened, read or written.
    pub const STORAGE_FAILED: i32 = 5;
}

/// Width of the longest bar in the `stats` chart.
pub const STATS_BAR_WIDTH: usize = 40;
