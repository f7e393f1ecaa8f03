//! Constants for header-count
//!
//! Command ids, user-facing message formats, and environment variable names
//! shared between the library and the binary.

// === Levels ===

/// Lowest Markdown heading level
pub const MIN_LEVEL: u8 = 1;

/// Highest Markdown heading level
pub const MAX_LEVEL: u8 = 6;

/// Level pre-filled in the prompt before the user ever changes the setting
pub const DEFAULT_LEVEL: u8 = 4;

// === Commands ===

/// Command id: count headers at a chosen level
pub const COUNT_COMMAND_ID: &str = "count-headers";

/// Palette name for the count command
pub const COUNT_COMMAND_NAME: &str = "Count headers at a chosen level";

/// Ribbon icon for the count command
pub const COUNT_RIBBON_ICON: &str = "hash";

/// Command id: compute the full 1-6 summary
pub const SUMMARY_COMMAND_ID: &str = "header-summary";

/// Palette name for the summary command
pub const SUMMARY_COMMAND_NAME: &str = "Copy header summary (levels 1-6)";

/// Ribbon icon for the summary command
pub const SUMMARY_RIBBON_ICON: &str = "list-ordered";

// === Settings ===

/// Directory under the platform config dir holding our settings
pub const SETTINGS_DIR: &str = "header-count";

/// Settings file name
pub const SETTINGS_FILENAME: &str = "settings.json";

// === Environment Variables ===

/// Overrides the settings file location
pub const ENV_SETTINGS_PATH: &str = "HEADER_COUNT_SETTINGS";

/// Log filter for the binary (tracing EnvFilter syntax)
pub const ENV_LOG: &str = "HEADER_COUNT_LOG";

// === Prompt ===

/// Input that dismisses the level prompt
pub const PROMPT_DISMISS: &str = "q";

// === Messages ===

/// Notice shown when there is no document to scan
pub const MSG_NO_ACTIVE_DOCUMENT: &str = "No active Markdown document";

/// Notice suffix when the clipboard accepted the summary
///
/// On X11 the selection is owned by this process and is gone once it exits,
/// so this only claims the write was handed over.
pub const MSG_COPIED: &str = "(sent to clipboard)";
