pub mod cli;
pub mod constants;
pub mod error;
pub mod host;
pub mod level;
pub mod markdown;
pub mod plugin;
pub mod settings;
pub mod summary;

pub use cli::{Cli, Command};
pub use error::{HeaderCountError, Result};
pub use host::{
    Clipboard, DocumentSource, FileDocument, FixedPrompt, Host, LevelChoice, LevelPrompt,
    NoClipboard, Notifier, StderrNotifier, SystemClipboard, TerminalPrompt,
};
pub use level::HeadingLevel;
pub use markdown::{count_headings, count_headings_raw};
pub use plugin::{ActionOutcome, HeaderCountPlugin, PluginCommand};
pub use settings::{settings_path, JsonSettingsStore, MemorySettingsStore, Settings, SettingsStore};
pub use summary::{compute_summary, Summary};
