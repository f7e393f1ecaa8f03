use clap::{Parser, Subcommand};

/// header-count - Count Markdown heading lines per level
///
/// # Quick Reference
///
/// ```bash
/// header-count count notes.md            # Prompt for a level, pre-filled with the default
/// header-count count notes.md -l 2       # Count level-2 headers without prompting
/// header-count count notes.md -l 2 --remember  # ...and make 2 the new default
/// header-count summary notes.md          # Counts for levels 1-6, copied to the clipboard
/// header-count settings                  # Show the default level
/// header-count settings 3                # Set the default level
/// header-count commands                  # List palette commands
/// header-count run header-summary notes.md
/// cat notes.md | header-count count - -l 1
/// ```
///
/// A heading is a line starting with exactly N `#` characters followed by
/// whitespace, so `####### Deep` counts toward no level.
///
/// ## Environment Variables
///
/// - `HEADER_COUNT_SETTINGS`: settings file (default: <config dir>/header-count/settings.json)
/// - `HEADER_COUNT_LOG`: log filter, e.g. `debug` (default: warn)
#[derive(Parser, Debug)]
#[command(name = "header-count")]
#[command(version)]
#[command(about = "Count Markdown heading lines per level")]
pub struct Cli {
    /// Settings file (default: $HEADER_COUNT_SETTINGS or the platform config dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<String>,

    /// Output results as JSON
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Do not touch the system clipboard
    #[arg(long, global = true)]
    pub no_clipboard: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count headers at one level
    #[command(alias = "c")]
    Count {
        /// Markdown file, or - for stdin
        file: Option<String>,

        /// Header level (1-6); prompts when omitted
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
        level: Option<u8>,

        /// Accept the default level without prompting
        #[arg(short = 'y', long, conflicts_with = "level")]
        yes: bool,

        /// Remember the chosen level as the new default
        #[arg(long)]
        remember: bool,
    },

    /// Count headers for every level 1-6 and copy the result
    #[command(alias = "s")]
    Summary {
        /// Markdown file, or - for stdin
        file: Option<String>,
    },

    /// Show or change the default level
    Settings {
        /// New default level (1-6)
        #[arg(allow_hyphen_values = true)]
        default_level: Option<String>,
    },

    /// List the commands available in the palette
    Commands,

    /// Run a palette command by id
    Run {
        /// Command id (see `commands`)
        id: String,

        /// Markdown file, or - for stdin
        file: Option<String>,
    },
}
