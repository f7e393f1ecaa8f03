//! HeaderCountPlugin - lifecycle, command registry, and the two actions
//!
//! The host drives the plugin through `on_load`, any number of `execute`
//! calls, and `on_unload`. Every failure is shown to the user as a notice
//! and then returned, so the host can decide on an exit status without
//! printing anything itself.

use tracing::{debug, info, warn};

use crate::constants as C;
use crate::error::{HeaderCountError, Result};
use crate::host::Host;
use crate::level::HeadingLevel;
use crate::settings::Settings;
use crate::summary::{compute_summary, Summary};

/// A command exposed in the palette and, when it has an icon, the ribbon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginCommand {
    pub id: &'static str,
    pub name: &'static str,
    pub ribbon_icon: Option<&'static str>,
}

/// Result of one command invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Headings counted at one level
    Counted { level: HeadingLevel, count: usize },
    /// Full 1-6 summary computed
    Summarized { summary: Summary, copied: bool },
    /// The prompt was dismissed, nothing happened
    Dismissed,
}

pub struct HeaderCountPlugin {
    host: Host,
    settings: Settings,
    commands: Vec<PluginCommand>,
}

impl HeaderCountPlugin {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            settings: Settings::default(),
            commands: Vec::new(),
        }
    }

    /// Load settings and register commands
    pub fn on_load(&mut self) -> Result<()> {
        self.settings = match self.host.store.load() {
            Ok(settings) => settings,
            Err(err) => return self.fail(err),
        };
        self.commands = vec![
            PluginCommand {
                id: C::COUNT_COMMAND_ID,
                name: C::COUNT_COMMAND_NAME,
                ribbon_icon: Some(C::COUNT_RIBBON_ICON),
            },
            PluginCommand {
                id: C::SUMMARY_COMMAND_ID,
                name: C::SUMMARY_COMMAND_NAME,
                ribbon_icon: Some(C::SUMMARY_RIBBON_ICON),
            },
        ];
        info!(
            default_level = %self.settings.default_level,
            commands = self.commands.len(),
            "Plugin loaded"
        );
        Ok(())
    }

    pub fn on_unload(&mut self) {
        self.commands.clear();
        info!("Plugin unloaded");
    }

    /// Registered commands, in registration order
    pub fn commands(&self) -> &[PluginCommand] {
        &self.commands
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Run a registered command by id
    pub fn execute(&mut self, id: &str) -> Result<ActionOutcome> {
        if !self.commands.iter().any(|c| c.id == id) {
            return self.fail(HeaderCountError::UnknownCommand(id.to_string()));
        }
        debug!(command = id, "Executing command");
        match id {
            C::COUNT_COMMAND_ID => self.count_headers(),
            C::SUMMARY_COMMAND_ID => self.header_summary(),
            _ => self.fail(HeaderCountError::UnknownCommand(id.to_string())),
        }
    }

    /// Prompt for a level and count headings at it
    pub fn count_headers(&mut self) -> Result<ActionOutcome> {
        let text = match self.active_text() {
            Ok(text) => text,
            Err(err) => return self.fail(err),
        };

        let choice = match self.host.prompt.prompt_for_level(self.settings.default_level) {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                debug!("Level prompt dismissed");
                return Ok(ActionOutcome::Dismissed);
            }
            Err(err) => return self.fail(err.into()),
        };

        if choice.remember && choice.level != self.settings.default_level {
            if let Err(err) = self.store_default_level(choice.level) {
                return self.fail(err);
            }
        }

        let count = crate::markdown::count_headings(&text, choice.level);
        debug!(level = %choice.level, count, "Counted headers");
        self.host.notifier.notify(&format!(
            "Found {} level-{} header{}",
            count,
            choice.level,
            if count == 1 { "" } else { "s" }
        ));
        Ok(ActionOutcome::Counted {
            level: choice.level,
            count,
        })
    }

    /// Count every level and copy the summary to the clipboard
    pub fn header_summary(&mut self) -> Result<ActionOutcome> {
        let text = match self.active_text() {
            Ok(text) => text,
            Err(err) => return self.fail(err),
        };

        let summary = compute_summary(&text);
        let json = match summary.to_json() {
            Ok(json) => json,
            Err(err) => return self.fail(err.into()),
        };
        debug!(summary = %json, "Computed header summary");

        let copied = match self.host.clipboard.write_text(&json) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Clipboard write failed");
                false
            }
        };

        let message = if copied {
            format!("Header summary: {} {}", json, C::MSG_COPIED)
        } else {
            format!("Header summary: {}", json)
        };
        self.host.notifier.notify(&message);
        Ok(ActionOutcome::Summarized { summary, copied })
    }

    /// Level pre-filled in the prompt
    pub fn default_level(&self) -> HeadingLevel {
        self.settings.default_level
    }

    /// Settings-panel edit of the default level
    ///
    /// Values outside 1..=6 are rejected and leave the stored setting as it was.
    pub fn set_default_level(&mut self, value: i64) -> Result<()> {
        let level = match HeadingLevel::new(value) {
            Ok(level) => level,
            Err(err) => return self.fail(err),
        };
        if let Err(err) = self.store_default_level(level) {
            return self.fail(err);
        }
        Ok(())
    }

    /// Settings-panel text input, parsed then applied like [`Self::set_default_level`]
    pub fn set_default_level_input(&mut self, input: &str) -> Result<()> {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => self.set_default_level(value),
            Err(_) => self.fail(HeaderCountError::UnparsableLevel {
                input: trimmed.to_string(),
            }),
        }
    }

    fn store_default_level(&mut self, level: HeadingLevel) -> Result<()> {
        let updated = Settings {
            default_level: level,
        };
        self.host.store.save(&updated)?;
        self.settings = updated;
        info!(default_level = %level, "Default level updated");
        Ok(())
    }

    fn active_text(&mut self) -> Result<String> {
        self.host
            .document
            .active_document_text()?
            .ok_or(HeaderCountError::NoActiveDocument)
    }

    /// Show `err` as a notice and hand it back
    fn fail<T>(&mut self, err: HeaderCountError) -> Result<T> {
        self.host.notifier.notify(&err.to_string());
        Err(err)
    }
}
