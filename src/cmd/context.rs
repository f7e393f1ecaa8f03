//! Host wiring shared by the subcommands

use header_count::{
    settings_path, Clipboard, FileDocument, HeaderCountPlugin, Host, JsonSettingsStore,
    LevelPrompt, MemorySettingsStore, NoClipboard, Result, SettingsStore, StderrNotifier,
    SystemClipboard,
};
use tracing::{debug, warn};

/// Global options every subcommand sees
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Option<String>,
    pub json: bool,
    pub no_clipboard: bool,
}

impl Context {
    pub fn from_cli(cli: &header_count::Cli) -> Self {
        Self {
            settings: cli.settings.clone(),
            json: cli.json,
            no_clipboard: cli.no_clipboard,
        }
    }

    /// Build a host around `file` and `prompt`, and load the plugin into it
    pub fn load_plugin(
        &self,
        file: Option<String>,
        prompt: Box<dyn LevelPrompt>,
    ) -> Result<HeaderCountPlugin> {
        let clipboard: Box<dyn Clipboard> = if self.no_clipboard {
            Box::new(NoClipboard)
        } else {
            Box::new(SystemClipboard::new())
        };

        let host = Host {
            document: Box::new(FileDocument::new(file)),
            prompt,
            notifier: Box::new(StderrNotifier),
            clipboard,
            store: self.settings_store(),
        };

        let mut plugin = HeaderCountPlugin::new(host);
        plugin.on_load()?;
        Ok(plugin)
    }

    fn settings_store(&self) -> Box<dyn SettingsStore> {
        match settings_path(self.settings.as_deref()) {
            Some(path) => {
                let store = JsonSettingsStore::new(path);
                debug!(path = %store.path().display(), "Using settings file");
                Box::new(store)
            }
            None => {
                warn!("No config directory found, settings will not be saved");
                Box::new(MemorySettingsStore::new())
            }
        }
    }
}
