//! Host collaborators
//!
//! The plugin never touches files, terminals, or the clipboard directly. It
//! talks to the host through these traits; the terminal implementations below
//! are what the `header-count` binary wires in.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::constants::PROMPT_DISMISS;
use crate::level::HeadingLevel;
use crate::settings::SettingsStore;

/// Source of the active document's text
pub trait DocumentSource {
    /// Snapshot of the active document, `None` when no document is open
    fn active_document_text(&mut self) -> io::Result<Option<String>>;
}

/// A level confirmed in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChoice {
    pub level: HeadingLevel,
    /// Persist `level` as the new default
    pub remember: bool,
}

/// Asks the user for a heading level
pub trait LevelPrompt {
    /// Returns `None` when the user dismisses the prompt
    fn prompt_for_level(&mut self, default: HeadingLevel) -> io::Result<Option<LevelChoice>>;
}

/// Transient user-visible notices
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// System clipboard, best-effort
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Everything the plugin needs from its host
pub struct Host {
    pub document: Box<dyn DocumentSource>,
    pub prompt: Box<dyn LevelPrompt>,
    pub notifier: Box<dyn Notifier>,
    pub clipboard: Box<dyn Clipboard>,
    pub store: Box<dyn SettingsStore>,
}

// === Terminal implementations ===

/// Document read from a file, or stdin for `-`
#[derive(Debug, Clone, Default)]
pub struct FileDocument {
    path: Option<PathBuf>,
}

impl FileDocument {
    pub fn new(path: Option<impl Into<PathBuf>>) -> Self {
        Self {
            path: path.map(Into::into),
        }
    }
}

impl DocumentSource for FileDocument {
    fn active_document_text(&mut self) -> io::Result<Option<String>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let bytes = if path.as_os_str() == "-" {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            bytes
        } else {
            debug!(path = %path.display(), "Reading document");
            fs::read(path)
                .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?
        };
        Ok(Some(decode_text(bytes)))
    }
}

/// Document text from raw bytes; invalid UTF-8 becomes U+FFFD
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Prompt answered from the command line, without asking
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt {
    level: Option<HeadingLevel>,
    remember: bool,
}

impl FixedPrompt {
    /// `None` accepts whatever default the prompt is pre-filled with
    pub fn new(level: Option<HeadingLevel>, remember: bool) -> Self {
        Self { level, remember }
    }
}

impl LevelPrompt for FixedPrompt {
    fn prompt_for_level(&mut self, default: HeadingLevel) -> io::Result<Option<LevelChoice>> {
        Ok(Some(LevelChoice {
            level: self.level.unwrap_or(default),
            remember: self.remember,
        }))
    }
}

/// Interactive line prompt
///
/// Empty input accepts the default, `q` or end of input dismisses, anything
/// outside 1..=6 is reported and asked again.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    remember: bool,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio(remember: bool) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), remember)
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, remember: bool) -> Self {
        Self {
            input,
            output,
            remember,
        }
    }
}

impl<R: BufRead, W: Write> LevelPrompt for TerminalPrompt<R, W> {
    fn prompt_for_level(&mut self, default: HeadingLevel) -> io::Result<Option<LevelChoice>> {
        loop {
            write!(self.output, "Header level (1-6) [{}]: ", default)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let answer = line.trim();
            if answer.eq_ignore_ascii_case(PROMPT_DISMISS) {
                return Ok(None);
            }
            if answer.is_empty() {
                return Ok(Some(LevelChoice {
                    level: default,
                    remember: self.remember,
                }));
            }
            match answer.parse::<HeadingLevel>() {
                Ok(level) => {
                    return Ok(Some(LevelChoice {
                        level,
                        remember: self.remember,
                    }))
                }
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }
}

/// Notices on stderr
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// The platform clipboard via arboard
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().map_err(|e| e.to_string())?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text).map_err(|e| e.to_string()),
            None => Err("clipboard unavailable".to_string()),
        }
    }
}

/// Clipboard that refuses every write
#[derive(Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), String> {
        Err("clipboard disabled".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn level(v: i64) -> HeadingLevel {
        HeadingLevel::new(v).unwrap()
    }

    fn ask(input: &str, default: HeadingLevel) -> (Option<LevelChoice>, String) {
        let mut output = Vec::new();
        let choice = {
            let mut prompt = TerminalPrompt::new(Cursor::new(input.as_bytes()), &mut output, false);
            prompt.prompt_for_level(default).unwrap()
        };
        (choice, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_accepts_level() {
        let (choice, output) = ask("2\n", level(4));
        assert_eq!(choice.unwrap().level, level(2));
        assert!(output.contains("[4]"));
    }

    #[test]
    fn test_prompt_empty_uses_default() {
        let (choice, _) = ask("\n", level(5));
        assert_eq!(choice.unwrap().level, level(5));
    }

    #[test]
    fn test_prompt_dismiss() {
        assert_eq!(ask("q\n", level(4)).0, None);
        assert_eq!(ask("", level(4)).0, None);
    }

    #[test]
    fn test_prompt_rejects_then_accepts() {
        let (choice, output) = ask("7\nfoo\n3\n", level(4));
        assert_eq!(choice.unwrap().level, level(3));
        assert!(output.contains("Invalid header level 7"));
        assert!(output.contains("Invalid header level 'foo'"));
    }

    #[test]
    fn test_prompt_rejects_then_dismissed() {
        let (choice, _) = ask("0\n", level(4));
        assert_eq!(choice, None);
    }

    #[test]
    fn test_fixed_prompt() {
        let mut prompt = FixedPrompt::new(Some(level(1)), true);
        let choice = prompt.prompt_for_level(level(4)).unwrap().unwrap();
        assert_eq!(choice, LevelChoice { level: level(1), remember: true });

        let mut prompt = FixedPrompt::new(None, false);
        assert_eq!(prompt.prompt_for_level(level(4)).unwrap().unwrap().level, level(4));
    }

    #[test]
    fn test_file_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.md");
        fs::write(&path, "# Title\n").unwrap();

        let mut doc = FileDocument::new(Some(&path));
        assert_eq!(doc.active_document_text().unwrap().as_deref(), Some("# Title\n"));

        let mut none = FileDocument::new(None::<PathBuf>);
        assert_eq!(none.active_document_text().unwrap(), None);

        let mut missing = FileDocument::new(Some(temp_dir.path().join("missing.md")));
        let err = missing.active_document_text().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_file_document_not_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.md");
        fs::write(&path, b"# Caf\xe9\n## Men\xfa\n").unwrap();

        let mut doc = FileDocument::new(Some(&path));
        let text = doc.active_document_text().unwrap().unwrap();
        assert_eq!(text, "# Caf\u{FFFD}\n## Men\u{FFFD}\n");
        assert_eq!(crate::markdown::count_headings(&text, level(1)), 1);
        assert_eq!(crate::markdown::count_headings(&text, level(2)), 1);
    }

    #[test]
    fn test_no_clipboard_refuses() {
        assert!(NoClipboard.write_text("x").is_err());
    }
}
