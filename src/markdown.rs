//! Markdown heading scanning
//!
//! A line is a level-L heading when it starts with exactly L `#` characters
//! followed by whitespace on the same line. No Markdown parsing happens here:
//! fenced code blocks, setext headings and indented `#` lines are not special.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::level::HeadingLevel;

/// Anchored pattern per level, index 0 is level 1
static HEADING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    HeadingLevel::ALL
        .iter()
        .map(|level| {
            Regex::new(&format!(r"^#{{{}}}\s", level.get()))
                .expect("heading pattern is a valid regex")
        })
        .collect()
});

/// Pattern matching a heading line of exactly `level` hashes
pub fn heading_pattern(level: HeadingLevel) -> &'static Regex {
    &HEADING_PATTERNS[level.index()]
}

/// Split text into lines on `\n`, `\r\n` or a bare `\r`
///
/// A `\r\n` pair yields an extra empty line, which can never be a heading.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// Count heading lines of exactly `level` in `text`
pub fn count_headings(text: &str, level: HeadingLevel) -> usize {
    let pattern = heading_pattern(level);
    lines(text).filter(|line| pattern.is_match(line)).count()
}

/// Like [`count_headings`], for levels that have not been validated yet
pub fn count_headings_raw(text: &str, level: i64) -> Result<usize> {
    let level = HeadingLevel::new(level)?;
    Ok(count_headings(text, level))
}
