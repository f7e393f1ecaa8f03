//! Markdown heading levels
//!
//! A `HeadingLevel` always holds a value in 1..=6, so code downstream of a
//! successful conversion never has to re-check the range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};
use crate::error::HeaderCountError;

/// A Markdown heading level (1-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Every level, in ascending order
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel(1),
        HeadingLevel(2),
        HeadingLevel(3),
        HeadingLevel(4),
        HeadingLevel(5),
        HeadingLevel(6),
    ];

    /// Build a level, rejecting anything outside 1..=6
    pub fn new(value: i64) -> Result<Self, HeaderCountError> {
        if (MIN_LEVEL as i64..=MAX_LEVEL as i64).contains(&value) {
            Ok(HeadingLevel(value as u8))
        } else {
            Err(HeaderCountError::InvalidLevel { value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing per-level tables
    pub(crate) fn index(self) -> usize {
        (self.0 - MIN_LEVEL) as usize
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        HeadingLevel(DEFAULT_LEVEL)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = HeaderCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HeadingLevel::new(value as i64)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> u8 {
        level.0
    }
}

impl FromStr for HeadingLevel {
    type Err = HeaderCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| HeaderCountError::UnparsableLevel {
            input: trimmed.to_string(),
        })?;
        HeadingLevel::new(value)
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_range() {
        for v in 1..=6 {
            assert_eq!(HeadingLevel::new(v).unwrap().get() as i64, v);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(
            HeadingLevel::new(0),
            Err(HeaderCountError::InvalidLevel { value: 0 })
        ));
        assert!(matches!(
            HeadingLevel::new(7),
            Err(HeaderCountError::InvalidLevel { value: 7 })
        ));
        assert!(HeadingLevel::new(-3).is_err());
    }

    #[test]
    fn test_default_is_four() {
        assert_eq!(HeadingLevel::default().get(), 4);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" 3 ".parse::<HeadingLevel>().unwrap().get(), 3);
        assert!(matches!(
            "abc".parse::<HeadingLevel>(),
            Err(HeaderCountError::UnparsableLevel { .. })
        ));
        assert!(matches!(
            "9".parse::<HeadingLevel>(),
            Err(HeaderCountError::InvalidLevel { value: 9 })
        ));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<HeadingLevel>("2").unwrap().get(), 2);
        assert!(serde_json::from_str::<HeadingLevel>("7").is_err());
        assert_eq!(serde_json::to_string(&HeadingLevel::ALL[5]).unwrap(), "6");
    }
}
