//! Per-level heading summary

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::level::HeadingLevel;
use crate::markdown::count_headings;

/// Heading counts for levels 1 through 6, always all six
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    counts: [usize; 6],
}

impl Summary {
    /// Count of headings at `level`
    pub fn get(&self, level: HeadingLevel) -> usize {
        self.counts[level.index()]
    }

    /// `(level, count)` pairs from level 1 to level 6
    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, usize)> + '_ {
        HeadingLevel::ALL.into_iter().map(move |level| (level, self.get(level)))
    }

    /// Headings across all levels
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Compact JSON object keyed by level: `{"1":1,"2":2,...}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Scan `text` once per level and collect the counts
pub fn compute_summary(text: &str) -> Summary {
    let mut summary = Summary::default();
    for level in HeadingLevel::ALL {
        summary.counts[level.index()] = count_headings(text, level);
    }
    summary
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (level, count) in self.iter() {
            map.serialize_entry(&level.to_string(), &count)?;
        }
        map.end()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (level, count)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "H{}: {}", level, count)?;
        }
        Ok(())
    }
}
