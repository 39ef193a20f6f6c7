//! Frequency ranking
//!
//! Turns a `LetterFrequencyTable` into a list ordered by descending count.
//! Entries with equal counts keep the table's first-seen order.

use serde::Serialize;

use crate::core::analyzer::LetterFrequencyTable;

/// One ranked entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    #[serde(rename = "char")]
    pub character: char,
    pub count: usize,
}

/// Frequency table entries sorted by count, highest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedFrequencyList {
    entries: Vec<RankedEntry>,
}

impl RankedFrequencyList {
    /// Keep only the `n` most frequent entries
    pub fn top(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank a frequency table by descending count.
///
/// `sort_by` is stable, so ties stay in first-seen order.
pub fn rank_frequencies(table: &LetterFrequencyTable) -> RankedFrequencyList {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(character, count)| RankedEntry { character, count })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));

    RankedFrequencyList { entries }
}
