//! Core text analyzer implementation
//!
//! This file contains the word counter and the frequency counters that turn
//! a loaded book into `TextStats`.

use std::collections::HashMap;

use log::{debug, info};

/// What the frequency counter keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountMode {
    /// Alphabetic characters only
    #[default]
    Letters,
    /// Every character, whitespace and punctuation included
    AllChars,
}

/// Character counts that remember the order in which keys were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequencyTable {
    entries: Vec<(char, usize)>,
    index: HashMap<char, usize>,
}

impl LetterFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `c`, appending it if unseen
    pub fn record(&mut self, c: char) {
        match self.index.get(&c) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(c, self.entries.len());
                self.entries.push((c, 1));
            }
        }
    }

    /// Count for `c`, zero when absent
    pub fn get(&self, c: char) -> usize {
        self.index.get(&c).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }
}

/// Result of analyzing one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStats {
    /// Number of whitespace-separated words
    pub word_count: usize,
    /// Per-character counts
    pub frequencies: LetterFrequencyTable,
}

/// Count maximal runs of non-whitespace characters
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count alphabetic characters case-insensitively.
///
/// Every character is lowercased first; a single uppercase char may expand
/// into several lowercase ones, each of which is classified on its own.
/// Digits, punctuation, symbols and whitespace are skipped.
pub fn count_letters(text: &str) -> LetterFrequencyTable {
    let mut table = LetterFrequencyTable::new();

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphabetic() {
            table.record(c);
        }
    }

    table
}

/// Count every lowercased character, including whitespace and punctuation
pub fn count_chars(text: &str) -> LetterFrequencyTable {
    let mut table = LetterFrequencyTable::new();

    for c in text.chars().flat_map(char::to_lowercase) {
        table.record(c);
    }

    table
}

/// Runs both counters over a loaded text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer {
    mode: CountMode,
}

impl TextAnalyzer {
    /// Create a new TextAnalyzer
    ///
    /// # Arguments
    ///
    /// * `mode` - Which characters the frequency table keeps
    pub fn new(mode: CountMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CountMode {
        self.mode
    }

    /// Compute word count and character frequencies for `text`
    pub fn analyze(&self, text: &str) -> TextStats {
        info!("Analyzing {} bytes of text ({:?} mode)", text.len(), self.mode);

        let word_count = count_words(text);
        let frequencies = match self.mode {
            CountMode::Letters => count_letters(text),
            CountMode::AllChars => count_chars(text),
        };

        debug!(
            "Found {} words and {} distinct characters",
            word_count,
            frequencies.len()
        );

        TextStats { word_count, frequencies }
    }
}
