//! Letter frequencies across a set of words.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A letter and its share of all letter occurrences in a word set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterFrequency {
    pub letter: char,
    pub frequency: f64,
}

/// Snapshot of letter frequencies for one word set.
///
/// Every position of every word is counted, so a doubled letter counts twice.
/// Frequencies sum to 1.0 for a non-empty set; an empty set yields an empty
/// table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    frequencies: BTreeMap<char, f64>,
}

impl FrequencyTable {
    pub fn recompute<S: AsRef<str>>(words: &[S]) -> Self {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        let mut total = 0usize;
        for word in words {
            for letter in word.as_ref().chars() {
                *counts.entry(letter).or_insert(0) += 1;
                total += 1;
            }
        }

        let frequencies = counts
            .into_iter()
            .map(|(letter, count)| (letter, count as f64 / total as f64))
            .collect();
        Self { frequencies }
    }

    /// Frequency of `letter`, 0.0 when it never occurs.
    pub fn get(&self, letter: char) -> f64 {
        self.frequencies.get(&letter).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Entries in letter order.
    pub fn iter(&self) -> impl Iterator<Item = LetterFrequency> + '_ {
        self.frequencies
            .iter()
            .map(|(&letter, &frequency)| LetterFrequency { letter, frequency })
    }

    /// The `n` most frequent letters, highest first, ties by letter.
    pub fn top_letters(&self, n: usize) -> Vec<LetterFrequency> {
        let mut entries: Vec<LetterFrequency> = self.iter().collect();
        entries.sort_by(|a, b| {
            b.frequency
                .partial_cmp(&a.frequency)
                .unwrap_or(Ordering::Equal)
                .then(a.letter.cmp(&b.letter))
        });
        entries.truncate(n);
        entries
    }
}
