//! Frequency-based ranking of candidate words.
//!
//! A word scores the summed frequency of its distinct letters, so a guess
//! covering many common letters ranks above one repeating a common letter.

use std::cmp::Ordering;

use arrayvec::ArrayVec;
use rayon::prelude::*;

use crate::frequency::FrequencyTable;
use crate::{SMALL_SET_THRESHOLD, WORD_LENGTH};

/// A candidate paired with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

/// Distinct letters among the first [`WORD_LENGTH`] characters of `word`,
/// sorted so the summation order is fixed and anagrams score identically.
fn distinct_letters(word: &str) -> ArrayVec<char, WORD_LENGTH> {
    let mut letters = ArrayVec::new();
    for letter in word.chars().take(WORD_LENGTH) {
        if let Err(at) = letters.binary_search(&letter) {
            letters.insert(at, letter);
        }
    }
    letters
}

/// Sum of the frequencies of the distinct letters in `word`.
pub fn score_word(word: &str, table: &FrequencyTable) -> f64 {
    distinct_letters(word)
        .iter()
        .map(|&letter| table.get(letter))
        .sum()
}

/// Score every word and order them by score, highest first. Equal scores
/// keep their input order.
pub fn rank_candidates<S: AsRef<str> + Sync>(
    words: &[S],
    table: &FrequencyTable,
) -> Vec<ScoredWord> {
    let mut ranked: Vec<ScoredWord> = words
        .par_iter()
        .map(|word| {
            let word = word.as_ref();
            ScoredWord {
                word: word.to_string(),
                score: score_word(word, table),
            }
        })
        .collect();

    // par_sort_by is stable
    ranked.par_sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

/// The first `n` ranked words, or all of them when fewer than
/// [`SMALL_SET_THRESHOLD`] remain.
pub fn top_words(ranked: &[ScoredWord], n: usize) -> &[ScoredWord] {
    if ranked.len() < SMALL_SET_THRESHOLD {
        ranked
    } else {
        &ranked[..n.min(ranked.len())]
    }
}
