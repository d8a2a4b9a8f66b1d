//! Round driver tying the word store, frequency table and scorer together.
//!
//! Each round validates a guess against the full word list, applies its five
//! feedback positions to the candidates, then recomputes the letter
//! frequencies the next ranking is based on.

use tracing::info;

use crate::error::{Result, SolverError};
use crate::feedback::{DuplicatePolicy, Feedback};
use crate::frequency::{FrequencyTable, LetterFrequency};
use crate::scorer::{self, ScoredWord};
use crate::word_store::WordStore;
use crate::WORD_LENGTH;

/// Candidate counts either side of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub before: usize,
    pub after: usize,
}

impl RoundSummary {
    pub fn eliminated(&self) -> usize {
        self.before - self.after
    }
}

/// Split a `"<word> <feedback>"` line and validate both halves.
///
/// Only the shape is checked here; dictionary membership is checked by
/// [`Solver::apply_guess`].
pub fn parse_guess_line(line: &str) -> Result<(String, Feedback)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [word, feedback] = parts[..] else {
        return Err(SolverError::MalformedInput(line.trim().to_string()));
    };

    let found = word.chars().count();
    if found != WORD_LENGTH {
        return Err(SolverError::Length {
            field: "guess",
            expected: WORD_LENGTH,
            found,
        });
    }

    Ok((word.to_string(), Feedback::parse(feedback)?))
}

/// The main solver state: candidates plus the frequency snapshot computed
/// from them.
#[derive(Debug, Clone)]
pub struct Solver {
    store: WordStore,
    frequencies: FrequencyTable,
    policy: DuplicatePolicy,
}

impl Solver {
    pub fn new(store: WordStore, policy: DuplicatePolicy) -> Self {
        let frequencies = FrequencyTable::recompute(store.candidates());
        Self {
            store,
            frequencies,
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn remaining_count(&self) -> usize {
        self.store.candidate_count()
    }

    pub fn candidates(&self) -> &[String] {
        self.store.candidates()
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn reset(&mut self) {
        self.store.reset();
        self.frequencies = FrequencyTable::recompute(self.store.candidates());
    }

    /// Apply a full round of feedback for `guess`.
    ///
    /// The guess must be in the full word list. Nothing is removed unless the
    /// whole round validates.
    pub fn apply_guess(&mut self, guess: &str, feedback: Feedback) -> Result<RoundSummary> {
        let letters: [char; WORD_LENGTH] = guess
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|letters: Vec<char>| SolverError::Length {
                field: "guess",
                expected: WORD_LENGTH,
                found: letters.len(),
            })?;
        if !self.store.contains(guess) {
            return Err(SolverError::UnknownWord(guess.to_string()));
        }

        let before = self.store.candidate_count();
        let rules = feedback.rules(&letters, self.policy);
        let after = self.store.apply_rules(&rules);
        self.frequencies = FrequencyTable::recompute(self.store.candidates());

        info!(guess, %feedback, before, after, "applied round");
        Ok(RoundSummary { before, after })
    }

    /// Parse and apply a `"<word> <feedback>"` line.
    pub fn apply_line(&mut self, line: &str) -> Result<RoundSummary> {
        let (guess, feedback) = parse_guess_line(line)?;
        self.apply_guess(&guess, feedback)
    }

    /// Every candidate, best first.
    pub fn ranked(&self) -> Vec<ScoredWord> {
        scorer::rank_candidates(self.store.candidates(), &self.frequencies)
    }

    /// Up to `n` best candidates; all of them once the set is small.
    pub fn top_words(&self, n: usize) -> Vec<ScoredWord> {
        let ranked = self.ranked();
        scorer::top_words(&ranked, n).to_vec()
    }

    pub fn top_letters(&self, n: usize) -> Vec<LetterFrequency> {
        self.frequencies.top_letters(n)
    }
}
