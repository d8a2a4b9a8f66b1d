//! # Wordle Freq
//!
//! A Wordle assistant that narrows a word list from guess feedback and ranks
//! what is left by letter frequency.
//!
//! Each round applies five `(letter, status, position)` filters to the
//! candidate set, recomputes how often each letter occurs among the
//! survivors, and scores every candidate by the summed frequency of its
//! distinct letters.

pub mod config;
pub mod error;
pub mod feedback;
pub mod frequency;
pub mod logging;
pub mod scorer;
pub mod solver;
pub mod word_store;

pub use config::Config;
pub use error::{Result, SolverError};
pub use feedback::{DuplicatePolicy, Feedback, Rule, Status};
pub use frequency::{FrequencyTable, LetterFrequency};
pub use scorer::{rank_candidates, score_word, top_words, ScoredWord};
pub use solver::{parse_guess_line, RoundSummary, Solver};
pub use word_store::WordStore;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Below this many candidates, [`top_words`] returns every candidate.
pub const SMALL_SET_THRESHOLD: usize = 50;
