//! The full word list and the shrinking candidate set carved out of it.

use std::fs;
use std::path::Path;

use fxhash::FxHashSet;
use tracing::{debug, info};

use crate::error::{Result, SolverError};
use crate::feedback::{Rule, Status};

/// Owns the immutable full word list and the candidate subset.
///
/// Candidates are only ever removed, and always keep the order they had in
/// the full list. Outside code gets read access only; every mutation goes
/// through [`WordStore::apply_feedback`] or [`WordStore::apply_rules`].
#[derive(Debug, Clone)]
pub struct WordStore {
    all_words: Vec<String>,
    index: FxHashSet<String>,
    candidates: Vec<String>,
}

impl WordStore {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            index: words.iter().cloned().collect(),
            candidates: words.clone(),
            all_words: words,
        }
    }

    /// Read a newline-delimited word list. Lines are taken verbatim: no
    /// trimming, case folding or length check.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SolverError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let words: Vec<String> = contents.lines().map(str::to_string).collect();
        info!(path = %path.display(), words = words.len(), "loaded word list");
        Ok(Self::new(words))
    }

    /// Exact membership in the full list, regardless of what has been
    /// filtered out of the candidates.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidate_at(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(String::as_str)
    }

    pub fn reset(&mut self) {
        self.candidates = self.all_words.clone();
    }

    /// Apply one `(letter, status, position)` feedback triple and return the
    /// new candidate count. An out-of-range position is rejected before any
    /// candidate is touched.
    pub fn apply_feedback(
        &mut self,
        letter: char,
        status: Status,
        position: usize,
    ) -> Result<usize> {
        let rule = Rule::new(letter, status, position)?;
        Ok(self.apply_rule(rule))
    }

    /// Apply already-validated rules in order and return the new candidate
    /// count.
    pub fn apply_rules(&mut self, rules: &[Rule]) -> usize {
        for &rule in rules {
            self.apply_rule(rule);
        }
        self.candidates.len()
    }

    fn apply_rule(&mut self, rule: Rule) -> usize {
        for pass in rule.passes() {
            let before = self.candidates.len();
            self.candidates.retain(|word| !pass.removes(word));
            debug!(
                removed = before - self.candidates.len(),
                remaining = self.candidates.len(),
                "eliminated {pass}"
            );
        }
        self.candidates.len()
    }
}
