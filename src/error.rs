//! Error taxonomy shared by the word store, the filter and the round driver.

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while loading a word list or applying feedback.
///
/// `Load` and `Config` are fatal at startup. Every other variant is raised
/// before any candidate is removed, so the caller can re-prompt and retry.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("failed to load word list {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid letter status '{0}' (expected b, y or g)")]
    InvalidFeedback(char),

    #[error("position {position} is outside a word of length {length}")]
    Index { position: usize, length: usize },

    #[error("\"{0}\" is not in the word list")]
    UnknownWord(String),

    #[error("{field} must be {expected} letters, found {found}")]
    Length {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("expected \"<word> <feedback>\", got \"{0}\"")]
    MalformedInput(String),

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl SolverError {
    /// Whether the process can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SolverError::Load { .. } | SolverError::Config { .. })
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;
