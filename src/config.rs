//! Runtime settings, read from an optional TOML file.
//!
//! Every field has a default, so an empty file (or none at all) is valid.
//!
//! ```toml
//! dictionary = "dictionary/dictionary.txt"
//! max_words = 10
//! max_letters = 10
//! duplicates = "literal"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SolverError};
use crate::feedback::DuplicatePolicy;

pub const DEFAULT_DICTIONARY: &str = "dictionary/dictionary.txt";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word list to load at startup.
    pub dictionary: PathBuf,
    /// How many ranked words to show.
    pub max_words: usize,
    /// How many letters to show in the frequency listing.
    pub max_letters: usize,
    pub duplicates: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            max_words: 10,
            max_letters: 10,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SolverError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&contents).map_err(|reason| SolverError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, String> {
        let config: Config = toml::from_str(toml_str).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_words == 0 {
            return Err("max_words must be at least 1".to_string());
        }
        if self.max_letters == 0 {
            return Err("max_letters must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn reads_every_field() {
        let config = Config::from_toml_str(
            r#"
            dictionary = "words.txt"
            max_words = 3
            max_letters = 26
            duplicates = "tallied"
            "#,
        )
        .unwrap();
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
        assert_eq!(config.max_words, 3);
        assert_eq!(config.max_letters, 26);
        assert_eq!(config.duplicates, DuplicatePolicy::Tallied);
    }

    #[test]
    fn rejects_zero_limits_and_unknown_keys() {
        assert!(Config::from_toml_str("max_words = 0").is_err());
        assert!(Config::from_toml_str("max_letters = 0").is_err());
        assert!(Config::from_toml_str("colour = true").is_err());
    }
}
