//! Feedback parsing and the elimination rules derived from it.
//!
//! A round of feedback is five [`Status`] values, one per letter of the guess.
//! Each status turns into a [`Rule`] that says which candidates to drop.

use std::fmt;

use crate::error::{Result, SolverError};
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Letter not in word (black)
    Black,
    /// Letter in word, wrong position (yellow)
    Yellow,
    /// Letter in word, correct position (green)
    Green,
}

impl Status {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Status::Green => '🟩',
            Status::Yellow => '🟨',
            Status::Black => '⬛',
        }
    }

    /// Parse from a status code (b=black, y=yellow, g=green)
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'b' => Ok(Status::Black),
            'y' => Ok(Status::Yellow),
            'g' => Ok(Status::Green),
            other => Err(SolverError::InvalidFeedback(other)),
        }
    }

    fn is_claim(self) -> bool {
        matches!(self, Status::Yellow | Status::Green)
    }
}

impl TryFrom<char> for Status {
    type Error = SolverError;

    fn try_from(c: char) -> Result<Self> {
        Status::from_char(c)
    }
}

/// A complete feedback row for a 5-letter guess, e.g. `gybbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(pub [Status; WORD_LENGTH]);

impl Feedback {
    pub const ALL_GREEN: Self = Self([Status::Green; WORD_LENGTH]);

    /// Parse a row like `"gybbb"`. Length is checked before the letters.
    pub fn parse(s: &str) -> Result<Self> {
        let found = s.chars().count();
        if found != WORD_LENGTH {
            return Err(SolverError::Length {
                field: "feedback",
                expected: WORD_LENGTH,
                found,
            });
        }
        let mut statuses = [Status::Black; WORD_LENGTH];
        for (slot, c) in statuses.iter_mut().zip(s.chars()) {
            *slot = Status::from_char(c)?;
        }
        Ok(Self(statuses))
    }

    pub fn is_win(&self) -> bool {
        *self == Self::ALL_GREEN
    }

    /// Translate this row, paired with the guess it grades, into elimination
    /// rules in position order.
    ///
    /// Under [`DuplicatePolicy::Tallied`] a black letter that is also claimed
    /// yellow or green elsewhere in the same guess only caps the number of
    /// copies instead of excluding the letter outright.
    pub fn rules(&self, guess: &[char; WORD_LENGTH], policy: DuplicatePolicy) -> Vec<Rule> {
        self.0
            .iter()
            .zip(guess.iter())
            .enumerate()
            .map(|(position, (&status, &letter))| match status {
                Status::Black => {
                    let claims = match policy {
                        DuplicatePolicy::Literal => 0,
                        DuplicatePolicy::Tallied => self.claims(guess, letter),
                    };
                    if claims == 0 {
                        Rule::Absent { letter }
                    } else {
                        Rule::Capped {
                            letter,
                            max: claims,
                            position,
                        }
                    }
                }
                Status::Yellow => Rule::Misplaced { letter, position },
                Status::Green => Rule::Placed { letter, position },
            })
            .collect()
    }

    /// How many copies of `letter` the guess marks yellow or green.
    fn claims(&self, guess: &[char; WORD_LENGTH], letter: char) -> usize {
        self.0
            .iter()
            .zip(guess.iter())
            .filter(|&(status, &c)| status.is_claim() && c == letter)
            .count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.0 {
            write!(f, "{}", status.to_char())?;
        }
        Ok(())
    }
}

/// How black feedback on a letter repeated within one guess is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Every black drops all words containing the letter. The player must
    /// mark a black duplicate of a yellow/green letter as yellow.
    #[default]
    Literal,
    /// Black only drops words holding more copies than the round claims.
    Tallied,
}

/// One elimination rule. Applying a rule only ever removes candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Drop every word containing `letter`.
    Absent { letter: char },
    /// Drop words lacking `letter`, then words with `letter` at `position`.
    Misplaced { letter: char, position: usize },
    /// Drop words without `letter` at `position`.
    Placed { letter: char, position: usize },
    /// Drop words with more than `max` copies of `letter` or with `letter`
    /// at `position`.
    Capped {
        letter: char,
        max: usize,
        position: usize,
    },
}

impl Rule {
    /// Build the rule for a single `(letter, status, position)` triple.
    pub fn new(letter: char, status: Status, position: usize) -> Result<Self> {
        if position >= WORD_LENGTH {
            return Err(SolverError::Index {
                position,
                length: WORD_LENGTH,
            });
        }
        Ok(match status {
            Status::Black => Rule::Absent { letter },
            Status::Yellow => Rule::Misplaced { letter, position },
            Status::Green => Rule::Placed { letter, position },
        })
    }

    /// The ordered removal passes this rule performs. Each pass runs over the
    /// output of the previous one.
    pub(crate) fn passes(&self) -> Vec<Pass> {
        match *self {
            Rule::Absent { letter } => vec![Pass::Contains(letter)],
            Rule::Misplaced { letter, position } => vec![
                Pass::Lacks(letter),
                Pass::At { letter, position },
            ],
            Rule::Placed { letter, position } => vec![Pass::NotAt { letter, position }],
            Rule::Capped {
                letter,
                max,
                position,
            } => vec![
                Pass::MoreThan { letter, max },
                Pass::At { letter, position },
            ],
        }
    }
}

/// A single removal predicate: a candidate matching it is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    Contains(char),
    Lacks(char),
    At { letter: char, position: usize },
    NotAt { letter: char, position: usize },
    MoreThan { letter: char, max: usize },
}

impl Pass {
    pub(crate) fn removes(&self, word: &str) -> bool {
        match *self {
            Pass::Contains(letter) => word.contains(letter),
            Pass::Lacks(letter) => !word.contains(letter),
            Pass::At { letter, position } => letter_at(word, position) == Some(letter),
            Pass::NotAt { letter, position } => letter_at(word, position) != Some(letter),
            Pass::MoreThan { letter, max } => word.chars().filter(|&c| c == letter).count() > max,
        }
    }
}

fn letter_at(word: &str, position: usize) -> Option<char> {
    word.chars().nth(position)
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Contains(letter) => write!(f, "words with {letter}"),
            Pass::Lacks(letter) => write!(f, "words without {letter}"),
            Pass::At { letter, position } => {
                write!(f, "words with {letter} at index {position}")
            }
            Pass::NotAt { letter, position } => {
                write!(f, "words without {letter} at index {position}")
            }
            Pass::MoreThan { letter, max } => {
                write!(f, "words with more than {max} {letter}")
            }
        }
    }
}
