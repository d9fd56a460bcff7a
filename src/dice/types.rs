use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single possible outcome of a die.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)] // Numbers stay JSON numbers, text stays JSON strings
pub enum Face {
    Number(i64),
    Text(String),
}

impl Face {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Face::Number(n) => Some(*n),
            Face::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Face::Number(_))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Number(n) => write!(f, "{}", n),
            Face::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Face {
    fn from(value: i64) -> Self {
        Face::Number(value)
    }
}

impl From<&str> for Face {
    fn from(value: &str) -> Self {
        Face::Text(value.to_string())
    }
}

impl From<String> for Face {
    fn from(value: String) -> Self {
        Face::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollResult {
    /// Every draw was numeric: the total plus the bonus.
    Sum(i64),
    /// At least one draw was text, the draws are returned as rolled.
    RawDraws(Vec<Face>),
}

impl RollResult {
    pub fn as_sum(&self) -> Option<i64> {
        match self {
            RollResult::Sum(total) => Some(*total),
            RollResult::RawDraws(_) => None,
        }
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollResult::Sum(total) => write!(f, "{}", total),
            RollResult::RawDraws(draws) => f.write_str(&format_draws(draws)),
        }
    }
}

/// Renders draws as `[a, b, c]`.
pub(crate) fn format_draws(draws: &[Face]) -> String {
    let inner: Vec<String> = draws.iter().map(Face::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// Optional arguments of a roll. `RollRequest::default()` is a single plain roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    pub times: u32,
    pub bonus: i64,
    pub show_each: bool,
}

impl Default for RollRequest {
    fn default() -> Self {
        Self { times: 1, bonus: 0, show_each: false }
    }
}

impl RollRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn times(mut self, times: u32) -> Self {
        self.times = times;
        self
    }

    pub fn bonus(mut self, bonus: i64) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn show_each(mut self, show_each: bool) -> Self {
        self.show_each = show_each;
        self
    }
}

#[derive(Debug, Error)]
pub enum DiceError {
    #[error("die declares {expected} faces but {actual} were given")]
    FaceCountMismatch { expected: u32, actual: usize },

    #[error("cannot roll a die without faces")]
    NoFaces,

    #[error("roll of Die({die}) is not numeric")]
    IncompatibleRoll { die: u32 },

    #[error("roll total does not fit in an i64")]
    Overflow,

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
