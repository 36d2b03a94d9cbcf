//! Parsing of the canonical throw text form

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use super::{Multiplier, Score, BULLSEYE};

/// Error when a throw cannot be parsed or constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreParseError {
    #[error("invalid score '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("score must be greater than 0")]
    NotPositive(i64),

    #[error("score must be between 1 and 20 (or B for bullseye)")]
    OutOfRange(i64),

    #[error("there is no triple bullseye")]
    TripleBullseye,
}

impl Score {
    /// Parses the canonical form: an optional `T` or `D` prefix followed by
    /// a segment number from 1 to 20 or `B` for the bullseye.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreParseError`] for malformed numbers, numbers outside
    /// 1-20, and `TB`.
    pub fn parse(input: &str) -> Result<Self, ScoreParseError> {
        let input = input.trim();
        let (multiplier, rest) = Multiplier::strip_prefix(input);

        if rest == "B" {
            return Score::new(BULLSEYE, multiplier);
        }

        let base: i64 = rest.parse().map_err(|source| ScoreParseError::InvalidNumber {
            input: input.to_string(),
            source,
        })?;

        if base <= 0 {
            return Err(ScoreParseError::NotPositive(base));
        }
        if base > 20 {
            return Err(ScoreParseError::OutOfRange(base));
        }

        Score::new(base as u8, multiplier)
    }
}

impl FromStr for Score {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Score::parse(s)
    }
}
