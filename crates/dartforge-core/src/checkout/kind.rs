//! Finishing and opening rules of a leg

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::score::Score;

/// Error for an unrecognized rule name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {rule} type: {value}")]
pub struct UnknownRuleError {
    rule: &'static str,
    value: String,
}

/// Rule for the dart that brings the remaining score to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CheckoutType {
    /// Any dart may finish the leg.
    StraightOut,
    /// The finishing dart must be a double.
    #[default]
    DoubleOut,
}

impl CheckoutType {
    /// Returns whether `last` may be the finishing dart under this rule.
    pub fn allows_finish(self, last: &Score) -> bool {
        match self {
            CheckoutType::StraightOut => true,
            CheckoutType::DoubleOut => last.is_double(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CheckoutType::StraightOut => "straight-out",
            CheckoutType::DoubleOut => "double-out",
        }
    }
}

impl fmt::Display for CheckoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutType {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "straight-out" => Ok(CheckoutType::StraightOut),
            "double-out" => Ok(CheckoutType::DoubleOut),
            other => Err(UnknownRuleError {
                rule: "check-out",
                value: other.to_string(),
            }),
        }
    }
}

/// Rule for the first scoring dart of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CheckinType {
    /// Scoring starts with any dart.
    #[default]
    StraightIn,
    /// Scoring starts with a double.
    DoubleIn,
}

impl CheckinType {
    /// Returns whether `first` may open the leg under this rule.
    pub fn allows(self, first: &Score) -> bool {
        match self {
            CheckinType::StraightIn => true,
            CheckinType::DoubleIn => first.is_double(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CheckinType::StraightIn => "straight-in",
            CheckinType::DoubleIn => "double-in",
        }
    }
}

impl fmt::Display for CheckinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckinType {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "straight-in" => Ok(CheckinType::StraightIn),
            "double-in" => Ok(CheckinType::DoubleIn),
            other => Err(UnknownRuleError {
                rule: "check-in",
                value: other.to_string(),
            }),
        }
    }
}
