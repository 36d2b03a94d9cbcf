//! Multiplier - the ring a dart lands in

use std::fmt;

/// Scoring factor applied to the base value of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Multiplier {
    /// Single ring (factor 1), rendered without prefix.
    #[default]
    None,
    /// Double ring (factor 2), rendered as `D`.
    Double,
    /// Triple ring (factor 3), rendered as `T`.
    Triple,
}

impl Multiplier {
    /// All multipliers in search order, easiest to hit first.
    pub const ALL: [Multiplier; 3] = [Multiplier::None, Multiplier::Double, Multiplier::Triple];

    /// Returns the scoring factor.
    #[inline]
    pub const fn factor(self) -> i32 {
        match self {
            Multiplier::None => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }

    /// Returns the text prefix used in the canonical form.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Multiplier::None => "",
            Multiplier::Double => "D",
            Multiplier::Triple => "T",
        }
    }

    /// Splits a leading `T` or `D` off the input.
    pub(crate) fn strip_prefix(input: &str) -> (Multiplier, &str) {
        if let Some(rest) = input.strip_prefix('T') {
            (Multiplier::Triple, rest)
        } else if let Some(rest) = input.strip_prefix('D') {
            (Multiplier::Double, rest)
        } else {
            (Multiplier::None, input)
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
