//! Score types for single darts
//!
//! A [`Score`] is one dart: a board segment (1-20 or the bullseye) and the
//! ring it landed in. Triple bullseye does not exist and cannot be built.

mod multiplier;
mod parse;


use std::fmt;

pub use multiplier::Multiplier;
pub use parse::ScoreParseError;

/// Base value of the bullseye segment.
pub const BULLSEYE: u8 = 25;

/// One thrown dart.
///
/// # Examples
///
/// ```
/// use dartforge_core::{Multiplier, Score};
///
/// let t20 = Score::triple(20).unwrap();
/// assert_eq!(t20.value(), 60);
/// assert_eq!(t20.to_string(), "T20");
///
/// let bull = Score::parse("DB").unwrap();
/// assert_eq!(bull.value(), 50);
/// assert_eq!(bull.multiplier(), Multiplier::Double);
///
/// assert!(Score::triple(25).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    base: u8,
    multiplier: Multiplier,
}

impl Score {
    /// Segment bases in search order: the bullseye, then 1 through 20.
    pub const SEGMENTS: [u8; 21] = [
        BULLSEYE, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    ];

    /// Creates a score, rejecting unknown segments and triple bullseye.
    pub fn new(base: u8, multiplier: Multiplier) -> Result<Self, ScoreParseError> {
        if !(1..=20).contains(&base) && base != BULLSEYE {
            return Err(ScoreParseError::OutOfRange(i64::from(base)));
        }
        if base == BULLSEYE && multiplier == Multiplier::Triple {
            return Err(ScoreParseError::TripleBullseye);
        }
        Ok(Score { base, multiplier })
    }

    /// Creates a single-ring score.
    pub fn single(base: u8) -> Result<Self, ScoreParseError> {
        Self::new(base, Multiplier::None)
    }

    /// Creates a double-ring score.
    pub fn double(base: u8) -> Result<Self, ScoreParseError> {
        Self::new(base, Multiplier::Double)
    }

    /// Creates a triple-ring score.
    pub fn triple(base: u8) -> Result<Self, ScoreParseError> {
        Self::new(base, Multiplier::Triple)
    }

    /// Every legal throw, multiplier-major (single, double, triple) and
    /// within each multiplier in [`Score::SEGMENTS`] order.
    pub fn all() -> impl Iterator<Item = Score> {
        Multiplier::ALL.into_iter().flat_map(|multiplier| {
            Self::SEGMENTS
                .into_iter()
                .filter_map(move |base| Score::new(base, multiplier).ok())
        })
    }

    /// Returns the segment base (1-20, or 25 for the bullseye).
    #[inline]
    pub const fn base(&self) -> u8 {
        self.base
    }

    #[inline]
    pub const fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    #[inline]
    pub const fn is_bullseye(&self) -> bool {
        self.base == BULLSEYE
    }

    #[inline]
    pub const fn is_double(&self) -> bool {
        matches!(self.multiplier, Multiplier::Double)
    }

    /// Returns the points scored by this dart.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.base as i32 * self.multiplier.factor()
    }

    /// Returns the canonical text form, e.g. `T20`, `D5`, `B`, `DB`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.multiplier.prefix())?;
        if self.is_bullseye() {
            f.write_str("B")
        } else {
            write!(f, "{}", self.base)
        }
    }
}
