//! Turns entered dart by dart, and totals no turn can reach

use crate::checkout::{CheckoutType, Throws};
use crate::error::{DartForgeError, Result};
use crate::score::Score;

/// Darts a player throws per turn.
pub const THROWS_PER_TURN: usize = 3;

/// Scores below 170 that three darts cannot check out under double-out,
/// ascending.
pub const BOGEY_NUMBERS: [i32; 7] = [159, 162, 163, 165, 166, 168, 169];

/// Returns whether `total` is a bogey number.
///
/// ```
/// assert!(dartforge_core::is_bogey(169));
/// assert!(!dartforge_core::is_bogey(170));
/// ```
pub fn is_bogey(total: i32) -> bool {
    BOGEY_NUMBERS.contains(&total)
}

/// The darts of one turn, in the order thrown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    throws: Throws,
}

impl Turn {
    /// Parses up to three throws separated by commas and/or whitespace,
    /// e.g. `T20, T20 DB`.
    ///
    /// # Errors
    ///
    /// Fails on empty input, on more than three throws, and on the first
    /// throw that is not a valid score.
    pub fn parse(input: &str) -> Result<Self> {
        let segments: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        match segments.len() {
            0 => Err(DartForgeError::NoThrows),
            n if n > THROWS_PER_TURN => Err(DartForgeError::TooManyThrows(n)),
            _ => {
                let throws = segments
                    .into_iter()
                    .map(Score::parse)
                    .collect::<std::result::Result<Throws, _>>()?;
                Ok(Turn { throws })
            }
        }
    }

    pub fn throws(&self) -> &[Score] {
        &self.throws
    }

    /// Returns the points scored in this turn.
    pub fn total(&self) -> i32 {
        self.throws.iter().map(Score::value).sum()
    }

    /// Returns whether this turn finishes a leg standing at `remaining`.
    pub fn finishes(&self, remaining: i32, checkout_type: CheckoutType) -> bool {
        self.total() == remaining
            && self
                .throws
                .last()
                .is_some_and(|last| checkout_type.allows_finish(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators() {
        let turn = Turn::parse("T20, T20 DB").unwrap();
        assert_eq!(turn.throws().len(), 3);
        assert_eq!(turn.total(), 170);

        let turn = Turn::parse("  D20  ").unwrap();
        assert_eq!(turn.total(), 40);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Turn::parse(""), Err(DartForgeError::NoThrows)));
        assert!(matches!(Turn::parse(" , "), Err(DartForgeError::NoThrows)));
        assert!(matches!(
            Turn::parse("1 2 3 4"),
            Err(DartForgeError::TooManyThrows(4))
        ));
        assert!(matches!(
            Turn::parse("T20 TB"),
            Err(DartForgeError::InvalidScore(_))
        ));
    }

    #[test]
    fn test_finishes() {
        let turn = Turn::parse("T20 T20 DB").unwrap();
        assert!(turn.finishes(170, CheckoutType::DoubleOut));
        assert!(!turn.finishes(171, CheckoutType::DoubleOut));

        let turn = Turn::parse("T20 T20 T20").unwrap();
        assert!(turn.finishes(180, CheckoutType::StraightOut));
        assert!(!turn.finishes(180, CheckoutType::DoubleOut));
    }

    #[test]
    fn test_bogey_numbers() {
        for total in BOGEY_NUMBERS {
            assert!(is_bogey(total));
        }
        assert!(!is_bogey(170));
        assert!(!is_bogey(180));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_score() -> impl Strategy<Value = Score> {
            let all: Vec<Score> = Score::all().collect();
            proptest::sample::select(all)
        }

        proptest! {
            #[test]
            fn entered_turn_totals_its_throws(throws in proptest::collection::vec(any_score(), 1..=3)) {
                let entered: Vec<String> = throws.iter().map(Score::render).collect();
                let turn = Turn::parse(&entered.join(", ")).unwrap();

                prop_assert_eq!(turn.throws(), throws.as_slice());
                prop_assert_eq!(turn.total(), throws.iter().map(Score::value).sum::<i32>());
            }
        }
    }
}
