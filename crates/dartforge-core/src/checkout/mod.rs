//! Checkout sequences
//!
//! A [`Checkout`] is the ordered list of darts that brings a remaining score
//! to exactly zero. Sequences are assembled back to front while searching
//! (see [`Checkout::prepend`]) and then put into presentation order with
//! [`Checkout::reorder`].

mod collection;
mod kind;


use std::fmt;

use smallvec::SmallVec;

use crate::score::Score;

pub use collection::Checkouts;
pub use kind::{CheckinType, CheckoutType, UnknownRuleError};

/// Separator between darts in the text form of a checkout.
pub const SEPARATOR: &str = " → ";

/// Darts of one checkout, inline for the usual three.
pub type Throws = SmallVec<[Score; 3]>;

/// An ordered sequence of darts finishing a leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checkout {
    throws: Throws,
}

impl Checkout {
    /// Creates a one-dart checkout.
    pub fn single(score: Score) -> Self {
        let mut throws = Throws::new();
        throws.push(score);
        Checkout { throws }
    }

    /// Inserts a dart in front of the sequence.
    pub fn prepend(&mut self, score: Score) {
        self.throws.insert(0, score);
    }

    /// Puts the darts of sequences longer than two into presentation order.
    ///
    /// Straight-out sorts every dart by descending value. Double-out sorts
    /// all but the last dart, which stays the finishing double. Equal values
    /// keep their relative order.
    pub fn reorder(&mut self, checkout_type: CheckoutType) {
        if self.throws.len() <= 2 {
            return;
        }

        let head = match checkout_type {
            CheckoutType::StraightOut => &mut self.throws[..],
            CheckoutType::DoubleOut => {
                let last = self.throws.len() - 1;
                &mut self.throws[..last]
            }
        };
        head.sort_by(|a, b| b.value().cmp(&a.value()));
    }

    pub fn throws(&self) -> &[Score] {
        &self.throws
    }

    pub fn len(&self) -> usize {
        self.throws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.throws.is_empty()
    }

    /// Returns the finishing dart.
    pub fn last(&self) -> Option<&Score> {
        self.throws.last()
    }

    /// Returns the sum of all dart values.
    pub fn total(&self) -> i32 {
        self.throws.iter().map(Score::value).sum()
    }

    /// Returns the canonical text form, e.g. `T20 → T20 → DB`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<Score> for Checkout {
    fn from_iter<I: IntoIterator<Item = Score>>(iter: I) -> Self {
        Checkout {
            throws: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, score) in self.throws.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{score}")?;
        }
        Ok(())
    }
}
