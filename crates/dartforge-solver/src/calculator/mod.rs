//! Checkout calculator.
//!
//! Depth-first enumeration of dart sequences that finish a remaining score.
//! The discovery order decides which checkouts survive the result limit, so
//! every loop below runs in a fixed order:
//!
//! 1. one-dart finishes: single, then double, then triple;
//! 2. longer sequences, assuming the rest can be finished with as few
//!    further darts as possible and widening that assumption step by step;
//! 3. within one assumption, candidate darts in [`Score::all`] order
//!    (single, double, triple; bullseye first, then 1 to 20).
//!
//! Logging levels:
//! - **DEBUG**: calculation start and end with node counts
//! - **TRACE**: every checkout added to the top-level result

#[cfg(test)]
mod tests;

use dartforge_core::{Checkout, CheckoutType, Checkouts, Score, BULLSEYE};
use tracing::{debug, trace};

use crate::options::CalculatorOptions;
use crate::stats::SearchStats;

/// Highest score three darts can reach.
pub const MAX_TURN_SCORE: i32 = 180;

/// Enumerates checkouts for remaining scores.
///
/// # Example
///
/// ```
/// use dartforge_core::CheckoutType;
/// use dartforge_solver::{Calculator, CalculatorOptions};
///
/// let calculator = Calculator::new(
///     CalculatorOptions::new()
///         .with_limit(2)
///         .with_checkout_type(CheckoutType::DoubleOut),
/// );
///
/// let checkouts = calculator.calculate(100);
/// assert_eq!(checkouts.to_string(), "DB → DB, T20 → D20");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    options: CalculatorOptions,
}

impl Calculator {
    pub fn new(options: CalculatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Returns up to `limit` distinct checkouts for `score`, best first.
    ///
    /// Scores that cannot be finished, including anything at or below zero
    /// and above 180, yield an empty result.
    pub fn calculate(&self, score: i32) -> Checkouts {
        let mut stats = SearchStats::default();
        stats.start();

        debug!(
            event = "search_start",
            score = score,
            limit = self.options.limit,
            max_throws = self.options.max_throws,
            checkout_type = %self.options.checkout_type,
        );

        let found = self.search(score, 1, &mut stats);

        debug!(
            event = "search_end",
            score = score,
            found = found.len(),
            nodes = stats.nodes,
            pruned = stats.pruned,
            accepted = stats.accepted,
            duration_us = stats.elapsed().as_micros() as u64,
        );

        for checkout in &found {
            trace!(event = "checkout", score = score, checkout = %checkout);
        }

        found
    }

    /// Searches checkouts for `remaining` with dart number `throw` up next.
    ///
    /// Every call owns its result set and is bounded by the same limit, so
    /// a sub-search never sees the checkouts of its siblings or parent.
    fn search(&self, remaining: i32, throw: u8, stats: &mut SearchStats) -> Checkouts {
        stats.record_node();
        let mut found = Checkouts::new();

        if self.is_full(&found)
            || throw > self.options.max_throws
            || remaining <= 0
            || remaining > MAX_TURN_SCORE
        {
            stats.record_pruned();
            return found;
        }

        for finish in self.direct_finishes(remaining) {
            if self.accept(&mut found, Checkout::single(finish), stats) {
                return found;
            }
        }

        // Assume the rest takes as few darts as possible first, then allow
        // one more each round until the rest may start right after `throw`.
        let mut next_throw = self.options.max_throws;
        while next_throw > throw {
            for candidate in Score::all() {
                let rest = remaining - candidate.value();
                if rest <= 0 {
                    continue;
                }

                for mut checkout in self.search(rest, next_throw, stats) {
                    checkout.prepend(candidate);
                    checkout.reorder(self.options.checkout_type);

                    if self.accept(&mut found, checkout, stats) {
                        return found;
                    }
                }
            }
            next_throw -= 1;
        }

        found
    }

    /// One-dart finishes for `remaining`, in priority order.
    fn direct_finishes(&self, remaining: i32) -> impl Iterator<Item = Score> {
        let straight = self.options.checkout_type == CheckoutType::StraightOut;
        let bullseye = i32::from(BULLSEYE);

        let single = (straight && (remaining <= 20 || remaining == bullseye))
            .then(|| Score::single(remaining as u8).ok())
            .flatten();

        let double = (remaining % 2 == 0 && (remaining <= 40 || remaining == 2 * bullseye))
            .then(|| Score::double((remaining / 2) as u8).ok())
            .flatten();

        let triple = (straight && remaining <= 60 && remaining % 3 == 0)
            .then(|| Score::triple((remaining / 3) as u8).ok())
            .flatten();

        [single, double, triple].into_iter().flatten()
    }

    /// Adds `checkout` unless its text form is already present.
    ///
    /// Returns `true` once the limit is reached.
    fn accept(&self, found: &mut Checkouts, checkout: Checkout, stats: &mut SearchStats) -> bool {
        if found.push(checkout) {
            stats.record_accepted();
        }
        self.is_full(found)
    }

    fn is_full(&self, found: &Checkouts) -> bool {
        found.len() >= self.options.limit
    }
}
