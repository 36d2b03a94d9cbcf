//! DartForge Solver Engine
//!
//! This crate provides the checkout search:
//! - [`Calculator`] enumerating finishing sequences for a remaining score
//! - [`CalculatorOptions`] and [`CheckoutOption`] controlling limit,
//!   dart count and finishing rule
//! - [`checkouts_for`] as the one-call entry point
//!
//! Each calculation is a pure function of the score and the options; no
//! state survives between calls.

pub mod calculator;
pub mod options;
pub mod stats;

pub use calculator::{Calculator, MAX_TURN_SCORE};
pub use options::{CalculatorOptions, CheckoutOption};
pub use stats::SearchStats;

use dartforge_core::Checkouts;

/// Computes the checkouts for `score` under the given options.
///
/// Options not given keep their defaults: one result, three darts,
/// double-out.
///
/// # Example
///
/// ```
/// use dartforge_core::CheckoutType;
/// use dartforge_solver::{checkouts_for, CheckoutOption};
///
/// let checkouts = checkouts_for(25, [CheckoutOption::CheckoutType(CheckoutType::StraightOut)]);
/// assert_eq!(checkouts.to_string(), "B");
///
/// let checkouts = checkouts_for(25, [CheckoutOption::Limit(1)]);
/// assert_eq!(checkouts.to_string(), "1 → D12");
/// ```
pub fn checkouts_for(score: i32, options: impl IntoIterator<Item = CheckoutOption>) -> Checkouts {
    Calculator::new(options.into_iter().collect()).calculate(score)
}
