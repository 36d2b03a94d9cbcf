//! DartForge - A darts checkout calculator in Rust
//!
//! Ask for the ways to finish a remaining score and get them back in the
//! order a player would want to throw them.
//!
//! # Example
//!
//! ```rust
//! use dartforge::prelude::*;
//!
//! let checkouts = checkouts_for(170, [CheckoutOption::Limit(3)]);
//! assert_eq!(checkouts.to_string(), "T20 → T20 → DB");
//!
//! let throw: Score = "T20".parse().unwrap();
//! assert_eq!(throw.value(), 60);
//! ```

// Value types
pub use dartforge_core::{
    is_bogey, CheckinType, Checkout, CheckoutType, Checkouts, DartForgeError, Multiplier, Score,
    ScoreParseError, Turn, BOGEY_NUMBERS, BULLSEYE,
};

// Search engine
pub use dartforge_solver::{checkouts_for, Calculator, CalculatorOptions, CheckoutOption};

// Configuration
pub use dartforge_config::{CheckoutConfig, ConfigError, DartsConfig};

#[cfg(feature = "console")]
pub mod console;

/// Computes checkouts with the settings of a loaded configuration.
///
/// ```
/// use dartforge::{checkouts_with_config, CheckoutType, DartsConfig};
///
/// let config = DartsConfig::new()
///     .with_limit(2)
///     .with_checkout_type(CheckoutType::StraightOut);
///
/// assert_eq!(checkouts_with_config(21, &config).to_string(), "T7, 1 → 20");
/// ```
pub fn checkouts_with_config(score: i32, config: &DartsConfig) -> Checkouts {
    Calculator::new(CalculatorOptions::from_config(&config.checkout)).calculate(score)
}

pub mod prelude {
    pub use super::{checkouts_for, checkouts_with_config, CheckoutOption};
    pub use super::{CheckinType, Checkout, CheckoutType, Checkouts, Multiplier, Score, Turn};
}
