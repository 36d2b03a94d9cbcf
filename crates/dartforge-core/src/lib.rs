//! DartForge Core - Throw, score and checkout types
//!
//! This crate provides the value types shared by the checkout calculator
//! and its consumers:
//! - [`Score`] and [`Multiplier`] for a single dart
//! - [`Checkout`] and [`Checkouts`] for finishing sequences
//! - [`CheckoutType`] and [`CheckinType`] for the leg rules
//! - [`Turn`] and the bogey numbers for validating entered turns

pub mod checkout;
pub mod error;
pub mod score;
pub mod turn;

pub use checkout::{
    CheckinType, Checkout, CheckoutType, Checkouts, Throws, UnknownRuleError, SEPARATOR,
};
pub use error::{DartForgeError, Result};
pub use score::{Multiplier, Score, ScoreParseError, BULLSEYE};
pub use turn::{is_bogey, Turn, BOGEY_NUMBERS, THROWS_PER_TURN};
