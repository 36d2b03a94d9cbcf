//! Shared test fixtures for DartForge crates.
//!
//! - [`golden`] - Checkout results fixed for known scores under both rules
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! dartforge-test = { workspace = true }
//! ```

pub mod golden;

pub use golden::{GoldenCase, GOLDEN_CASES};
