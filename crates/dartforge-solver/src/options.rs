//! Calculator options
//!
//! Options are passed either as a [`CalculatorOptions`] value built with its
//! `with_*` methods, or as a list of [`CheckoutOption`]s where later entries
//! override earlier ones.

use dartforge_config::CheckoutConfig;
use dartforge_core::CheckoutType;

/// A single calculator setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOption {
    /// Stop after this many distinct checkouts.
    Limit(usize),
    /// Maximum number of darts in one checkout.
    MaxThrows(u8),
    /// Finishing rule.
    CheckoutType(CheckoutType),
}

/// Resolved calculator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Maximum number of distinct checkouts returned.
    pub limit: usize,
    /// Maximum number of darts in one checkout.
    pub max_throws: u8,
    /// Finishing rule.
    pub checkout_type: CheckoutType,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            limit: 1,
            max_throws: 3,
            checkout_type: CheckoutType::DoubleOut,
        }
    }
}

impl CalculatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes limit, dart count and finishing rule from configuration.
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self {
            limit: config.limit,
            max_throws: config.max_throws,
            checkout_type: config.checkout_type,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_max_throws(mut self, max_throws: u8) -> Self {
        self.max_throws = max_throws;
        self
    }

    pub fn with_checkout_type(mut self, checkout_type: CheckoutType) -> Self {
        self.checkout_type = checkout_type;
        self
    }

    /// Applies one option on top of the current settings.
    pub fn apply(&mut self, option: CheckoutOption) {
        match option {
            CheckoutOption::Limit(limit) => self.limit = limit,
            CheckoutOption::MaxThrows(max_throws) => self.max_throws = max_throws,
            CheckoutOption::CheckoutType(checkout_type) => self.checkout_type = checkout_type,
        }
    }
}

impl FromIterator<CheckoutOption> for CalculatorOptions {
    fn from_iter<I: IntoIterator<Item = CheckoutOption>>(iter: I) -> Self {
        let mut options = Self::default();
        for option in iter {
            options.apply(option);
        }
        options
    }
}

impl From<&CheckoutConfig> for CalculatorOptions {
    fn from(config: &CheckoutConfig) -> Self {
        Self::from_config(config)
    }
}
