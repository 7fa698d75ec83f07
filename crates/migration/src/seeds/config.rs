//! # Seed Configuration
//!
//! How many rows of each kind to create and the value ranges they are drawn
//! from.

use std::ops::RangeInclusive;

use ::error::{AppError, Result};
use auth::PasswordConfig;
use rust_decimal::Decimal;

/// Options for a single seeding run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub product_count:        usize,
    pub customer_count:       usize,
    pub order_count:          usize,
    pub cart_count:           usize,
    pub collection_count:     usize,
    pub promotion_count:      usize,
    /// Create a login account for every customer
    pub with_login_accounts:  bool,
    /// Create one or two addresses per customer
    pub with_addresses:       bool,
    /// Pick a featured product for every collection
    pub feature_products:     bool,
    /// Delete existing rows before generating
    pub clear_first:          bool,
    /// Inclusive unit price bounds
    pub price_range:          (Decimal, Decimal),
    pub inventory_range:      RangeInclusive<i32>,
    /// Inclusive discount fraction bounds
    pub discount_range:       (f64, f64),
    /// Plain text password given to every seeded login account
    pub placeholder_password: String,
    pub password:             PasswordConfig,
    /// Fixed RNG seed for reproducible runs
    pub rng_seed:             Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            product_count:        15,
            customer_count:       10,
            order_count:          10,
            cart_count:           5,
            collection_count:     5,
            promotion_count:      5,
            with_login_accounts:  true,
            with_addresses:       true,
            feature_products:     true,
            clear_first:          true,
            price_range:          (Decimal::new(1000, 2), Decimal::new(50000, 2)),
            inventory_range:      0 ..= 100,
            discount_range:       (0.05, 0.5),
            placeholder_password: "1234".to_string(),
            password:             PasswordConfig::default(),
            rng_seed:             None,
        }
    }
}

impl SeedConfig {
    /// Checks that every range is well formed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` describing the first invalid option.
    pub fn validate(&self) -> Result<()> {
        let (low, high) = self.price_range;
        if low <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "price range must start above zero, got {}",
                low
            )));
        }
        if low.round_dp(2) != low || high.round_dp(2) != high {
            return Err(AppError::validation(format!(
                "price bounds must have at most two decimal places, got {} and {}",
                low, high
            )));
        }
        if low > high {
            return Err(AppError::validation(format!(
                "price range is inverted: {} > {}",
                low, high
            )));
        }
        // DECIMAL(6, 2)
        if high >= Decimal::new(1_000_000, 2) {
            return Err(AppError::validation(format!(
                "price {} does not fit in six digits",
                high
            )));
        }
        if self.inventory_range.is_empty() || *self.inventory_range.start() < 0 {
            return Err(AppError::validation(format!(
                "inventory range {:?} must be non-empty and non-negative",
                self.inventory_range
            )));
        }
        let (min_discount, max_discount) = self.discount_range;
        if !(0.0 ..= 1.0).contains(&min_discount) || !(0.0 ..= 1.0).contains(&max_discount) {
            return Err(AppError::validation("discount bounds must lie within [0, 1]"));
        }
        if min_discount > max_discount {
            return Err(AppError::validation(format!(
                "discount range is inverted: {} > {}",
                min_discount, max_discount
            )));
        }
        if self.with_login_accounts && self.placeholder_password.is_empty() {
            return Err(AppError::validation("placeholder password must not be empty"));
        }
        Ok(())
    }
}
