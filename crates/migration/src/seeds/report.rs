//! # Seed Reports
//!
//! Row counts produced by `clear` and `generate`.

use std::fmt;

use serde::Serialize;

/// Rows deleted per table by a clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClearReport {
    pub order_items:        u64,
    pub orders:             u64,
    pub cart_items:         u64,
    pub carts:              u64,
    pub addresses:          u64,
    pub product_promotions: u64,
    pub products:           u64,
    pub collections:        u64,
    pub promotions:         u64,
    pub customers:          u64,
    pub users:              u64,
}

impl ClearReport {
    pub fn total(&self) -> u64 {
        self.order_items +
            self.orders +
            self.cart_items +
            self.carts +
            self.addresses +
            self.product_promotions +
            self.products +
            self.collections +
            self.promotions +
            self.customers +
            self.users
    }
}

impl fmt::Display for ClearReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deleted: {} collections, {} promotions, {} products, {} customers, {} orders, {} carts ({} rows in total).",
            self.collections,
            self.promotions,
            self.products,
            self.customers,
            self.orders,
            self.carts,
            self.total()
        )
    }
}

/// Rows created by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub collections:          usize,
    pub promotions:           usize,
    pub products:             usize,
    /// Product to promotion assignments
    pub promotion_links:      usize,
    /// Collections given a featured product
    pub featured_collections: usize,
    pub customers:            usize,
    /// Customers dropped after a login collision
    pub skipped_customers:    usize,
    pub login_accounts:       usize,
    pub addresses:            usize,
    pub carts:                usize,
    pub cart_items:           usize,
    pub orders:               usize,
    pub order_items:          usize,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created: {} collections, {} promotions, {} products, {} customers, {} orders, {} carts.",
            self.collections, self.promotions, self.products, self.customers, self.orders, self.carts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_report_summary() {
        let report = SeedReport {
            collections: 2,
            promotions: 2,
            products: 3,
            ..Default::default()
        };
        assert_eq!(
            report.to_string(),
            "Created: 2 collections, 2 promotions, 3 products, 0 customers, 0 orders, 0 carts."
        );
    }

    #[test]
    fn test_clear_report_total() {
        let report = ClearReport {
            orders: 4,
            order_items: 9,
            users: 2,
            ..Default::default()
        };
        assert_eq!(report.total(), 15);
        assert!(report.to_string().ends_with("(15 rows in total)."));
        assert_eq!(ClearReport::default().total(), 0);
    }
}
