//! # CLI Commands
//!
//! Implementation of CLI commands for the storefront tool.

pub mod clear;
pub mod completions;
pub mod migrate;
pub mod seed;
pub mod stats;
pub mod validate;

use clap::{Args, Subcommand};
use migration::seeds::SeedConfig;
use rust_decimal::Decimal;

/// Available commands for the storefront CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Replace the store contents with generated sample data
    Seed(SeedArgs),

    /// Delete all seeded data
    Clear,

    /// Show row counts per table
    Stats,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration
    Validate,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// List pending migrations without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Rollback the last migration
    #[arg(long, conflicts_with = "dry_run")]
    pub rollback: bool,
}

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Number of products to create
    #[arg(long, env = "STOREFRONT_SEED_PRODUCTS", default_value_t = 15)]
    pub products: usize,

    /// Number of customers to create
    #[arg(long, env = "STOREFRONT_SEED_CUSTOMERS", default_value_t = 10)]
    pub customers: usize,

    /// Number of orders to create
    #[arg(long, env = "STOREFRONT_SEED_ORDERS", default_value_t = 10)]
    pub orders: usize,

    /// Number of carts to create
    #[arg(long, env = "STOREFRONT_SEED_CARTS", default_value_t = 5)]
    pub carts: usize,

    /// Number of collections to create
    #[arg(long, env = "STOREFRONT_SEED_COLLECTIONS", default_value_t = 5)]
    pub collections: usize,

    /// Number of promotions to create
    #[arg(long, env = "STOREFRONT_SEED_PROMOTIONS", default_value_t = 5)]
    pub promotions: usize,

    /// Lowest product unit price
    #[arg(long, env = "STOREFRONT_SEED_MIN_PRICE", default_value = "10.00")]
    pub min_price: Decimal,

    /// Highest product unit price
    #[arg(long, env = "STOREFRONT_SEED_MAX_PRICE", default_value = "500.00")]
    pub max_price: Decimal,

    /// Lowest product inventory
    #[arg(long, env = "STOREFRONT_SEED_MIN_INVENTORY", default_value_t = 0)]
    pub min_inventory: i32,

    /// Highest product inventory
    #[arg(long, env = "STOREFRONT_SEED_MAX_INVENTORY", default_value_t = 100)]
    pub max_inventory: i32,

    /// Create customers without login accounts
    #[arg(long)]
    pub no_accounts: bool,

    /// Skip customer addresses
    #[arg(long)]
    pub no_addresses: bool,

    /// Leave collections without a featured product
    #[arg(long)]
    pub no_featured: bool,

    /// Keep existing rows instead of clearing them first
    #[arg(long)]
    pub no_clear: bool,

    /// Seed the random generator for a reproducible dataset
    #[arg(long, env = "STOREFRONT_SEED_RNG")]
    pub rng_seed: Option<u64>,
}

impl SeedArgs {
    /// Seed options for these arguments; the discount range keeps its default.
    pub fn to_config(&self) -> SeedConfig {
        SeedConfig {
            product_count: self.products,
            customer_count: self.customers,
            order_count: self.orders,
            cart_count: self.carts,
            collection_count: self.collections,
            promotion_count: self.promotions,
            with_login_accounts: !self.no_accounts,
            with_addresses: !self.no_addresses,
            feature_products: !self.no_featured,
            clear_first: !self.no_clear,
            price_range: (self.min_price, self.max_price),
            inventory_range: self.min_inventory ..= self.max_inventory,
            rng_seed: self.rng_seed,
            ..Default::default()
        }
    }
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
