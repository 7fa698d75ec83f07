//! # CLI Seed Command
//!
//! Fills the store with generated sample data.

use error::{Result, ResultExt};
use migration::seeds::{self, SeedReport};
use tracing::info;

use crate::{
    commands::{SeedArgs, migrate::apply_pending},
    config::DatabaseConfig,
};

/// Applies pending migrations, then seeds the store in one transaction.
///
/// Prints the summary to stdout and returns the report.
pub async fn seed(config: &DatabaseConfig, args: &SeedArgs) -> Result<SeedReport> {
    let seed_config = args.to_config();
    seed_config.validate()?;

    let db = config.connect().await?;
    apply_pending(&db).await?;

    info!(
        target: "seed",
        products = seed_config.product_count,
        customers = seed_config.customer_count,
        orders = seed_config.order_count,
        clear_first = seed_config.clear_first,
        "Seeding store..."
    );

    let report = seeds::seed_store(&db, &seed_config).await.log_error()?;
    println!("{}", report);
    Ok(report)
}
