//! # CLI Stats Command
//!
//! Prints table sizes and per-collection product counts.

use error::Result;
use migration::catalog::{self, StoreCounts};

use crate::config::DatabaseConfig;

pub async fn stats(config: &DatabaseConfig) -> Result<StoreCounts> {
    let db = config.connect().await?;
    let counts = catalog::store_counts(&db).await?;
    println!("{}", counts);

    let collections = catalog::collection_product_counts(&db).await?;
    if !collections.is_empty() {
        println!();
        for collection in &collections {
            println!("{:<24} {:>5}", collection.title, collection.products_count);
        }
    }
    Ok(counts)
}
