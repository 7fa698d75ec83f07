//! # CLI Clear Command
//!
//! Removes seeded data from the store.

use error::{Result, ResultExt};
use migration::seeds::{self, ClearReport};

use crate::config::DatabaseConfig;

/// Deletes all seeded rows and prints what was removed.
pub async fn clear(config: &DatabaseConfig) -> Result<ClearReport> {
    let db = config.connect().await?;
    let report = seeds::clear_store(&db).await.log_error()?;
    println!("{}", report);
    Ok(report)
}
