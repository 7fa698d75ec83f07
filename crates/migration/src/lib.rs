//! # Storefront Schema and Seed Data
//!
//! Schema migrations for the storefront tables, the connection helper used by
//! the CLI, and the seed generator that fills a store with sample data.

pub use sea_orm_migration::prelude::*;

pub mod catalog;
mod migrator;
mod migrators;
pub mod seeds;

pub use migrator::Migrator;

/// Database connection helper for CLI usage
///
/// SQLite in-memory URLs are pinned to a single connection so every query sees
/// the same database.
pub async fn connect_to_database(
    database_url: &str,
    pool_size: u32,
) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    let mut options = sea_orm::ConnectOptions::new(database_url.to_owned());
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    else {
        options.max_connections(pool_size.max(1));
    }
    options.sqlx_logging(false);
    sea_orm::Database::connect(options).await
}
