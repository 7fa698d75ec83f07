//! # Database Migrator
//!
//! This module implements the Sea-ORM migrator trait for managing database schema changes.
//! The migrator coordinates all migration operations and maintains the migration history.

use sea_orm_migration::prelude::*;

use crate::migrators::{m20250101_000001_create_store_tables, m20250101_000002_add_collections_featured_product_fk};

/// The main migrator that coordinates all migration operations
///
/// # Example
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Migrations are executed in the order they appear in this list.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_store_tables::Migration),
            // Needs both collections and products
            Box::new(m20250101_000002_add_collections_featured_product_fk::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_order() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "m20250101_000001_create_store_tables",
                "m20250101_000002_add_collections_featured_product_fk",
            ]
        );
    }
}
