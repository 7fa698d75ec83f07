//! # Migration Modules
//!
//! This module contains all database migration files.
//! Each migration is a separate module that implements the `MigrationTrait`.

pub mod m20250101_000001_create_store_tables;
pub mod m20250101_000002_add_collections_featured_product_fk;
