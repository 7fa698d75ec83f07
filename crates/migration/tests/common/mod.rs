//! # Common Test Utilities
//!
//! Shared database setup and randomizers for the seed integration tests.

#![allow(dead_code)]

use std::sync::Once;

use auth::PasswordConfig;
use migration::{
    Migrator,
    MigratorTrait,
    seeds::{FakeRandomizer, LoginIdentity, Randomizer, SeedConfig, UniqueCache},
};
use rand::rngs::StdRng;
use sea_orm::DbConn;

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Migrated in-memory SQLite database for one test
pub struct TestDb {
    pub conn: DbConn,
}

impl TestDb {
    /// Create a fresh database and run every migration on it
    pub async fn new() -> Self {
        init_test_env();
        let conn = migration::connect_to_database("sqlite::memory:", 1)
            .await
            .expect("Failed to open in-memory database");
        Migrator::up(&conn, None)
            .await
            .expect("Failed to run migrations");
        Self {
            conn,
        }
    }
}

/// Seed options with cheap password hashing and a fixed RNG seed
pub fn test_config() -> SeedConfig {
    SeedConfig {
        password: PasswordConfig::fast(),
        rng_seed: Some(42),
        ..Default::default()
    }
}

/// Randomizer that hands out the same login identity every time
pub struct RepeatingLogin {
    inner: FakeRandomizer,
}

impl RepeatingLogin {
    pub fn new() -> Self {
        Self {
            inner: FakeRandomizer::seeded(99),
        }
    }
}

impl Randomizer for RepeatingLogin {
    fn rng(&mut self) -> &mut StdRng { self.inner.rng() }

    fn unique(&mut self) -> &mut UniqueCache { self.inner.unique() }

    fn login_identity(&mut self) -> LoginIdentity {
        LoginIdentity {
            username: "taken".to_string(),
            email:    "taken@example.com".to_string(),
        }
    }
}

/// Randomizer that gives every product the same slug
pub struct RepeatingSlug {
    inner: FakeRandomizer,
}

impl RepeatingSlug {
    pub fn new() -> Self {
        Self {
            inner: FakeRandomizer::seeded(5),
        }
    }
}

impl Randomizer for RepeatingSlug {
    fn rng(&mut self) -> &mut StdRng { self.inner.rng() }

    fn unique(&mut self) -> &mut UniqueCache { self.inner.unique() }

    fn unique_slug(&mut self, _title: &str) -> String { "same-slug".to_string() }
}
