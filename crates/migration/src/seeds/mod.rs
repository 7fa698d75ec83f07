//! # Seed Data Management
//!
//! Fills a storefront with sample data for development and testing.
//!
//! Rows are created leaves first: collections and promotions, then products,
//! customers, carts and orders, and finally addresses. Phases whose
//! dependencies are empty are skipped and reported as zero.

use ::error::{AppError, Result, ResultExt};
use auth::secrecy::{ExposeSecret, SecretString};
use chrono::{DateTime, Utc};
use entity::{Customers, Products, Users};
use logging::measure_duration;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, QuerySelect, TransactionTrait};

mod catalog;
mod clear;
mod config;
mod customers;
mod randomizer;
mod report;
mod sales;

pub use catalog::DESCRIPTION_MAX_CHARS;
pub use clear::clear;
pub use config::SeedConfig;
pub use customers::{MAX_AGE, MIN_AGE};
pub use randomizer::{
    FakeRandomizer,
    LoginIdentity,
    PHONE_DIGITS,
    Randomizer,
    UNIQUE_ATTEMPTS,
    UniqueCache,
    UniqueKind,
    slugify,
};
pub use report::{ClearReport, SeedReport};
pub use sales::{MAX_LINE_ITEMS, MAX_QUANTITY, ORDER_WINDOW_DAYS};

/// Hashes the shared placeholder password once for every seeded account.
fn placeholder_hash(config: &SeedConfig) -> Result<String> {
    let password = SecretString::from(config.placeholder_password.clone());
    let hash = auth::hash_password(&password, Some(config.password.clone()))
        .map_err(|e| AppError::internal(format!("Failed to hash placeholder password: {}", e)))?;
    Ok(hash.expose_secret().to_string())
}

/// Reserves titles, slugs, usernames and emails already in the store.
async fn reserve_existing<C: ConnectionTrait>(conn: &C, unique: &mut UniqueCache) -> Result<()> {
    let catalog: Vec<(String, String)> = Products::find()
        .select_only()
        .column(entity::products::Column::Title)
        .column(entity::products::Column::Slug)
        .into_tuple()
        .all(conn)
        .await?;
    let logins: Vec<(String, String)> = Users::find()
        .select_only()
        .column(entity::users::Column::Username)
        .column(entity::users::Column::Email)
        .into_tuple()
        .all(conn)
        .await?;
    let customer_emails: Vec<String> = Customers::find()
        .select_only()
        .column(entity::customers::Column::Email)
        .into_tuple()
        .all(conn)
        .await?;

    let (titles, slugs): (Vec<_>, Vec<_>) = catalog.into_iter().unzip();
    let (usernames, emails): (Vec<_>, Vec<_>) = logins.into_iter().unzip();
    unique.reserve(UniqueKind::Title, titles);
    unique.reserve(UniqueKind::Slug, slugs);
    unique.reserve(UniqueKind::Username, usernames);
    unique.reserve(UniqueKind::Email, emails.into_iter().chain(customer_emails));

    tracing::debug!(
        target: "seed",
        slugs = unique.len(UniqueKind::Slug),
        usernames = unique.len(UniqueKind::Username),
        emails = unique.len(UniqueKind::Email),
        "Reserved existing values"
    );
    Ok(())
}

/// Generates a full sample dataset.
///
/// Existing rows are left alone and their unique values are avoided; call
/// [`clear`] first for a fresh store. Run it inside a transaction to make the
/// whole run atomic.
///
/// # Errors
///
/// Returns an error on invalid configuration or on any persistence failure
/// other than a login collision, which only skips that customer.
pub async fn generate<C, R>(conn: &C, config: &SeedConfig, rand: &mut R, now: DateTime<Utc>) -> Result<SeedReport>
where
    C: ConnectionTrait + TransactionTrait,
    R: Randomizer,
{
    config.validate()?;
    reserve_existing(conn, rand.unique()).await?;
    let mut report = SeedReport::default();

    let collections = measure_duration!("seed", "collections", {
        catalog::seed_collections(conn, config.collection_count, rand).await?
    });
    let promotions = measure_duration!("seed", "promotions", {
        catalog::seed_promotions(conn, config, rand).await?
    });
    report.collections = collections.len();
    report.promotions = promotions.len();

    let batch = measure_duration!("seed", "products", {
        catalog::seed_products(conn, config, &collections, &promotions, rand, now).await?
    });
    let products = batch.products;
    report.products = products.len();
    report.promotion_links = batch.promotion_links;

    if config.feature_products {
        report.featured_collections = catalog::feature_products(conn, collections, &products, rand).await?;
    }

    let password_hash = if config.with_login_accounts && config.customer_count > 0 {
        Some(placeholder_hash(config)?)
    }
    else {
        None
    };
    let customers = measure_duration!("seed", "customers", {
        customers::seed_customers(conn, config.customer_count, password_hash.as_deref(), rand, now).await?
    });
    report.customers = customers.customers.len();
    report.skipped_customers = customers.skipped;
    report.login_accounts = customers.login_accounts;

    let carts = measure_duration!("seed", "carts", {
        sales::seed_carts(conn, config.cart_count, &products, rand, now).await?
    });
    report.carts = carts.headers;
    report.cart_items = carts.items;

    let orders = measure_duration!("seed", "orders", {
        sales::seed_orders(conn, config.order_count, &customers.customers, &products, rand, now).await?
    });
    report.orders = orders.headers;
    report.order_items = orders.items;

    if config.with_addresses {
        report.addresses = customers::seed_addresses(conn, &customers.customers, rand).await?;
    }

    tracing::info!(target: "seed", summary = %report, "Seeding complete");
    Ok(report)
}

/// Clears the store and generates fresh data in one transaction.
///
/// Nothing is committed unless every phase succeeds.
///
/// # Errors
///
/// Returns the first fatal error; the transaction is rolled back.
pub async fn seed_store(db: &DatabaseConnection, config: &SeedConfig) -> Result<SeedReport> {
    let mut rand = FakeRandomizer::from_seed(config.rng_seed);
    seed_store_with(db, config, &mut rand).await
}

/// [`seed_store`] with a caller-supplied randomizer.
///
/// # Errors
///
/// Returns the first fatal error; the transaction is rolled back.
pub async fn seed_store_with<R: Randomizer>(
    db: &DatabaseConnection,
    config: &SeedConfig,
    rand: &mut R,
) -> Result<SeedReport> {
    config.validate()?;
    let txn = db.begin().await?;
    match populate(&txn, config, rand).await {
        Ok(report) => {
            txn.commit().await?;
            Ok(report)
        },
        Err(err) => {
            if let Err(rollback) = txn.rollback().await {
                tracing::error!(target: "seed", error = %rollback, "Rollback failed");
            }
            Err(err)
        },
    }
}

async fn populate<C, R>(conn: &C, config: &SeedConfig, rand: &mut R) -> Result<SeedReport>
where
    C: ConnectionTrait + TransactionTrait,
    R: Randomizer,
{
    if config.clear_first {
        clear(conn).await.context("Clearing store")?;
    }
    generate(conn, config, rand, Utc::now())
        .await
        .context("Generating seed data")
}

/// Deletes all seeded rows in one transaction.
///
/// # Errors
///
/// Returns an error if any delete fails; nothing is removed in that case.
pub async fn clear_store(db: &DatabaseConnection) -> Result<ClearReport> {
    let txn = db.begin().await?;
    let report = clear(&txn).await?;
    txn.commit().await?;
    Ok(report)
}
