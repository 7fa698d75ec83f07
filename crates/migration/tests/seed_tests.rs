//! # Seed Generator Integration Tests
//!
//! Runs the migrations and the seed generator against in-memory SQLite.

mod common;

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use common::{RepeatingLogin, RepeatingSlug, TestDb, test_config};
use entity::{
    CartItems,
    Collections,
    Customers,
    OrderItems,
    Products,
    Users,
    customers,
    products::{self, InventoryStatus},
    users,
};
use migration::{
    MigratorTrait,
    catalog::{clear_inventory, collection_product_counts, store_counts},
    seeds::{self, FakeRandomizer, MAX_AGE, MIN_AGE, SeedConfig},
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

fn scenario_config() -> SeedConfig {
    SeedConfig {
        collection_count: 2,
        promotion_count: 2,
        product_count: 3,
        customer_count: 0,
        cart_count: 0,
        order_count: 0,
        ..test_config()
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[tokio::test]
    async fn test_default_run_creates_requested_rows() {
        let db = TestDb::new().await;
        let report = seeds::seed_store(&db.conn, &test_config()).await.unwrap();

        assert_eq!(report.collections, 5);
        assert_eq!(report.promotions, 5);
        assert_eq!(report.products, 15);
        assert_eq!(report.customers, 10);
        assert_eq!(report.skipped_customers, 0);
        assert_eq!(report.login_accounts, 10);
        assert_eq!(report.carts, 5);
        assert_eq!(report.orders, 10);
        assert_eq!(report.featured_collections, 5);
        assert!(report.addresses >= 10 && report.addresses <= 20);

        let counts = store_counts(&db.conn).await.unwrap();
        assert_eq!(counts.products, 15);
        assert_eq!(counts.customers, 10);
        assert_eq!(counts.users, 10);
        assert_eq!(counts.addresses, report.addresses as u64);
        assert_eq!(counts.cart_items, report.cart_items as u64);
        assert_eq!(counts.order_items, report.order_items as u64);
    }

    #[tokio::test]
    async fn test_product_slugs_are_unique() {
        let db = TestDb::new().await;
        let config = SeedConfig {
            product_count: 60,
            ..test_config()
        };
        seeds::seed_store(&db.conn, &config).await.unwrap();

        let products = Products::find().all(&db.conn).await.unwrap();
        let slugs: HashSet<_> = products.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(products.len(), 60);
        assert_eq!(slugs.len(), products.len());
        for product in &products {
            assert!(product.description.chars().count() <= seeds::DESCRIPTION_MAX_CHARS);
            assert!(product.unit_price >= Decimal::new(10, 0));
            assert!(product.unit_price <= Decimal::new(500, 0));
            assert!((0 ..= 100).contains(&product.inventory));
        }
    }

    #[tokio::test]
    async fn test_customer_ages_in_range() {
        let db = TestDb::new().await;
        let config = SeedConfig {
            customer_count: 40,
            ..test_config()
        };
        seeds::seed_store(&db.conn, &config).await.unwrap();

        let today = Utc::now().date_naive();
        let customers = Customers::find().all(&db.conn).await.unwrap();
        assert_eq!(customers.len(), 40);
        for customer in customers {
            let age = customer.age_on(today).expect("birth date");
            assert!((MIN_AGE as i32 ..= MAX_AGE as i32).contains(&age), "age {}", age);
            assert!(customer.phone.len() <= seeds::PHONE_DIGITS);
            assert!(customer.user_id.is_some());
        }
    }

    #[tokio::test]
    async fn test_line_item_quantities_positive() {
        let db = TestDb::new().await;
        let config = SeedConfig {
            cart_count: 20,
            order_count: 20,
            ..test_config()
        };
        seeds::seed_store(&db.conn, &config).await.unwrap();

        let cart_items = CartItems::find().all(&db.conn).await.unwrap();
        let order_items = OrderItems::find().all(&db.conn).await.unwrap();
        assert!(!cart_items.is_empty());
        assert!(!order_items.is_empty());
        assert!(cart_items.iter().all(|i| (1 ..= seeds::MAX_QUANTITY).contains(&i.quantity)));
        assert!(order_items.iter().all(|i| (1 ..= seeds::MAX_QUANTITY).contains(&i.quantity)));
    }

    #[tokio::test]
    async fn test_order_items_copy_product_price() {
        let db = TestDb::new().await;
        let config = SeedConfig {
            collection_count: 1,
            product_count: 1,
            customer_count: 1,
            order_count: 3,
            cart_count: 0,
            price_range: (Decimal::new(1950, 2), Decimal::new(1950, 2)),
            ..test_config()
        };
        seeds::seed_store(&db.conn, &config).await.unwrap();

        let product = Products::find().one(&db.conn).await.unwrap().unwrap();
        assert_eq!(product.unit_price, Decimal::new(1950, 2));
        let items = OrderItems::find().all(&db.conn).await.unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.unit_price == product.unit_price));

        let mut active: products::ActiveModel = product.into();
        active.unit_price = Set(Decimal::new(2975, 2));
        active.update(&db.conn).await.unwrap();

        let items = OrderItems::find().all(&db.conn).await.unwrap();
        assert!(items.iter().all(|i| i.unit_price == Decimal::new(1950, 2)));
    }

    #[tokio::test]
    async fn test_two_two_three_scenario() {
        let db = TestDb::new().await;
        let report = seeds::seed_store(&db.conn, &scenario_config()).await.unwrap();

        assert_eq!(report.collections, 2);
        assert_eq!(report.promotions, 2);
        assert_eq!(report.products, 3);
        assert_eq!(report.customers, 0);
        assert_eq!(report.carts, 0);
        assert_eq!(report.orders, 0);
        assert_eq!(
            report.to_string(),
            "Created: 2 collections, 2 promotions, 3 products, 0 customers, 0 orders, 0 carts."
        );

        let collection_ids: HashSet<i32> = Collections::find()
            .all(&db.conn)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(collection_ids.len(), 2);
        let products = Products::find().all(&db.conn).await.unwrap();
        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| collection_ids.contains(&p.collection_id)));
    }

    #[tokio::test]
    async fn test_featured_products_exist() {
        let db = TestDb::new().await;
        seeds::seed_store(&db.conn, &scenario_config()).await.unwrap();

        for collection in Collections::find().all(&db.conn).await.unwrap() {
            let featured = collection.featured_product_id.expect("featured product");
            assert!(Products::find_by_id(featured).one(&db.conn).await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn test_no_products_means_no_orders_or_carts() {
        let db = TestDb::new().await;
        seeds::seed_store(&db.conn, &test_config()).await.unwrap();

        let config = SeedConfig {
            product_count: 0,
            ..test_config()
        };
        let report = seeds::seed_store(&db.conn, &config).await.unwrap();
        assert_eq!(report.products, 0);
        assert_eq!(report.orders, 0);
        assert_eq!(report.carts, 0);
        assert_eq!(report.cart_items, 0);
        assert_eq!(report.featured_collections, 0);
        assert_eq!(report.customers, 10);

        let counts = store_counts(&db.conn).await.unwrap();
        assert_eq!(counts.products, 0);
        assert_eq!(counts.orders, 0);
        assert_eq!(counts.cart_items, 0);
    }

    #[tokio::test]
    async fn test_no_collections_skips_products() {
        let db = TestDb::new().await;
        let config = SeedConfig {
            collection_count: 0,
            ..test_config()
        };
        let report = seeds::seed_store(&db.conn, &config).await.unwrap();
        assert_eq!(report.products, 0);
        assert_eq!(report.orders, 0);
        assert_eq!(report.customers, 10);
    }

    #[tokio::test]
    async fn test_login_collision_skips_customers() {
        let db = TestDb::new().await;
        let config = SeedConfig {
            customer_count: 10,
            ..test_config()
        };
        let mut rand = RepeatingLogin::new();
        let report = seeds::generate(&db.conn, &config, &mut rand, Utc::now())
            .await
            .unwrap();

        assert!(report.customers < 10);
        assert_eq!(report.customers, 1);
        assert_eq!(report.skipped_customers, 9);
        assert_eq!(Customers::find().all(&db.conn).await.unwrap().len(), 1);
        assert_eq!(Users::find().all(&db.conn).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_customers_without_accounts() {
        let db = TestDb::new().await;
        let config = SeedConfig {
            with_login_accounts: false,
            with_addresses: false,
            ..test_config()
        };
        let report = seeds::seed_store(&db.conn, &config).await.unwrap();
        assert_eq!(report.customers, 10);
        assert_eq!(report.login_accounts, 0);
        assert_eq!(report.addresses, 0);
        let customers = Customers::find()
            .filter(customers::Column::UserId.is_not_null())
            .all(&db.conn)
            .await
            .unwrap();
        assert!(customers.is_empty());
    }

    #[tokio::test]
    async fn test_uncommitted_run_leaves_store_empty() {
        let db = TestDb::new().await;
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        {
            let txn = db.conn.begin().await.unwrap();
            let mut rand = FakeRandomizer::seeded(1);
            seeds::generate(&txn, &test_config(), &mut rand, now)
                .await
                .unwrap();
            txn.rollback().await.unwrap();
        }
        assert_eq!(store_counts(&db.conn).await.unwrap(), Default::default());
    }

    #[tokio::test]
    async fn test_failed_run_keeps_previous_store() {
        let db = TestDb::new().await;
        seeds::seed_store(&db.conn, &test_config()).await.unwrap();
        let before = store_counts(&db.conn).await.unwrap();
        let slugs_before: HashSet<String> = Products::find()
            .all(&db.conn)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();

        // Clearing succeeds, then the second product collides on its slug
        let mut rand = RepeatingSlug::new();
        let err = seeds::seed_store_with(&db.conn, &test_config(), &mut rand)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "CONFLICT");

        assert_eq!(store_counts(&db.conn).await.unwrap(), before);
        let slugs_after: HashSet<String> = Products::find()
            .all(&db.conn)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs_after, slugs_before);
    }

    #[tokio::test]
    async fn test_reruns_without_clear_accumulate() {
        let db = TestDb::new().await;
        users::ActiveModel {
            username: Set("staff".to_string()),
            email: Set("staff@example.com".to_string()),
            password_hash: Set("x".to_string()),
            first_name: Set("Store".to_string()),
            last_name: Set("Staff".to_string()),
            is_staff: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db.conn)
        .await
        .unwrap();

        // The repeated seed would reproduce the first run's slugs and logins
        for rng_seed in [Some(42), Some(42), Some(1000), Some(1001)] {
            let config = SeedConfig {
                clear_first: false,
                rng_seed,
                ..test_config()
            };
            let report = seeds::seed_store(&db.conn, &config).await.unwrap();
            assert_eq!(report.products, 15);
            assert_eq!(report.customers, 10);
            assert_eq!(report.skipped_customers, 0);
        }

        let products = Products::find().all(&db.conn).await.unwrap();
        assert_eq!(products.len(), 60);
        let slugs: HashSet<_> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), 60);
        assert_eq!(Customers::find().all(&db.conn).await.unwrap().len(), 40);
        assert_eq!(Users::find().all(&db.conn).await.unwrap().len(), 41);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let db = TestDb::new().await;
        let config = SeedConfig {
            inventory_range: 10 ..= 0,
            ..test_config()
        };
        let err = seeds::seed_store(&db.conn, &config).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_same_seed_same_catalog() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;
        seeds::seed_store(&first.conn, &scenario_config()).await.unwrap();
        seeds::seed_store(&second.conn, &scenario_config()).await.unwrap();

        let slugs = |products: Vec<products::Model>| products.into_iter().map(|p| p.slug).collect::<Vec<_>>();
        assert_eq!(
            slugs(Products::find().all(&first.conn).await.unwrap()),
            slugs(Products::find().all(&second.conn).await.unwrap())
        );
    }
}

#[cfg(test)]
mod clear_tests {
    use super::*;

    #[tokio::test]
    async fn test_clear_twice_is_idempotent() {
        let db = TestDb::new().await;
        seeds::seed_store(&db.conn, &test_config()).await.unwrap();

        let first = seeds::clear_store(&db.conn).await.unwrap();
        assert_eq!(first.products, 15);
        assert_eq!(first.customers, 10);
        assert_eq!(first.users, 10);
        assert_eq!(store_counts(&db.conn).await.unwrap(), Default::default());

        let second = seeds::clear_store(&db.conn).await.unwrap();
        assert_eq!(second.total(), 0);
        assert_eq!(store_counts(&db.conn).await.unwrap(), Default::default());
    }

    #[tokio::test]
    async fn test_clear_on_empty_store() {
        let db = TestDb::new().await;
        let report = seeds::clear(&db.conn).await.unwrap();
        assert_eq!(report.total(), 0);
    }

    #[tokio::test]
    async fn test_staff_accounts_survive_clear() {
        let db = TestDb::new().await;
        users::ActiveModel {
            username: Set("admin".to_string()),
            email: Set("admin@example.com".to_string()),
            password_hash: Set("x".to_string()),
            first_name: Set("Store".to_string()),
            last_name: Set("Admin".to_string()),
            is_staff: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db.conn)
        .await
        .unwrap();

        seeds::seed_store(&db.conn, &test_config()).await.unwrap();
        seeds::clear_store(&db.conn).await.unwrap();

        let remaining = Users::find().all(&db.conn).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].username, "admin");
    }

    #[tokio::test]
    async fn test_reseed_replaces_previous_data() {
        let db = TestDb::new().await;
        seeds::seed_store(&db.conn, &test_config()).await.unwrap();
        seeds::seed_store(&db.conn, &scenario_config()).await.unwrap();

        let counts = store_counts(&db.conn).await.unwrap();
        assert_eq!(counts.collections, 2);
        assert_eq!(counts.products, 3);
        assert_eq!(counts.customers, 0);
        assert_eq!(counts.users, 0);
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[tokio::test]
    async fn test_collection_product_counts() {
        let db = TestDb::new().await;
        seeds::seed_store(&db.conn, &scenario_config()).await.unwrap();

        let summaries = collection_product_counts(&db.conn).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries.iter().map(|s| s.products_count).sum::<i64>(), 3);
        assert!(summaries.windows(2).all(|w| w[0].title <= w[1].title));
    }

    #[tokio::test]
    async fn test_clear_inventory() {
        let db = TestDb::new().await;
        seeds::seed_store(&db.conn, &scenario_config()).await.unwrap();

        let ids: Vec<i32> = Products::find()
            .all(&db.conn)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(clear_inventory(&db.conn, &ids[.. 2]).await.unwrap(), 2);
        assert_eq!(clear_inventory(&db.conn, &[]).await.unwrap(), 0);

        let cleared = Products::find()
            .filter(products::Column::Id.is_in(ids[.. 2].to_vec()))
            .all(&db.conn)
            .await
            .unwrap();
        assert!(cleared.iter().all(|p| p.inventory == 0));
        assert!(cleared.iter().all(|p| p.inventory_status() == InventoryStatus::Low));
    }
}

#[cfg(test)]
mod migration_tests {
    use super::*;

    #[tokio::test]
    async fn test_no_pending_migrations_after_up() {
        let db = TestDb::new().await;
        let pending = migration::Migrator::get_pending_migrations(&db.conn)
            .await
            .unwrap();
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn test_down_then_up() {
        let db = TestDb::new().await;
        migration::Migrator::down(&db.conn, None).await.unwrap();
        assert!(Products::find().all(&db.conn).await.is_err());
        migration::Migrator::up(&db.conn, None).await.unwrap();
        assert!(Products::find().all(&db.conn).await.unwrap().is_empty());
    }
}
