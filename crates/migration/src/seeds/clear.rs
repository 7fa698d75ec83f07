//! # Clear Phase
//!
//! Deletes every seeded row, dependents before the rows they point at.

use ::error::Result;
use entity::{
    Addresses,
    CartItems,
    Carts,
    Collections,
    Customers,
    OrderItems,
    Orders,
    ProductPromotions,
    Products,
    Promotions,
    Users,
    collections,
    customers,
    users,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityName, EntityTrait, QueryFilter, QuerySelect, sea_query::Expr};

use super::report::ClearReport;

async fn delete_all<E, C>(conn: &C, entity: E) -> Result<u64>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let rows = E::delete_many().exec(conn).await?.rows_affected;
    logging::log_db_delete!(entity.table_name(), rows);
    Ok(rows)
}

/// Deletes all storefront rows. Safe to call on an empty store.
///
/// Only login accounts that belonged to a customer are removed; staff accounts
/// are kept.
///
/// # Errors
///
/// Returns an error if any delete fails.
pub async fn clear<C: ConnectionTrait>(conn: &C) -> Result<ClearReport> {
    let mut report = ClearReport::default();

    report.order_items = delete_all(conn, OrderItems).await?;
    report.orders = delete_all(conn, Orders).await?;
    report.cart_items = delete_all(conn, CartItems).await?;
    report.carts = delete_all(conn, Carts).await?;
    report.addresses = delete_all(conn, Addresses).await?;
    report.product_promotions = delete_all(conn, ProductPromotions).await?;

    // Collections point back at products through the featured product
    Collections::update_many()
        .col_expr(collections::Column::FeaturedProductId, Expr::value(Option::<i32>::None))
        .exec(conn)
        .await?;

    report.products = delete_all(conn, Products).await?;
    report.collections = delete_all(conn, Collections).await?;
    report.promotions = delete_all(conn, Promotions).await?;

    let user_ids: Vec<i32> = Customers::find()
        .select_only()
        .column(customers::Column::UserId)
        .filter(customers::Column::UserId.is_not_null())
        .into_tuple::<Option<i32>>()
        .all(conn)
        .await?
        .into_iter()
        .flatten()
        .collect();

    report.customers = delete_all(conn, Customers).await?;
    if !user_ids.is_empty() {
        report.users = Users::delete_many()
            .filter(users::Column::Id.is_in(user_ids))
            .exec(conn)
            .await?
            .rows_affected;
        logging::log_db_delete!("users", report.users);
    }

    tracing::info!(target: "seed", deleted = report.total(), "Store cleared");
    Ok(report)
}
