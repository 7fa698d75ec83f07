//! # Catalog Queries
//!
//! Read-side views and bulk actions over the catalog tables.

use std::fmt;

use ::error::Result;
use chrono::Utc;
use entity::{
    Addresses,
    CartItems,
    Carts,
    Collections,
    Customers,
    OrderItems,
    Orders,
    Products,
    Promotions,
    Users,
    collections,
    products,
};
use sea_orm::{
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    FromQueryResult,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
    RelationTrait,
    sea_query::{Expr, JoinType},
};
use serde::Serialize;

/// A collection with the number of products in it.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct CollectionSummary {
    pub id:             i32,
    pub title:          String,
    pub products_count: i64,
}

/// Every collection with its product count, ordered by title.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn collection_product_counts<C: ConnectionTrait>(conn: &C) -> Result<Vec<CollectionSummary>> {
    let summaries = Collections::find()
        .select_only()
        .column(collections::Column::Id)
        .column(collections::Column::Title)
        .column_as(
            Expr::col((Products, products::Column::Id)).count(),
            "products_count",
        )
        .join(JoinType::LeftJoin, collections::Relation::Products.def())
        .group_by(collections::Column::Id)
        .group_by(collections::Column::Title)
        .order_by_asc(collections::Column::Title)
        .order_by_asc(collections::Column::Id)
        .into_model::<CollectionSummary>()
        .all(conn)
        .await?;
    Ok(summaries)
}

/// Sets inventory to zero for the given products.
///
/// Returns the number of products updated.
///
/// # Errors
///
/// Returns an error if the update fails.
pub async fn clear_inventory<C: ConnectionTrait>(conn: &C, product_ids: &[i32]) -> Result<u64> {
    if product_ids.is_empty() {
        return Ok(0);
    }
    let result = Products::update_many()
        .col_expr(products::Column::Inventory, Expr::value(0))
        .col_expr(products::Column::LastUpdate, Expr::value(Utc::now()))
        .filter(products::Column::Id.is_in(product_ids.iter().copied()))
        .exec(conn)
        .await?;
    tracing::info!(target: "catalog", updated = result.rows_affected, "Inventory cleared");
    Ok(result.rows_affected)
}

/// Row counts for every storefront table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub collections: u64,
    pub promotions:  u64,
    pub products:    u64,
    pub users:       u64,
    pub customers:   u64,
    pub addresses:   u64,
    pub carts:       u64,
    pub cart_items:  u64,
    pub orders:      u64,
    pub order_items: u64,
}

impl fmt::Display for StoreCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "collections  {}", self.collections)?;
        writeln!(f, "promotions   {}", self.promotions)?;
        writeln!(f, "products     {}", self.products)?;
        writeln!(f, "users        {}", self.users)?;
        writeln!(f, "customers    {}", self.customers)?;
        writeln!(f, "addresses    {}", self.addresses)?;
        writeln!(f, "carts        {}", self.carts)?;
        writeln!(f, "cart items   {}", self.cart_items)?;
        writeln!(f, "orders       {}", self.orders)?;
        write!(f, "order items  {}", self.order_items)
    }
}

/// Counts the rows in every storefront table.
///
/// # Errors
///
/// Returns an error if any count query fails.
pub async fn store_counts<C: ConnectionTrait>(conn: &C) -> Result<StoreCounts> {
    Ok(StoreCounts {
        collections: Collections::find().count(conn).await?,
        promotions:  Promotions::find().count(conn).await?,
        products:    Products::find().count(conn).await?,
        users:       Users::find().count(conn).await?,
        customers:   Customers::find().count(conn).await?,
        addresses:   Addresses::find().count(conn).await?,
        carts:       Carts::find().count(conn).await?,
        cart_items:  CartItems::find().count(conn).await?,
        orders:      Orders::find().count(conn).await?,
        order_items: OrderItems::find().count(conn).await?,
    })
}
