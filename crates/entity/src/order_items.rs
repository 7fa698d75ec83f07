//! Order Items Entity
//!
//! `unit_price` is the product price captured when the row was written. It is
//! never recomputed from the product afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:         i32,
    pub order_id:   i32,
    pub product_id: i32,
    pub quantity:   i32,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub unit_price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Product,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef { Relation::Order.def() }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Quantity times the captured unit price.
    pub fn line_total(&self) -> Decimal { self.unit_price * Decimal::from(self.quantity) }
}
