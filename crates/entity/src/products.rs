//! Products Entity
//!
//! Catalog items. `slug` is unique across the table and derived from the
//! title.
//!
//! CUSTOMIZATION REGION START: product_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:            i32,
    pub title:         String,
    #[sea_orm(unique)]
    pub slug:          String,
    #[sea_orm(column_type = "Text")]
    pub description:   String,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub unit_price:    Decimal,
    pub inventory:     i32,
    pub last_update:   DateTimeUtc,
    pub collection_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::collections::Entity",
        from = "Column::CollectionId",
        to = "super::collections::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Collection,
    #[sea_orm(has_many = "super::product_promotions::Entity")]
    ProductPromotions,
    #[sea_orm(has_many = "super::cart_items::Entity")]
    CartItems,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::collections::Entity> for Entity {
    fn to() -> RelationDef { Relation::Collection.def() }
}

impl Related<super::product_promotions::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProductPromotions.def() }
}

impl Related<super::promotions::Entity> for Entity {
    fn to() -> RelationDef { super::product_promotions::Relation::Promotion.def() }

    fn via() -> Option<RelationDef> { Some(super::product_promotions::Relation::Product.def().rev()) }
}

impl Related<super::cart_items::Entity> for Entity {
    fn to() -> RelationDef { Relation::CartItems.def() }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef { Relation::OrderItems.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: product_entity_methods

/// Inventory below this many units is reported as low.
pub const LOW_INVENTORY_THRESHOLD: i32 = 100;

/// Coarse stock level shown next to a product.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryStatus {
    Low,
    Ok,
}

impl std::fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryStatus::Low => write!(f, "Low"),
            InventoryStatus::Ok => write!(f, "Ok"),
        }
    }
}

impl Model {
    pub fn inventory_status(&self) -> InventoryStatus {
        if self.inventory < LOW_INVENTORY_THRESHOLD {
            InventoryStatus::Low
        }
        else {
            InventoryStatus::Ok
        }
    }

    /// Unit price with 10% tax, rounded to cents.
    pub fn price_with_tax(&self) -> Decimal { (self.unit_price * Decimal::new(11, 1)).round_dp(2) }
}

// CUSTOMIZATION REGION END
