//! Product Promotions Entity
//!
//! Junction rows for the many-to-many link between products and promotions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "product_promotions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id:   i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub promotion_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::promotions::Entity",
        from = "Column::PromotionId",
        to = "super::promotions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Promotion,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl Related<super::promotions::Entity> for Entity {
    fn to() -> RelationDef { Relation::Promotion.def() }
}

impl ActiveModelBehavior for ActiveModel {}
