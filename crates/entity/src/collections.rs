//! Collections Entity
//!
//! A named grouping of products. The featured product is assigned after the
//! products exist, so the column is nullable.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "collections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:                  i32,
    pub title:               String,
    pub featured_product_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::FeaturedProductId",
        to = "super::products::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    FeaturedProduct,
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef { Relation::Products.def() }
}

impl ActiveModelBehavior for ActiveModel {}
