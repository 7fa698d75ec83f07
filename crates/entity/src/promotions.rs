//! Promotions Entity
//!
//! A discount campaign applicable to any number of products.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "promotions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:          i32,
    pub description: String,
    /// Fraction of the unit price taken off, between 0 and 1
    pub discount:    f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_promotions::Entity")]
    ProductPromotions,
}

impl Related<super::product_promotions::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProductPromotions.def() }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef { super::product_promotions::Relation::Product.def() }

    fn via() -> Option<RelationDef> { Some(super::product_promotions::Relation::Promotion.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}
