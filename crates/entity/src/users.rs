//! Users Entity
//!
//! Login accounts. A customer may be linked to at most one account; staff
//! accounts exist without a customer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:            i32,
    #[sea_orm(unique)]
    pub username:      String,
    #[sea_orm(unique)]
    pub email:         String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name:    String,
    pub last_name:     String,
    pub is_staff:      bool,
    pub created_at:    DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::customers::Entity")]
    Customer,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl ActiveModelBehavior for ActiveModel {}
