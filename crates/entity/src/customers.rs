//! Customers Entity
//!
//! Shoppers, optionally linked to a login account.
//!
//! CUSTOMIZATION REGION START: customer_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use chrono::{Datelike, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::MembershipTier;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:         i32,
    pub first_name: String,
    pub last_name:  String,
    #[sea_orm(unique)]
    pub email:      String,
    pub phone:      String,
    pub birth_date: Option<Date>,
    pub membership: MembershipTier,
    #[sea_orm(unique)]
    pub user_id:    Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::addresses::Entity")]
    Addresses,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<super::addresses::Entity> for Entity {
    fn to() -> RelationDef { Relation::Addresses.def() }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef { Relation::Orders.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: customer_entity_methods

impl Model {
    pub fn full_name(&self) -> String { format!("{} {}", self.first_name, self.last_name) }

    /// Completed years between the birth date and `on`.
    pub fn age_on(&self, on: NaiveDate) -> Option<i32> { self.birth_date.map(|born| age_between(born, on)) }
}

/// Completed years from `born` to `on`; negative if `on` precedes `born`.
pub fn age_between(born: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - born.year();
    if (on.month(), on.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}

// CUSTOMIZATION REGION END
