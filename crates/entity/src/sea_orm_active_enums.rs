//! Active enums shared by the storefront entities.
//!
//! Values are stored as single-character codes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer membership tier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum MembershipTier {
    #[sea_orm(string_value = "B")]
    Bronze,
    #[sea_orm(string_value = "S")]
    Silver,
    #[sea_orm(string_value = "G")]
    Gold,
}

impl MembershipTier {
    /// Every tier, in ascending order.
    pub const ALL: [Self; 3] = [Self::Bronze, Self::Silver, Self::Gold];

    /// Stored single-character code.
    pub fn code(&self) -> &'static str {
        match self {
            MembershipTier::Bronze => "B",
            MembershipTier::Silver => "S",
            MembershipTier::Gold => "G",
        }
    }
}

impl Default for MembershipTier {
    fn default() -> Self { Self::Bronze }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipTier::Bronze => write!(f, "Bronze"),
            MembershipTier::Silver => write!(f, "Silver"),
            MembershipTier::Gold => write!(f, "Gold"),
        }
    }
}

/// Order payment status
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "P")]
    Pending,
    #[sea_orm(string_value = "C")]
    Complete,
    #[sea_orm(string_value = "F")]
    Failed,
}

impl PaymentStatus {
    /// Every payment status.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Complete, Self::Failed];

    /// Stored single-character code.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "P",
            PaymentStatus::Complete => "C",
            PaymentStatus::Failed => "F",
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self { Self::Pending }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Complete => write!(f, "Complete"),
            PaymentStatus::Failed => write!(f, "Failed"),
        }
    }
}
