//! Enum and projection tests for the entity crate
//! These tests build models in memory and never touch a database

use chrono::{NaiveDate, TimeZone, Utc};
use entity::{
    customers,
    order_items,
    products::{self, InventoryStatus},
    sea_orm_active_enums::{MembershipTier, PaymentStatus},
};
use sea_orm::prelude::Decimal;

fn product(price: &str, inventory: i32) -> products::Model {
    products::Model {
        id: 1,
        title: "Walnut Desk".to_string(),
        slug: "walnut-desk".to_string(),
        description: "A desk".to_string(),
        unit_price: price.parse().unwrap(),
        inventory,
        last_update: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        collection_id: 1,
    }
}

fn customer(birth_date: Option<NaiveDate>) -> customers::Model {
    customers::Model {
        id: 1,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        birth_date,
        membership: MembershipTier::Gold,
        user_id: None,
    }
}

/// Test MembershipTier display names and codes
#[test]
fn test_membership_tier_values() {
    assert_eq!(format!("{}", MembershipTier::Bronze), "Bronze");
    assert_eq!(format!("{}", MembershipTier::Silver), "Silver");
    assert_eq!(format!("{}", MembershipTier::Gold), "Gold");
    let codes: Vec<_> = MembershipTier::ALL.iter().map(|t| t.code()).collect();
    assert_eq!(codes, vec!["B", "S", "G"]);
}

/// Test PaymentStatus display names and codes
#[test]
fn test_payment_status_values() {
    assert_eq!(format!("{}", PaymentStatus::Pending), "Pending");
    assert_eq!(format!("{}", PaymentStatus::Complete), "Complete");
    assert_eq!(format!("{}", PaymentStatus::Failed), "Failed");
    let codes: Vec<_> = PaymentStatus::ALL.iter().map(|s| s.code()).collect();
    assert_eq!(codes, vec!["P", "C", "F"]);
}

/// Test enum defaults
#[test]
fn test_enum_defaults() {
    assert_eq!(MembershipTier::default(), MembershipTier::Bronze);
    assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
}

/// Test enum serialization uses variant names
#[test]
fn test_enum_serialization() {
    assert_eq!(serde_json::to_string(&MembershipTier::Silver).unwrap(), "\"Silver\"");
    let status: PaymentStatus = serde_json::from_str("\"Failed\"").unwrap();
    assert_eq!(status, PaymentStatus::Failed);
}

#[test]
fn test_inventory_status_threshold() {
    assert_eq!(product("10.00", 0).inventory_status(), InventoryStatus::Low);
    assert_eq!(product("10.00", 99).inventory_status(), InventoryStatus::Low);
    assert_eq!(product("10.00", 100).inventory_status(), InventoryStatus::Ok);
    assert_eq!(InventoryStatus::Low.to_string(), "Low");
}

#[test]
fn test_price_with_tax() {
    assert_eq!(product("10.00", 5).price_with_tax(), "11.00".parse::<Decimal>().unwrap());
    assert_eq!(product("19.99", 5).price_with_tax(), "21.99".parse::<Decimal>().unwrap());
}

#[test]
fn test_customer_age() {
    let c = customer(NaiveDate::from_ymd_opt(2000, 6, 15));
    assert_eq!(c.age_on(NaiveDate::from_ymd_opt(2020, 6, 14).unwrap()), Some(19));
    assert_eq!(c.age_on(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()), Some(20));
    assert_eq!(customer(None).age_on(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()), None);
    assert_eq!(c.full_name(), "Ada Lovelace");
}

#[test]
fn test_order_item_line_total() {
    let item = order_items::Model {
        id: 1,
        order_id: 1,
        product_id: 1,
        quantity: 3,
        unit_price: "19.50".parse().unwrap(),
    };
    assert_eq!(item.line_total(), "58.50".parse::<Decimal>().unwrap());
}
