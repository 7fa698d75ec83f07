//! Entity definitions for the storefront schema
//!
//! This crate contains Sea-ORM entity definitions for the catalog, customer
//! and sales tables, listed here leaves first.

pub mod sea_orm_active_enums;

pub mod users;
pub use users::Entity as Users;
pub mod promotions;
pub use promotions::Entity as Promotions;
pub mod collections;
pub use collections::Entity as Collections;
pub mod products;
pub use products::Entity as Products;
pub mod product_promotions;
pub use product_promotions::Entity as ProductPromotions;
pub mod customers;
pub use customers::Entity as Customers;
pub mod addresses;
pub use addresses::Entity as Addresses;
pub mod carts;
pub use carts::Entity as Carts;
pub mod cart_items;
pub use cart_items::Entity as CartItems;
pub mod orders;
pub use orders::Entity as Orders;
pub mod order_items;
pub use order_items::Entity as OrderItems;
