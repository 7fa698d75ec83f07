//! # Storefront Schema Migration
//!
//! Creates every storefront table, leaves first, so each foreign key points
//! at a table that already exists.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_uniq(Users::Username))
                    .col(string_uniq(Users::Email))
                    .col(text(Users::PasswordHash))
                    .col(string(Users::FirstName))
                    .col(string(Users::LastName))
                    .col(boolean(Users::IsStaff).default(false))
                    .col(timestamp_with_time_zone(Users::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Promotions::Table)
                    .if_not_exists()
                    .col(pk_auto(Promotions::Id))
                    .col(string(Promotions::Description))
                    .col(double(Promotions::Discount))
                    .to_owned(),
            )
            .await?;

        // featured_product_id gets its constraint in a later migration; products
        // do not exist yet.
        manager
            .create_table(
                Table::create()
                    .table(Collections::Table)
                    .if_not_exists()
                    .col(pk_auto(Collections::Id))
                    .col(string(Collections::Title))
                    .col(integer_null(Collections::FeaturedProductId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string(Products::Title))
                    .col(string_uniq(Products::Slug))
                    .col(text(Products::Description))
                    .col(decimal_len(Products::UnitPrice, 6, 2))
                    .col(integer(Products::Inventory))
                    .col(timestamp_with_time_zone(Products::LastUpdate).default(Expr::current_timestamp()))
                    .col(integer(Products::CollectionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_collection_id")
                            .from(Products::Table, Products::CollectionId)
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductPromotions::Table)
                    .if_not_exists()
                    .col(integer(ProductPromotions::ProductId))
                    .col(integer(ProductPromotions::PromotionId))
                    .primary_key(
                        Index::create()
                            .col(ProductPromotions::ProductId)
                            .col(ProductPromotions::PromotionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_promotions_product_id")
                            .from(ProductPromotions::Table, ProductPromotions::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_promotions_promotion_id")
                            .from(ProductPromotions::Table, ProductPromotions::PromotionId)
                            .to(Promotions::Table, Promotions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(pk_auto(Customers::Id))
                    .col(string(Customers::FirstName))
                    .col(string(Customers::LastName))
                    .col(string_uniq(Customers::Email))
                    .col(string(Customers::Phone))
                    .col(date_null(Customers::BirthDate))
                    .col(char_len(Customers::Membership, 1).default("B"))
                    .col(integer_null(Customers::UserId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_user_id")
                            .from(Customers::Table, Customers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(pk_auto(Addresses::Id))
                    .col(string(Addresses::Street))
                    .col(string(Addresses::City))
                    .col(integer(Addresses::CustomerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_customer_id")
                            .from(Addresses::Table, Addresses::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Carts::Table)
                    .if_not_exists()
                    .col(pk_auto(Carts::Id))
                    .col(timestamp_with_time_zone(Carts::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(pk_auto(CartItems::Id))
                    .col(integer(CartItems::CartId))
                    .col(integer(CartItems::ProductId))
                    .col(integer(CartItems::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_cart_id")
                            .from(CartItems::Table, CartItems::CartId)
                            .to(Carts::Table, Carts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_product_id")
                            .from(CartItems::Table, CartItems::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(timestamp_with_time_zone(Orders::PlacedAt).default(Expr::current_timestamp()))
                    .col(char_len(Orders::PaymentStatus, 1).default("P"))
                    .col(integer(Orders::CustomerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer_id")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItems::Id))
                    .col(integer(OrderItems::OrderId))
                    .col(integer(OrderItems::ProductId))
                    .col(integer(OrderItems::Quantity))
                    .col(decimal_len(OrderItems::UnitPrice, 6, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order_id")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_product_id")
                            .from(OrderItems::Table, OrderItems::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_collection_id")
                    .table(Products::Table)
                    .col(Products::CollectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_customer_id")
                    .table(Orders::Table)
                    .col(Orders::CustomerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dependents first
        manager
            .drop_table(Table::drop().table(OrderItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CartItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Carts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductPromotions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Collections::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Promotions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    IsStaff,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Promotions {
    Table,
    Id,
    Description,
    Discount,
}

#[derive(DeriveIden)]
pub enum Collections {
    Table,
    Id,
    Title,
    FeaturedProductId,
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Title,
    Slug,
    Description,
    UnitPrice,
    Inventory,
    LastUpdate,
    CollectionId,
}

#[derive(DeriveIden)]
pub enum ProductPromotions {
    Table,
    ProductId,
    PromotionId,
}

#[derive(DeriveIden)]
pub enum Customers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    BirthDate,
    Membership,
    UserId,
}

#[derive(DeriveIden)]
pub enum Addresses {
    Table,
    Id,
    Street,
    City,
    CustomerId,
}

#[derive(DeriveIden)]
pub enum Carts {
    Table,
    Id,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum CartItems {
    Table,
    Id,
    CartId,
    ProductId,
    Quantity,
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    PlacedAt,
    PaymentStatus,
    CustomerId,
}

#[derive(DeriveIden)]
pub enum OrderItems {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    UnitPrice,
}

#[cfg(test)]
mod tests {
    use sea_orm_migration::MigrationName;

    use super::*;

    #[test]
    fn test_migration_name() {
        assert_eq!(Migration.name(), "m20250101_000001_create_store_tables");
    }
}
