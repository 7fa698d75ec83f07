use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add a constraint to an existing table; the seeder nulls
        // the column itself before products are removed.
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Sqlite {
            return Ok(());
        }

        // Add foreign key for collections.featured_product_id -> products.id
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_collections_featured_product_id")
                    .from(Collections::Table, Collections::FeaturedProductId)
                    .to(Products::Table, Products::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Sqlite {
            return Ok(());
        }

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_collections_featured_product_id")
                    .table(Collections::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Collections {
    Table,
    FeaturedProductId,
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
}
