//! # Migrate Command
//!
//! Applies, lists or rolls back the storefront schema migrations.

use error::{AppError, Result};
use migration::{DbErr, MigratorTrait as _};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{commands::MigrateArgs, config::DatabaseConfig};

fn migration_error(action: &'static str) -> impl FnOnce(DbErr) -> AppError {
    move |e| AppError::migration(format!("{}: {}", action, e))
}

/// Applies all pending migrations to an open connection.
pub async fn apply_pending(db: &DatabaseConnection) -> Result<()> {
    migration::Migrator::up(db, None)
        .await
        .map_err(migration_error("Failed to run migrations"))
}

/// Runs the `migrate` command.
///
/// `--dry-run` prints pending migration names; `--rollback` reverts the most
/// recent one.
pub async fn migrate(config: &DatabaseConfig, args: &MigrateArgs) -> Result<()> {
    let db = config.connect().await?;

    if args.dry_run {
        let pending = migration::Migrator::get_pending_migrations(&db)
            .await
            .map_err(migration_error("Failed to list pending migrations"))?;
        info!(target: "migrate", pending = pending.len(), "Dry run");
        for m in &pending {
            println!("{}", m.name());
        }
    }
    else if args.rollback {
        migration::Migrator::down(&db, Some(1))
            .await
            .map_err(migration_error("Failed to roll back migration"))?;
        info!(target: "migrate", "Rolled back last migration");
    }
    else {
        apply_pending(&db).await?;
        info!(target: "migrate", "Migrations applied");
    }
    Ok(())
}
