//! Startup routines run once before the router starts serving.

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tracing::info;

/// Ensure the upload directory exists.
pub async fn ensure_env(upload_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_upload_dir(upload_dir).await
}

/// Apply pending migrations. Already-applied migrations are skipped, so this is
/// safe against an initialized store.
pub async fn ensure_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    let pending = migration::Migrator::get_pending_migrations(db).await?.len();
    migration::Migrator::up(db, None).await?;
    info!(event = "schema_ready", applied = pending, "database schema up to date");
    Ok(())
}
