

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// In-memory SQLite database with all migrations applied; one pooled
/// connection so every query sees the same memory store.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Removes the SQLite file (and its journal side files) when dropped.
pub(crate) struct TempDbFile {
    path: std::path::PathBuf,
}

impl Drop for TempDbFile {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut p = self.path.clone().into_os_string();
            p.push(suffix);
            let _ = std::fs::remove_file(p);
        }
    }
}

/// File-backed database for tests that need several pooled connections.
pub(crate) async fn setup_file_db() -> Result<(DatabaseConnection, TempDbFile)> {
    let path = std::env::temp_dir().join(format!("quiz_models_{}.db", uuid::Uuid::new_v4()));
    let guard = TempDbFile { path };
    let db = Database::connect(format!("sqlite://{}?mode=rwc", guard.path.display())).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((db, guard))
}
