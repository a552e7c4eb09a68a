//! Throwaway databases for tests.
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Private in-memory SQLite database with the schema applied.
///
/// The pool is pinned to one connection: every SQLite memory connection is its
/// own database, and the data lives only as long as that connection.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    crate::runtime::ensure_schema(&db).await?;
    Ok(db)
}
