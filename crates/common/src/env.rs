//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::info;

/// Create the upload directory if it is missing. Safe to call repeatedly.
pub async fn ensure_upload_dir(upload_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(upload_dir).await.is_ok() {
        return Ok(());
    }
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {upload_dir}: {e}"))?;
    info!(%upload_dir, event = "upload_dir_created", "created upload directory");
    Ok(())
}
