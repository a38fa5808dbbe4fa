//! Deterministic test-data generation.

use crate::config::RunConfig;
use crate::record::records;
use crate::{ReadraceError, Result};
use futures::future;
use std::path::Path;
use tokio::fs;

/// Ensure the data directory exists, then write every record as its own
/// JSON file. All writes are issued concurrently and the step completes
/// when the last one lands; the first failure fails the whole step.
/// Re-running overwrites the same files byte-identically.
pub async fn generate_data(config: &RunConfig) -> Result<()> {
    ensure_dir(&config.data_dir).await?;

    let writes = records(config.file_count).map(|record| {
        let path = config.data_dir.join(&record.filename);
        async move {
            let payload = serde_json::to_vec(&record).expect("record serializes to JSON");
            fs::write(&path, payload)
                .await
                .map_err(|source| ReadraceError::FileWrite { path, source })
        }
    });
    future::try_join_all(writes).await?;

    tracing::info!(
        "generated {} files under {}",
        config.file_count,
        config.data_dir.display()
    );
    Ok(())
}

/// Stat the directory first and only create it, recursively, when the stat
/// fails. Both steps are suspension points, mirroring the runner I/O.
async fn ensure_dir(dir: &Path) -> Result<()> {
    if fs::metadata(dir).await.is_ok() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .await
        .map_err(|source| ReadraceError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })
}
