//! Writing fetched records to disk.

use crate::error::{Error, Result};
use crate::types::Record;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `records` as a pretty-printed JSON array to `dir/file_name`
///
/// The `createdTime` key is removed from every record before serialization.
/// `dir` is created if it does not exist; an existing file is replaced only
/// once the new content is fully on disk.
/// Returns the path written.
pub async fn save_records(
    dir: &Path,
    file_name: &str,
    mut records: Vec<Record>,
) -> Result<PathBuf> {
    for record in &mut records {
        record.strip_created_time();
    }

    let json = serde_json::to_vec_pretty(&records)?;

    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create output directory '{}': {}", dir.display(), e),
        ))
    })?;

    // The previous file stays intact until the new content is fully written.
    let path = dir.join(file_name);
    let tmp_path = temp_path_for(dir, file_name);

    if let Err(e) = tokio::fs::write(&tmp_path, json).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write '{}': {}", tmp_path.display(), e),
        )));
    }

    if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(Error::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to move '{}' into place at '{}': {}",
                tmp_path.display(),
                path.display(),
                e
            ),
        )));
    }

    info!("Saved {} items to {}", records.len(), path.display());
    Ok(path)
}

fn temp_path_for(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(format!(".{file_name}.tmp"))
}
