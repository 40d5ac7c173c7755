use std::io;
use std::path::Path;

use chrono::Utc;

/// Persists one uploaded payload under `upload_dir`, creating the directory
/// on first use. The stored name is `<upload-millis>-<original_name>`; the
/// original name is kept as-is.
pub async fn save_upload(
    upload_dir: &Path,
    original_name: &str,
    data: &[u8],
) -> io::Result<String> {
    tokio::fs::create_dir_all(upload_dir).await?;
    let file_name = format!("{}-{}", Utc::now().timestamp_millis(), original_name);
    tokio::fs::write(upload_dir.join(&file_name), data).await?;
    Ok(file_name)
}
