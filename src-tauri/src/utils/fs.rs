use std::path::Path;
use tokio::fs;
use crate::utils::{DzSaveResult, PathError};

/// Checks that `path` names an existing regular file.
pub async fn validate_input_file(path: &Path) -> Result<(), PathError> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(PathError::not_a_file(path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PathError::not_found(path)),
        Err(e) => Err(e.into()),
    }
}

/// Creates `dir` and any missing parents
pub async fn ensure_dir(dir: &Path) -> DzSaveResult<()> {
    fs::create_dir_all(dir).await?;
    Ok(())
}

/// File name of `path` for log lines, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
