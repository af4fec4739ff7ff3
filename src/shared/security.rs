use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for snapshot and stored-result files (50 MB).
/// Captures of very large pages stay well below this.
pub const MAX_INPUT_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Rejects symbolic links at `path`.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// `operation` names what the caller is about to do ("read", "write") and is
/// only used in the error message.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Pass the path of the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads `path` as UTF-8 after checking that it is a regular file, not a
/// symlink, and no larger than `max_size` bytes.
///
/// # Errors
/// Returns an error if any of the checks fail or the file cannot be read.
pub fn read_regular_file(path: &Path, description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("the {} is a symbolic link", description),
            hint: "Pass the path of the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "the {} is too large ({} bytes, maximum {} bytes)",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Capture a smaller page or remove unrelated content from the snapshot".to_string(),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("page.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/page.json");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = read_regular_file(&link, "page snapshot", MAX_INPUT_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_read_regular_file_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err =
            read_regular_file(temp_dir.path(), "page snapshot", MAX_INPUT_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_regular_file_rejects_oversized() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("big.json");
        fs::write(&file_path, "0123456789").unwrap();

        let err = read_regular_file(&file_path, "page snapshot", 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("page.json");
        fs::write(&file_path, "{\"url\":\"x\"}").unwrap();

        let content = read_regular_file(&file_path, "page snapshot", MAX_INPUT_FILE_SIZE).unwrap();
        assert_eq!(content, "{\"url\":\"x\"}");
    }
}
