use crate::shared::error::MetadataRuleError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest metadata file we are willing to load (100 MB).
/// Published `.module` files are a few kilobytes; anything near this size is not metadata.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` can be read as an input file and returns its size.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// - The path does not exist ([`MetadataRuleError::MetadataFileNotFound`])
/// - The path is a symbolic link or larger than `max_size` ([`MetadataRuleError::SecurityError`])
/// - The path is not a regular file ([`MetadataRuleError::FileReadError`])
pub fn inspect_input_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MetadataRuleError::MetadataFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => {
            return Err(MetadataRuleError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(MetadataRuleError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input is a symbolic link".to_string(),
            hint: "Pass the resolved file path instead of the link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(MetadataRuleError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(MetadataRuleError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                metadata.len(),
                max_size
            ),
            hint: "Module metadata files are small JSON documents; check the input path".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Rejects an output path that already exists as a symbolic link.
///
/// A missing path is fine: the writer will create it.
pub fn validate_output_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(MetadataRuleError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Write to a regular file path".to_string(),
        }
        .into()),
        Ok(metadata) if metadata.is_dir() => Err(MetadataRuleError::FileWriteError {
            path: path.to_path_buf(),
            details: "Output path is a directory".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_input_file_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("junit-4.13.2.module");
        fs::write(&file_path, "{}").unwrap();

        let size = inspect_input_file(&file_path, MAX_FILE_SIZE).unwrap();
        assert_eq!(size, 2);
    }

    #[test]
    fn test_inspect_input_file_missing() {
        let path = PathBuf::from("/nonexistent/junit.module");
        let err = inspect_input_file(&path, MAX_FILE_SIZE).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MetadataRuleError>(),
            Some(MetadataRuleError::MetadataFileNotFound { .. })
        ));
    }

    #[test]
    fn test_inspect_input_file_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = inspect_input_file(temp_dir.path(), MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_inspect_input_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("big.module");
        fs::write(&file_path, "0123456789").unwrap();

        let err = inspect_input_file(&file_path, 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_inspect_input_file_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.module");
        let link = temp_dir.path().join("link.module");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = inspect_input_file(&link, MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_output_target_missing_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_output_target(&temp_dir.path().join("out.module")).is_ok());
    }

    #[test]
    fn test_validate_output_target_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = validate_output_target(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("directory"));
    }
}
