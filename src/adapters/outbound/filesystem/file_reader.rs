use crate::ports::outbound::MetadataReader;
use crate::shared::error::MetadataRuleError;
use crate::shared::security::{inspect_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading module metadata files
///
/// Every read is preceded by the checks in [`inspect_input_file`]:
/// symbolic links, non-regular files and oversized files are refused.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Reader with a custom size limit
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataReader for FileSystemReader {
    fn read_metadata(&self, path: &Path) -> Result<String> {
        inspect_input_file(path, self.max_file_size)?;

        fs::read_to_string(path).map_err(|e| {
            MetadataRuleError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
