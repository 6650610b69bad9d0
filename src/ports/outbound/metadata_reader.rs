use crate::shared::Result;
use std::path::Path;

/// MetadataReader port for loading raw component metadata
pub trait MetadataReader {
    /// Reads the metadata file at `path` and returns its content unparsed
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file is rejected by security checks (symlink, size)
    /// - The file cannot be read due to permissions or I/O errors
    fn read_metadata(&self, path: &Path) -> Result<String>;
}
