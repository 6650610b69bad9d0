use metadata_rules::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock MetadataReader serving in-memory module metadata
#[derive(Default)]
pub struct MockMetadataReader {
    files: HashMap<PathBuf, String>,
    should_fail: bool,
}

impl MockMetadataReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            files: HashMap::new(),
            should_fail: true,
        }
    }
}

impl MetadataReader for MockMetadataReader {
    fn read_metadata(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock metadata reader failure");
        }
        self.files.get(path).cloned().ok_or_else(|| {
            MetadataRuleError::MetadataFileNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }
}
