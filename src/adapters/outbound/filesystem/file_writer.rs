use crate::ports::outbound::OutputPresenter;
use crate::shared::error::MetadataRuleError;
use crate::shared::security::validate_output_target;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// FileSystemWriter adapter for writing rewritten metadata to a file
///
/// Content is written to a temporary file next to the target and then
/// renamed over it, so an interrupted run never leaves a truncated `.module`
/// file behind. The same adapter serves `--output` and `--in-place`.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        MetadataRuleError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn parent_directory(&self) -> Result<&Path> {
        let parent = match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };

        if !parent.is_dir() {
            return Err(self.write_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }

        Ok(parent)
    }

    /// Fresh files get the usual 0666 & !umask instead of tempfile's 0600
    fn staging_builder() -> Builder<'static, 'static> {
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        builder
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        validate_output_target(&self.output_path)?;
        let parent = self.parent_directory()?;

        let mut staged = Self::staging_builder()
            .tempfile_in(parent)
            .map_err(|e| self.write_error(format!("Failed to create temporary file: {}", e)))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| self.write_error(e.to_string()))?;

        // A replaced file keeps its mode
        if let Ok(existing) = fs::metadata(&self.output_path) {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| self.write_error(format!("Failed to copy permissions: {}", e)))?;
        }
        staged
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
