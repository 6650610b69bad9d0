use crate::application::dto::{RewriteRequest, RewriteResponse, RewrittenDocument};
use crate::rule_engine::services::{ComponentRewrite, RuleRegistry};
use crate::ports::outbound::{MetadataFormat, MetadataReader, ProgressReporter};
use crate::shared::error::MetadataRuleError;
use crate::shared::Result;
use std::path::Path;

/// RewriteMetadataUseCase - Applies registered metadata rules to metadata files
///
/// Uses generic dependency injection for every infrastructure concern so
/// tests can swap in mocks.
///
/// # Type Parameters
/// * `MR` - MetadataReader implementation
/// * `MF` - MetadataFormat implementation
/// * `PR` - ProgressReporter implementation
pub struct RewriteMetadataUseCase<MR, MF, PR> {
    metadata_reader: MR,
    metadata_format: MF,
    progress_reporter: PR,
    registry: RuleRegistry,
}

impl<MR, MF, PR> RewriteMetadataUseCase<MR, MF, PR>
where
    MR: MetadataReader,
    MF: MetadataFormat,
    PR: ProgressReporter,
{
    pub fn new(
        metadata_reader: MR,
        metadata_format: MF,
        progress_reporter: PR,
        registry: RuleRegistry,
    ) -> Self {
        Self {
            metadata_reader,
            metadata_format,
            progress_reporter,
            registry,
        }
    }

    /// Executes the rewrite for every input in request order
    ///
    /// Nothing is written here; the caller decides where each document goes.
    ///
    /// # Errors
    /// - No inputs were given
    /// - An input cannot be read or is not valid module metadata
    pub fn execute(&self, request: RewriteRequest) -> Result<RewriteResponse> {
        if request.inputs.is_empty() {
            return Err(MetadataRuleError::Validation {
                message: "No module metadata files given".to_string(),
            }
            .into());
        }

        if self.registry.is_empty() {
            self.progress_reporter
                .report_warning("⚠️  Warning: No metadata rules are registered; files will not change.");
        }

        let total = request.inputs.len();
        self.progress_reporter.report(&format!(
            "🔧 Applying {} metadata rule(s) to {} file(s)...",
            self.registry.len(),
            total
        ));

        let mut documents = Vec::with_capacity(total);
        for (index, path) in request.inputs.iter().enumerate() {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.progress_reporter
                .report_progress(index + 1, total, Some(&file_name));

            documents.push(self.rewrite_file(path)?);
        }

        let response = RewriteResponse::new(documents);
        self.report_summary(&response);
        Ok(response)
    }

    fn rewrite_file(&self, path: &Path) -> Result<RewrittenDocument> {
        let content = self.metadata_reader.read_metadata(path)?;

        let mut metadata = self.metadata_format.decode(&content).map_err(|e| {
            MetadataRuleError::MetadataParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            }
        })?;

        let rewrite = self
            .registry
            .apply(&mut metadata)
            .map_err(|e| MetadataRuleError::MetadataParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            })?;

        // Untouched files keep their exact bytes
        let content = if rewrite.is_modified() {
            self.metadata_format.encode(&metadata)?
        } else {
            content
        };

        Ok(RewrittenDocument {
            path: path.to_path_buf(),
            rewrite,
            content,
        })
    }

    fn report_summary(&self, response: &RewriteResponse) {
        for document in response.modified_documents() {
            self.progress_reporter
                .report(&Self::describe_rewrite(&document.rewrite));
        }

        let modified = response.modified_documents().count();
        if modified == 0 {
            self.progress_reporter
                .report_completion("✅ No metadata needed rewriting");
        } else if response.total_removed() == 0 {
            self.progress_reporter.report_completion(&format!(
                "✅ Rewrote {} of {} file(s)",
                modified,
                response.documents.len()
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Removed {} dependency declaration(s) from {} of {} file(s)",
                response.total_removed(),
                modified,
                response.documents.len()
            ));
        }
    }

    fn describe_rewrite(rewrite: &ComponentRewrite) -> String {
        let mut lines = vec![format!("📝 {}", rewrite.coordinate)];
        if rewrite.changes.is_empty() {
            lines.push(format!("   - rewritten by {}", rewrite.applied_rules.join(", ")));
        }
        for change in &rewrite.changes {
            let removed: Vec<String> = change.removed.iter().map(ToString::to_string).collect();
            lines.push(format!(
                "   - {}: removed {}",
                change.variant,
                removed.join(", ")
            ));
        }
        lines.join("\n")
    }
}
