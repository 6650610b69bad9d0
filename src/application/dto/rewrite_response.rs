use crate::rule_engine::services::ComponentRewrite;
use std::path::PathBuf;

/// One processed input file
#[derive(Debug, Clone)]
pub struct RewrittenDocument {
    pub path: PathBuf,
    pub rewrite: ComponentRewrite,
    /// Content to write back. Identical to the input when nothing changed.
    pub content: String,
}

impl RewrittenDocument {
    pub fn is_modified(&self) -> bool {
        self.rewrite.is_modified()
    }
}

/// RewriteResponse - Result of the metadata rewrite use case
#[derive(Debug, Clone)]
pub struct RewriteResponse {
    pub documents: Vec<RewrittenDocument>,
}

impl RewriteResponse {
    pub fn new(documents: Vec<RewrittenDocument>) -> Self {
        Self { documents }
    }

    pub fn total_removed(&self) -> usize {
        self.documents.iter().map(|d| d.rewrite.removed_count()).sum()
    }

    pub fn modified_documents(&self) -> impl Iterator<Item = &RewrittenDocument> {
        self.documents.iter().filter(|d| d.is_modified())
    }

    pub fn has_rewrites(&self) -> bool {
        self.documents.iter().any(RewrittenDocument::is_modified)
    }
}
