use std::path::PathBuf;

/// RewriteRequest - Input for the metadata rewrite use case
#[derive(Debug, Clone)]
pub struct RewriteRequest {
    /// Module metadata files to process, in order
    pub inputs: Vec<PathBuf>,
}

impl RewriteRequest {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self { inputs }
    }
}
