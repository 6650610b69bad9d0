/// Use cases module containing application orchestration
mod rewrite_metadata;

pub use rewrite_metadata::RewriteMetadataUseCase;
