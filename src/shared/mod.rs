pub mod error;
pub mod security;

/// Crate-wide result type. Errors are `anyhow::Error` so adapters can attach
/// context on top of the typed `MetadataRuleError` variants.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
