use crate::rule_engine::domain::ComponentMetadata;
use crate::shared::Result;

/// MetadataFormat port translating between file content and [`ComponentMetadata`]
///
/// Implementations must round-trip properties the domain does not model,
/// so rewriting a file only changes what the rules changed.
pub trait MetadataFormat {
    /// Human-readable format name used in messages
    fn name(&self) -> &'static str;

    fn decode(&self, content: &str) -> Result<ComponentMetadata>;

    fn encode(&self, metadata: &ComponentMetadata) -> Result<String>;
}
