use crate::rule_engine::domain::ComponentMetadata;
use crate::ports::outbound::MetadataFormat;
use crate::shared::Result;
use anyhow::{bail, Context};

/// Only major version 1 of the module metadata format is understood
const SUPPORTED_MAJOR_VERSION: &str = "1";

/// GradleModuleFormat adapter for Gradle Module Metadata (`*.module`) JSON
///
/// Properties the domain model does not know about are preserved in their
/// original order, so an encode after an unchanged decode yields the same
/// document (modulo whitespace).
pub struct GradleModuleFormat;

impl GradleModuleFormat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GradleModuleFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataFormat for GradleModuleFormat {
    fn name(&self) -> &'static str {
        "Gradle Module Metadata"
    }

    fn decode(&self, content: &str) -> Result<ComponentMetadata> {
        let metadata: ComponentMetadata =
            serde_json::from_str(content).context("Invalid module metadata JSON")?;

        let major = metadata.format_version().split('.').next().unwrap_or_default();
        if major != SUPPORTED_MAJOR_VERSION {
            bail!(
                "Unsupported formatVersion '{}' (expected {}.x)",
                metadata.format_version(),
                SUPPORTED_MAJOR_VERSION
            );
        }

        metadata.coordinate().context("Invalid component block")?;

        for variant in metadata.variants() {
            if variant.name().trim().is_empty() {
                bail!("Variant names must not be empty");
            }
        }

        Ok(metadata)
    }

    fn encode(&self, metadata: &ComponentMetadata) -> Result<String> {
        let mut encoded =
            serde_json::to_string_pretty(metadata).context("Failed to encode module metadata")?;
        encoded.push('\n');
        Ok(encoded)
    }
}
