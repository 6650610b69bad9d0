use super::{ComponentCoordinate, Variant};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Gradle Module Metadata format version written for newly built metadata
pub const DEFAULT_FORMAT_VERSION: &str = "1.1";

/// The `component` block: who this metadata describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentIdentity {
    group: String,
    module: String,
    version: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ComponentIdentity {
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl From<&ComponentCoordinate> for ComponentIdentity {
    fn from(coordinate: &ComponentCoordinate) -> Self {
        Self {
            group: coordinate.group().to_string(),
            module: coordinate.module().to_string(),
            version: coordinate.version().to_string(),
            extra: Map::new(),
        }
    }
}

/// Metadata of one resolved component and its ordered variants.
///
/// Instances are owned by whoever resolved them; rules only get a mutable
/// borrow through `ComponentMetadataContext`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    format_version: String,
    component: ComponentIdentity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_by: Option<Value>,
    #[serde(default)]
    variants: Vec<Variant>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ComponentMetadata {
    pub fn new(coordinate: &ComponentCoordinate) -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION.to_string(),
            component: ComponentIdentity::from(coordinate),
            created_by: None,
            variants: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    pub fn component(&self) -> &ComponentIdentity {
        &self.component
    }

    /// Validated `group:module:version` of this component.
    ///
    /// # Errors
    /// Fails when the `component` block holds an empty or malformed part,
    /// which can only happen for metadata read from disk.
    pub fn coordinate(&self) -> Result<ComponentCoordinate> {
        ComponentCoordinate::new(
            self.component.group.as_str(),
            self.component.module.as_str(),
            self.component.version.as_str(),
        )
    }

    /// Tool that produced the metadata, as written by the publisher
    pub fn created_by(&self) -> Option<&Value> {
        self.created_by.as_ref()
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name() == name)
    }

    /// Runs `action` on every variant, in declaration order.
    pub fn all_variants<F>(&mut self, mut action: F)
    where
        F: FnMut(&mut Variant),
    {
        for variant in &mut self.variants {
            action(variant);
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
