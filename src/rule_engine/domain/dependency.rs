use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Version requirement attached to a dependency declaration.
///
/// Mirrors the `version` object of Gradle Module Metadata. Rules never
/// interpret it; it is carried so rewritten metadata keeps its constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionConstraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strictly: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefers: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejects: Vec<String>,
}

impl VersionConstraint {
    pub fn requires(version: impl Into<String>) -> Self {
        Self {
            requires: Some(version.into()),
            ..Self::default()
        }
    }

    /// The version a resolver would start from: `strictly`, then `requires`, then `prefers`
    pub fn preferred_version(&self) -> Option<&str> {
        self.strictly
            .as_deref()
            .or(self.requires.as_deref())
            .or(self.prefers.as_deref())
    }
}

/// A reference from one variant to another component.
///
/// `name` is the artifact name (the `module` field on disk) and is the only
/// attribute rules match on. Properties this type does not model
/// (`excludes`, `reason`, `attributes`, ...) are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyDeclaration {
    group: String,
    #[serde(rename = "module")]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<VersionConstraint>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl DependencyDeclaration {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: None,
            extra: Map::new(),
        }
    }

    pub fn with_version(mut self, version: VersionConstraint) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&VersionConstraint> {
        self.version.as_ref()
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        if let Some(version) = self.version.as_ref().and_then(|v| v.preferred_version()) {
            write!(f, ":{}", version)?;
        }
        Ok(())
    }
}
