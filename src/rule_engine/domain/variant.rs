use super::DependencyDeclaration;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named, usage-specific configuration of a component (`apiElements`,
/// `runtimeElements`, ...) and the dependencies it declares.
///
/// `dependencyConstraints`, `files` and `capabilities` are not modelled and
/// live untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    name: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<DependencyDeclaration>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
            dependencies: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_dependency(mut self, dependency: DependencyDeclaration) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn dependencies(&self) -> &[DependencyDeclaration] {
        &self.dependencies
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(DependencyDeclaration::name)
    }

    /// Gives a rule mutable access to this variant's dependency list.
    ///
    /// Only the list is exposed; the variant's name and attributes stay fixed.
    pub fn with_dependencies<F>(&mut self, action: F)
    where
        F: FnOnce(&mut Vec<DependencyDeclaration>),
    {
        action(&mut self.dependencies);
    }
}
