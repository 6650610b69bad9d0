use super::{ComponentMetadataContext, ComponentMetadataRule};
use crate::rule_engine::domain::{DependencyDeclaration, ModuleSelector};
use crate::shared::error::MetadataRuleError;
use crate::shared::Result;

/// Legacy assertion library that JUnit 4 drags in transitively
pub const HAMCREST_CORE: &str = "hamcrest-core";

/// Component that declares the `hamcrest-core` dependency
const JUNIT_GROUP: &str = "junit";
const JUNIT_MODULE: &str = "junit";

/// Maximum length of a dependency name to remove
const MAX_NAME_LENGTH: usize = 255;

/// Which dependency to strip, and from which component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveDependencyConfig {
    target_dependency_name: String,
    applies_to_component: Option<ModuleSelector>,
}

impl RemoveDependencyConfig {
    /// Creates a config that removes `target_dependency_name` from every component
    ///
    /// # Errors
    /// - The name is empty or longer than 255 bytes
    /// - The name contains whitespace or ':' (it could never equal a module name)
    pub fn new(target_dependency_name: impl Into<String>) -> Result<Self> {
        let target_dependency_name = target_dependency_name.into();

        if target_dependency_name.is_empty() {
            return Err(MetadataRuleError::Validation {
                message: "Dependency name to remove cannot be empty".to_string(),
            }
            .into());
        }

        if target_dependency_name.len() > MAX_NAME_LENGTH {
            return Err(MetadataRuleError::Validation {
                message: format!(
                    "Dependency name to remove is too long ({} bytes). Maximum allowed: {} bytes",
                    target_dependency_name.len(),
                    MAX_NAME_LENGTH
                ),
            }
            .into());
        }

        if target_dependency_name
            .chars()
            .any(|c| c.is_whitespace() || c == ':')
        {
            return Err(MetadataRuleError::Validation {
                message: format!(
                    "Dependency name '{}' must be a bare module name (no whitespace or ':')",
                    target_dependency_name
                ),
            }
            .into());
        }

        Ok(Self {
            target_dependency_name,
            applies_to_component: None,
        })
    }

    /// Restricts the rule to components matching `selector`
    pub fn applies_to(mut self, selector: ModuleSelector) -> Self {
        self.applies_to_component = Some(selector);
        self
    }

    pub fn target_dependency_name(&self) -> &str {
        &self.target_dependency_name
    }

    /// `None` means every component
    pub fn applies_to_component(&self) -> Option<&ModuleSelector> {
        self.applies_to_component.as_ref()
    }
}

/// Removes every dependency declaration whose name equals the configured
/// target, in every variant of the component.
///
/// Matching is exact and case-sensitive on the name only; group and version
/// are ignored. Remaining declarations keep their order.
///
/// The rule does not look at the component identity. Scoping it to
/// `applies_to_component` is done by whoever registers it.
#[derive(Debug, Clone)]
pub struct RemoveDependencyRule {
    config: RemoveDependencyConfig,
    name: String,
}

impl RemoveDependencyRule {
    pub fn new(config: RemoveDependencyConfig) -> Self {
        let name = format!("remove-dependency({})", config.target_dependency_name());
        Self { config, name }
    }

    /// JUnit 4 is only needed as a transitive dependency of test containers and
    /// is never used for assertions, so its `hamcrest-core` dependency can go.
    pub fn hamcrest_core() -> Self {
        Self::new(RemoveDependencyConfig {
            target_dependency_name: HAMCREST_CORE.to_string(),
            applies_to_component: Some(ModuleSelector::from_static(JUNIT_GROUP, JUNIT_MODULE)),
        })
    }

    pub fn config(&self) -> &RemoveDependencyConfig {
        &self.config
    }

    pub fn removes(&self, dependency: &DependencyDeclaration) -> bool {
        dependency.name() == self.config.target_dependency_name()
    }
}

impl ComponentMetadataRule for RemoveDependencyRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, context: &mut ComponentMetadataContext<'_>) {
        context.details().all_variants(|variant| {
            variant.with_dependencies(|dependencies| {
                dependencies.retain(|dependency| !self.removes(dependency));
            });
        });
    }

    fn is_cacheable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_engine::domain::{
        ComponentCoordinate, ComponentMetadata, Variant, VersionConstraint,
    };

    fn dep(name: &str) -> DependencyDeclaration {
        DependencyDeclaration::new("some.group", name)
    }

    fn foo_bar() -> ComponentCoordinate {
        ComponentCoordinate::new("foo", "bar", "1.0").unwrap()
    }

    fn names(metadata: &ComponentMetadata, variant: &str) -> Vec<String> {
        metadata
            .variant(variant)
            .unwrap()
            .dependency_names()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_runtime_variant_drops_hamcrest_core() {
        let metadata = ComponentMetadata::new(&foo_bar()).with_variant(
            Variant::new("runtime")
                .with_dependency(dep("hamcrest-core"))
                .with_dependency(dep("junit")),
        );

        let rewritten = RemoveDependencyRule::hamcrest_core().rewrite(metadata);

        assert_eq!(names(&rewritten, "runtime"), vec!["junit"]);
    }

    #[test]
    fn test_only_variant_holding_target_changes() {
        let metadata = ComponentMetadata::new(&foo_bar())
            .with_variant(Variant::new("compile").with_dependency(dep("junit")))
            .with_variant(Variant::new("runtime").with_dependency(dep("hamcrest-core")));

        let rewritten = RemoveDependencyRule::hamcrest_core().rewrite(metadata);

        assert_eq!(names(&rewritten, "compile"), vec!["junit"]);
        assert!(names(&rewritten, "runtime").is_empty());
    }

    #[test]
    fn test_metadata_without_target_is_unchanged() {
        let metadata = ComponentMetadata::new(&foo_bar())
            .with_variant(
                Variant::new("compile")
                    .with_dependency(dep("junit"))
                    .with_dependency(dep("hamcrest-library")),
            )
            .with_variant(Variant::new("runtime"));

        let rewritten = RemoveDependencyRule::hamcrest_core().rewrite(metadata.clone());

        assert_eq!(rewritten, metadata);
    }

    #[test]
    fn test_applying_twice_equals_applying_once() {
        let metadata = ComponentMetadata::new(&foo_bar()).with_variant(
            Variant::new("runtime")
                .with_dependency(dep("hamcrest-core"))
                .with_dependency(dep("junit"))
                .with_dependency(dep("hamcrest-core")),
        );
        let rule = RemoveDependencyRule::hamcrest_core();

        let once = rule.rewrite(metadata);
        let twice = rule.rewrite(once.clone());

        assert_eq!(once, twice);
        assert_eq!(names(&once, "runtime"), vec!["junit"]);
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let metadata = ComponentMetadata::new(&foo_bar()).with_variant(
            Variant::new("runtime")
                .with_dependency(dep("Hamcrest-Core"))
                .with_dependency(dep("hamcrest-core-parent"))
                .with_dependency(dep("hamcrest"))
                .with_dependency(dep("hamcrest-core")),
        );

        let rewritten = RemoveDependencyRule::hamcrest_core().rewrite(metadata);

        assert_eq!(
            names(&rewritten, "runtime"),
            vec!["Hamcrest-Core", "hamcrest-core-parent", "hamcrest"]
        );
    }

    #[test]
    fn test_group_and_version_are_ignored() {
        let metadata = ComponentMetadata::new(&foo_bar()).with_variant(
            Variant::new("runtime")
                .with_dependency(
                    DependencyDeclaration::new("org.hamcrest", "hamcrest-core")
                        .with_version(VersionConstraint::requires("1.3")),
                )
                .with_dependency(DependencyDeclaration::new("com.example.fork", "hamcrest-core")),
        );

        let rewritten = RemoveDependencyRule::hamcrest_core().rewrite(metadata);

        assert!(names(&rewritten, "runtime").is_empty());
    }

    #[test]
    fn test_order_of_remaining_dependencies_is_preserved() {
        let metadata = ComponentMetadata::new(&foo_bar()).with_variant(
            Variant::new("runtime")
                .with_dependency(dep("a"))
                .with_dependency(dep("hamcrest-core"))
                .with_dependency(dep("c"))
                .with_dependency(dep("b"))
                .with_dependency(dep("hamcrest-core"))
                .with_dependency(dep("d")),
        );

        let rewritten = RemoveDependencyRule::hamcrest_core().rewrite(metadata);

        assert_eq!(names(&rewritten, "runtime"), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_component_identity_and_attributes_untouched() {
        let metadata = ComponentMetadata::new(&foo_bar()).with_variant(
            Variant::new("runtime")
                .with_attribute("org.gradle.usage", serde_json::json!("java-runtime"))
                .with_dependency(dep("hamcrest-core")),
        );

        let rewritten = RemoveDependencyRule::hamcrest_core().rewrite(metadata.clone());

        assert_eq!(rewritten.coordinate().unwrap(), foo_bar());
        assert_eq!(rewritten.format_version(), metadata.format_version());
        assert_eq!(
            rewritten.variant("runtime").unwrap().attributes(),
            metadata.variant("runtime").unwrap().attributes()
        );
    }

    #[test]
    fn test_configured_target_name() {
        let config = RemoveDependencyConfig::new("commons-logging").unwrap();
        let rule = RemoveDependencyRule::new(config);
        let metadata = ComponentMetadata::new(&foo_bar()).with_variant(
            Variant::new("runtime")
                .with_dependency(dep("hamcrest-core"))
                .with_dependency(dep("commons-logging")),
        );

        let rewritten = rule.rewrite(metadata);

        assert_eq!(names(&rewritten, "runtime"), vec!["hamcrest-core"]);
        assert_eq!(rule.name(), "remove-dependency(commons-logging)");
        assert!(rule.is_cacheable());
    }

    #[test]
    fn test_hamcrest_core_preset() {
        let rule = RemoveDependencyRule::hamcrest_core();
        assert_eq!(rule.config().target_dependency_name(), HAMCREST_CORE);
        assert_eq!(
            rule.config().applies_to_component().map(ToString::to_string),
            Some("junit:junit".to_string())
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(RemoveDependencyConfig::new("").is_err());
        assert!(RemoveDependencyConfig::new("hamcrest core").is_err());
        assert!(RemoveDependencyConfig::new("org.hamcrest:hamcrest-core").is_err());
        assert!(RemoveDependencyConfig::new("a".repeat(MAX_NAME_LENGTH + 1)).is_err());

        let config = RemoveDependencyConfig::new("hamcrest-core")
            .unwrap()
            .applies_to(ModuleSelector::parse("junit:junit:4.13.2").unwrap());
        assert_eq!(config.applies_to_component().unwrap().version(), Some("4.13.2"));
    }

    #[test]
    fn test_rule_is_shareable_across_threads() {
        let rule = &RemoveDependencyRule::hamcrest_core();
        let inputs: Vec<ComponentMetadata> = (0..8)
            .map(|i| {
                let coordinate = ComponentCoordinate::new("foo", "bar", format!("1.{}", i)).unwrap();
                ComponentMetadata::new(&coordinate).with_variant(
                    Variant::new("runtime")
                        .with_dependency(dep("hamcrest-core"))
                        .with_dependency(dep("junit")),
                )
            })
            .collect();

        let outputs: Vec<ComponentMetadata> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .into_iter()
                .map(|metadata| scope.spawn(move || rule.rewrite(metadata)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for output in outputs {
            assert_eq!(names(&output, "runtime"), vec!["junit"]);
        }
    }
}
