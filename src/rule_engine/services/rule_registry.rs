use crate::rule_engine::domain::{
    ComponentCoordinate, ComponentMetadata, DependencyDeclaration, ModuleSelector,
};
use crate::rule_engine::rules::{
    ComponentMetadataContext, ComponentMetadataRule, RemoveDependencyConfig, RemoveDependencyRule,
};
use crate::shared::Result;
use std::fmt;

/// Components a registered rule is applied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleScope {
    AllModules,
    Module(ModuleSelector),
}

impl RuleScope {
    pub fn matches(&self, coordinate: &ComponentCoordinate) -> bool {
        match self {
            RuleScope::AllModules => true,
            RuleScope::Module(selector) => selector.matches(coordinate),
        }
    }
}

impl fmt::Display for RuleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleScope::AllModules => write!(f, "*"),
            RuleScope::Module(selector) => write!(f, "{}", selector),
        }
    }
}

struct Registration {
    scope: RuleScope,
    rule: Box<dyn ComponentMetadataRule>,
}

/// Dependencies a single variant lost during a rewrite
#[derive(Debug, Clone, PartialEq)]
pub struct VariantChange {
    pub variant: String,
    pub removed: Vec<DependencyDeclaration>,
}

/// Outcome of running every applicable rule on one component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRewrite {
    pub coordinate: ComponentCoordinate,
    pub applied_rules: Vec<String>,
    /// Removed declarations per variant, for reporting
    pub changes: Vec<VariantChange>,
    /// Whether the metadata differs in any way after the rules ran
    pub modified: bool,
}

impl ComponentRewrite {
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn removed_count(&self) -> usize {
        self.changes.iter().map(|c| c.removed.len()).sum()
    }
}

/// RuleRegistry - Decides which metadata rules run for which component
///
/// Plays the part of the dependency-resolution engine: rules are registered
/// against a module selector (or all modules) and are invoked, in
/// registration order, for every component whose coordinate matches.
/// The registry is immutable once built and holds no per-call state.
#[derive(Default)]
pub struct RuleRegistry {
    registrations: Vec<Registration>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in `hamcrest-core` rule for `junit:junit`
    pub fn with_defaults() -> Self {
        Self::new().with_remove_dependency_rule(RemoveDependencyRule::hamcrest_core())
    }

    pub fn with_module<R>(mut self, selector: ModuleSelector, rule: R) -> Self
    where
        R: ComponentMetadataRule + 'static,
    {
        self.registrations.push(Registration {
            scope: RuleScope::Module(selector),
            rule: Box::new(rule),
        });
        self
    }

    pub fn all_modules<R>(mut self, rule: R) -> Self
    where
        R: ComponentMetadataRule + 'static,
    {
        self.registrations.push(Registration {
            scope: RuleScope::AllModules,
            rule: Box::new(rule),
        });
        self
    }

    /// Registers the rule under its own `applies_to_component` selector
    pub fn with_remove_dependency_rule(self, rule: RemoveDependencyRule) -> Self {
        match rule.config().applies_to_component().cloned() {
            Some(selector) => self.with_module(selector, rule),
            None => self.all_modules(rule),
        }
    }

    pub fn with_remove_dependency(self, config: RemoveDependencyConfig) -> Self {
        self.with_remove_dependency_rule(RemoveDependencyRule::new(config))
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// `(scope, rule name)` for every registration, in order
    pub fn describe(&self) -> Vec<(RuleScope, String)> {
        self.registrations
            .iter()
            .map(|r| (r.scope.clone(), r.rule.name().to_string()))
            .collect()
    }

    pub fn rules_for<'a>(
        &'a self,
        coordinate: &'a ComponentCoordinate,
    ) -> impl Iterator<Item = &'a dyn ComponentMetadataRule> + 'a {
        self.registrations
            .iter()
            .filter(move |r| r.scope.matches(coordinate))
            .map(|r| r.rule.as_ref())
    }

    /// Runs every matching rule on `metadata` and reports what was removed
    ///
    /// # Errors
    /// Returns an error only when the component coordinate itself is invalid;
    /// rules never fail.
    pub fn apply(&self, metadata: &mut ComponentMetadata) -> Result<ComponentRewrite> {
        let coordinate = metadata.coordinate()?;
        let original = metadata.clone();

        let before: Vec<(String, Vec<DependencyDeclaration>)> = metadata
            .variants()
            .iter()
            .map(|v| (v.name().to_string(), v.dependencies().to_vec()))
            .collect();

        let mut applied_rules = Vec::new();
        for rule in self.rules_for(&coordinate) {
            rule.execute(&mut ComponentMetadataContext::new(metadata));
            applied_rules.push(rule.name().to_string());
        }

        let changes = before
            .into_iter()
            .filter_map(|(variant, previous)| {
                let current = metadata
                    .variant(&variant)
                    .map(|v| v.dependencies())
                    .unwrap_or_default();
                let removed: Vec<DependencyDeclaration> = previous
                    .into_iter()
                    .filter(|dep| !current.contains(dep))
                    .collect();
                (!removed.is_empty()).then_some(VariantChange { variant, removed })
            })
            .collect();

        Ok(ComponentRewrite {
            coordinate,
            applied_rules,
            changes,
            modified: *metadata != original,
        })
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.describe()).finish()
    }
}
