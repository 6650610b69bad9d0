//! Configuration file support for metadata-rules.
//!
//! Provides YAML-based configuration through `metadata-rules.config.yml` files,
//! including data structures, file loading, validation, and turning the
//! configured rules into a [`RuleRegistry`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::rule_engine::domain::ModuleSelector;
use crate::rule_engine::rules::RemoveDependencyConfig;
use crate::rule_engine::services::RuleRegistry;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "metadata-rules.config.yml";

/// Maximum number of rule entries in one config file
const MAX_RULES: usize = 64;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub rules: Option<Vec<RuleEntry>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One `rules:` entry: dependencies to strip from matching components.
#[derive(Debug, Deserialize)]
pub struct RuleEntry {
    /// `GROUP:MODULE` or `GROUP:MODULE:VERSION`; absent means every component
    pub module: Option<String>,
    #[serde(default)]
    pub remove_dependencies: Vec<String>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Expands every rule entry into one config per removed dependency,
    /// in file order.
    pub fn remove_dependency_configs(&self) -> Result<Vec<RemoveDependencyConfig>> {
        let mut configs = Vec::new();
        for (i, entry) in self.rules.iter().flatten().enumerate() {
            let selector = entry
                .module
                .as_deref()
                .map(ModuleSelector::parse)
                .transpose()
                .with_context(|| format!("Invalid config: rules[{}].module", i))?;

            for (j, name) in entry.remove_dependencies.iter().enumerate() {
                let config = RemoveDependencyConfig::new(name.as_str()).with_context(|| {
                    format!("Invalid config: rules[{}].remove_dependencies[{}]", i, j)
                })?;
                configs.push(match &selector {
                    Some(selector) => config.applies_to(selector.clone()),
                    None => config,
                });
            }
        }
        Ok(configs)
    }

    pub fn has_rules(&self) -> bool {
        self.rules.as_ref().is_some_and(|rules| !rules.is_empty())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let Some(rules) = config.rules.as_ref() else {
        return Ok(());
    };

    if rules.len() > MAX_RULES {
        bail!(
            "Invalid config: too many rules: {} (maximum: {})",
            rules.len(),
            MAX_RULES
        );
    }

    for (i, entry) in rules.iter().enumerate() {
        if entry.remove_dependencies.is_empty() {
            bail!(
                "Invalid config: rules[{}].remove_dependencies must not be empty.\n\n\
                 💡 Hint: List at least one dependency name (e.g., \"hamcrest-core\").",
                i
            );
        }
    }

    // Selector and name errors carry their own hints
    config.remove_dependency_configs()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
    for (i, entry) in config.rules.iter().flatten().enumerate() {
        for key in entry.unknown_fields.keys() {
            eprintln!(
                "⚠️  Warning: Unknown field 'rules[{}].{}' will be ignored.",
                i, key
            );
        }
    }
}

/// Builds the registry for a run.
///
/// Config rules come first, then `--remove` rules scoped by `--module` (or to
/// every component when no module is given). With neither, the built-in
/// `hamcrest-core` rule for `junit:junit` is registered.
pub fn build_registry(
    config: Option<&ConfigFile>,
    remove: &[String],
    module: Option<&str>,
) -> Result<RuleRegistry> {
    let mut registry = RuleRegistry::new();

    if let Some(config) = config {
        for rule_config in config.remove_dependency_configs()? {
            registry = registry.with_remove_dependency(rule_config);
        }
    }

    let selector = module.map(ModuleSelector::parse).transpose()?;
    for name in remove {
        let rule_config = RemoveDependencyConfig::new(name.as_str())?;
        registry = registry.with_remove_dependency(match &selector {
            Some(selector) => rule_config.applies_to(selector.clone()),
            None => rule_config,
        });
    }

    if registry.is_empty() {
        registry = RuleRegistry::with_defaults();
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_engine::services::RuleScope;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn describe(registry: &RuleRegistry) -> Vec<String> {
        registry
            .describe()
            .into_iter()
            .map(|(scope, name)| format!("{} {}", scope, name))
            .collect()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yml",
            r#"
rules:
  - module: junit:junit
    remove_dependencies:
      - hamcrest-core
  - remove_dependencies:
      - commons-logging
      - log4j
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        let rules = config.rules.as_ref().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].module.as_deref(), Some("junit:junit"));
        assert!(rules[1].module.is_none());

        let configs = config.remove_dependency_configs().unwrap();
        assert_eq!(configs.len(), 3);
        assert_eq!(configs[0].target_dependency_name(), "hamcrest-core");
        assert_eq!(
            configs[0].applies_to_component().map(ToString::to_string),
            Some("junit:junit".to_string())
        );
        assert_eq!(configs[2].target_dependency_name(), "log4j");
        assert!(configs[2].applies_to_component().is_none());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            CONFIG_FILENAME,
            "rules:\n  - module: junit:junit\n    remove_dependencies: [hamcrest-core]\n",
        );

        let config = discover_config(dir.path()).unwrap();
        assert!(config.unwrap().has_rules());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "bad.yml", "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_remove_dependencies_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yml", "rules:\n  - module: junit:junit\n");

        let err = format!("{}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("remove_dependencies must not be empty"));
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yml",
            "rules:\n  - module: junit\n    remove_dependencies: [hamcrest-core]\n",
        );

        let err = format!("{:#}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("rules[0].module"));
        assert!(err.contains("Invalid module selector 'junit'"));
    }

    #[test]
    fn test_blank_dependency_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yml",
            "rules:\n  - remove_dependencies: [\"\"]\n",
        );

        let err = format!("{:#}", load_config_from_path(&path).unwrap_err());
        assert!(err.contains("rules[0].remove_dependencies[0]"));
        assert!(err.contains("cannot be empty"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yml",
            r#"
format: json
rules:
  - module: junit:junit
    remove_dependencies: [hamcrest-core]
    reason: legacy
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert!(config.unknown_fields.contains_key("format"));
        assert!(config.rules.unwrap()[0].unknown_fields.contains_key("reason"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.rules.is_none());
        assert!(!config.has_rules());
        assert!(config.unknown_fields.is_empty());
        assert!(config.remove_dependency_configs().unwrap().is_empty());
    }

    #[test]
    fn test_build_registry_defaults_to_hamcrest_core() {
        let registry = build_registry(None, &[], None).unwrap();
        assert_eq!(
            describe(&registry),
            vec!["junit:junit remove-dependency(hamcrest-core)"]
        );
    }

    #[test]
    fn test_build_registry_cli_rules_without_module() {
        let registry = build_registry(None, &["slf4j-api".to_string()], None).unwrap();
        let described = registry.describe();
        assert_eq!(described.len(), 1);
        assert_eq!(described[0].0, RuleScope::AllModules);
    }

    #[test]
    fn test_build_registry_config_then_cli() {
        let config: ConfigFile = serde_yaml_ng::from_str(
            "rules:\n  - module: junit:junit\n    remove_dependencies: [hamcrest-core]\n",
        )
        .unwrap();

        let registry = build_registry(
            Some(&config),
            &["slf4j-api".to_string()],
            Some("org.testcontainers:testcontainers"),
        )
        .unwrap();

        assert_eq!(
            describe(&registry),
            vec![
                "junit:junit remove-dependency(hamcrest-core)",
                "org.testcontainers:testcontainers remove-dependency(slf4j-api)"
            ]
        );
    }

    #[test]
    fn test_build_registry_rejects_bad_module() {
        let result = build_registry(None, &["slf4j-api".to_string()], Some("not-a-selector"));
        assert!(result.is_err());
    }
}
