use crate::shared::error::MetadataRuleError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single coordinate part (group, module or version)
const MAX_PART_LENGTH: usize = 255;

/// Checks one `group`/`module`/`version` part.
///
/// Parts are compared byte-for-byte elsewhere, so nothing is normalized here;
/// we only reject values that cannot appear in a `group:module:version` string.
fn validate_part(kind: &str, value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} cannot be empty", kind));
    }
    if value.len() > MAX_PART_LENGTH {
        return Err(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            kind,
            value.len(),
            MAX_PART_LENGTH
        ));
    }
    if value.contains(':') || value.chars().any(char::is_whitespace) {
        return Err(format!(
            "{} '{}' must not contain ':' or whitespace",
            kind, value
        ));
    }
    Ok(())
}

/// Identity of one resolved component: `group:module:version`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentCoordinate {
    group: String,
    module: String,
    version: String,
}

impl ComponentCoordinate {
    pub fn new(
        group: impl Into<String>,
        module: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let (group, module, version) = (group.into(), module.into(), version.into());
        for (kind, value) in [("group", &group), ("module", &module), ("version", &version)] {
            validate_part(kind, value).map_err(|message| MetadataRuleError::Validation {
                message: format!("Invalid component coordinate: {}", message),
            })?;
        }
        Ok(Self {
            group,
            module,
            version,
        })
    }

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

impl fmt::Display for ComponentCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}

impl FromStr for ComponentCoordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, module, version] => Self::new(*group, *module, *version),
            _ => Err(MetadataRuleError::Validation {
                message: format!(
                    "Invalid component coordinate '{}': expected GROUP:MODULE:VERSION",
                    s
                ),
            }
            .into()),
        }
    }
}

/// Selects the components a rule is registered for.
///
/// `group:module` matches every version of that module, `group:module:version`
/// only that release. Matching is exact string equality on each present part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleSelector {
    group: String,
    module: String,
    version: Option<String>,
}

impl ModuleSelector {
    /// Parses `GROUP:MODULE` or `GROUP:MODULE:VERSION`
    ///
    /// # Errors
    /// Returns [`MetadataRuleError::InvalidSelector`] for any other shape or an
    /// empty/oversized part.
    pub fn parse(selector: &str) -> Result<Self> {
        let invalid = |reason: String| MetadataRuleError::InvalidSelector {
            selector: selector.to_string(),
            reason,
        };

        let parts: Vec<&str> = selector.trim().split(':').collect();
        let (group, module, version) = match parts.as_slice() {
            [group, module] => (*group, *module, None),
            [group, module, version] => (*group, *module, Some(*version)),
            _ => {
                return Err(invalid(format!(
                    "expected 2 or 3 ':'-separated parts, found {}",
                    parts.len()
                ))
                .into())
            }
        };

        validate_part("group", group).map_err(invalid)?;
        validate_part("module", module).map_err(invalid)?;
        if let Some(version) = version {
            validate_part("version", version).map_err(invalid)?;
        }

        Ok(Self {
            group: group.to_string(),
            module: module.to_string(),
            version: version.map(str::to_string),
        })
    }

    /// Builds a selector from parts known to be valid at compile time.
    pub(crate) fn from_static(group: &'static str, module: &'static str) -> Self {
        Self {
            group: group.to_string(),
            module: module.to_string(),
            version: None,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn matches(&self, coordinate: &ComponentCoordinate) -> bool {
        self.group == coordinate.group()
            && self.module == coordinate.module()
            && self
                .version
                .as_deref()
                .is_none_or(|version| version == coordinate.version())
    }
}

impl fmt::Display for ModuleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group, self.module, version),
            None => write!(f, "{}:{}", self.group, self.module),
        }
    }
}

impl FromStr for ModuleSelector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
