mod metadata_rule;
mod remove_dependency;

pub use metadata_rule::{ComponentMetadataContext, ComponentMetadataRule};
pub use remove_dependency::{RemoveDependencyConfig, RemoveDependencyRule, HAMCREST_CORE};
