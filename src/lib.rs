//! metadata-rules - Component metadata rules for Gradle Module Metadata
//!
//! Rewrites the published metadata of resolved components before it is used
//! for dependency resolution. The built-in rule strips the legacy
//! `hamcrest-core` assertion library that `junit:junit` declares in every
//! variant.
//!
//! # Architecture
//!
//! - **Domain Layer** (`rule_engine`): metadata model, rules, rule registry
//! - **Application Layer** (`application`): the rewrite use case
//! - **Ports** (`ports`): interfaces for infrastructure
//! - **Adapters** (`adapters`): filesystem, codec, and console implementations
//! - **Shared** (`shared`): error types and file security checks
//!
//! # Example
//!
//! ```
//! use metadata_rules::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let coordinate = ComponentCoordinate::new("foo", "bar", "1.0")?;
//! let metadata = ComponentMetadata::new(&coordinate).with_variant(
//!     Variant::new("runtime")
//!         .with_dependency(DependencyDeclaration::new("org.hamcrest", "hamcrest-core"))
//!         .with_dependency(DependencyDeclaration::new("junit", "junit")),
//! );
//!
//! let rewritten = RemoveDependencyRule::hamcrest_core().rewrite(metadata);
//!
//! let names: Vec<&str> = rewritten.variant("runtime").unwrap().dependency_names().collect();
//! assert_eq!(names, vec!["junit"]);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod rule_engine;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formats::GradleModuleFormat;
    pub use crate::application::dto::{RewriteRequest, RewriteResponse, RewrittenDocument};
    pub use crate::application::use_cases::RewriteMetadataUseCase;
    pub use crate::rule_engine::domain::{
        ComponentCoordinate, ComponentMetadata, DependencyDeclaration, ModuleSelector, Variant,
        VersionConstraint,
    };
    pub use crate::rule_engine::rules::{
        ComponentMetadataContext, ComponentMetadataRule, RemoveDependencyConfig,
        RemoveDependencyRule, HAMCREST_CORE,
    };
    pub use crate::rule_engine::services::{ComponentRewrite, RuleRegistry, VariantChange};
    pub use crate::ports::outbound::{
        MetadataFormat, MetadataReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, MetadataRuleError};
    pub use crate::shared::Result;
}
