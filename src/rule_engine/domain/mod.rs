pub mod component_metadata;
pub mod coordinate;
pub mod dependency;
pub mod variant;

pub use component_metadata::{ComponentIdentity, ComponentMetadata};
pub use coordinate::{ComponentCoordinate, ModuleSelector};
pub use dependency::{DependencyDeclaration, VersionConstraint};
pub use variant::Variant;
