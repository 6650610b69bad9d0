/// Metadata format adapters
mod gradle_module;

pub use gradle_module::GradleModuleFormat;
