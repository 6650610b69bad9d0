/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define how the application core reads metadata files,
/// decodes and encodes them, reports progress, and presents output.
pub mod metadata_format;
pub mod metadata_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use metadata_format::MetadataFormat;
pub use metadata_reader::MetadataReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
