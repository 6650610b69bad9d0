/// Mock implementations for testing
mod mock_metadata_reader;
mod mock_progress_reporter;

pub use mock_metadata_reader::MockMetadataReader;
pub use mock_progress_reporter::{MockProgressReporter, ReportedEvent};
