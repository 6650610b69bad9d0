/// Filesystem adapters for reading metadata and writing results
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
