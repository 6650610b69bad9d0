use crate::shared::Result;

/// OutputPresenter port for delivering rewritten metadata
///
/// Implemented for stdout and for files (including rewriting an input in place).
pub trait OutputPresenter {
    /// Presents the rewritten metadata content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
