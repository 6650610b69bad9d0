/// ProgressReporter port for user feedback while files are processed
///
/// Everything goes to the user, never into the rewritten metadata.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports that item `current` of `total` is being processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports completion of the whole run
    fn report_completion(&self, message: &str);
}
