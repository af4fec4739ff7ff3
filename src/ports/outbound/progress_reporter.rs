/// ProgressReporter port for reporting progress during an audit run
///
/// This port abstracts progress reporting (e.g., to stderr) so the
/// application layer never prints directly. Warnings that must not
/// interrupt a run (skipped frames, store failures) go through
/// `report_error`.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a multi-step stage
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
