/// ProgressReporter port for console feedback while exporting
///
/// Messages go to stderr so they never mix with anything a caller pipes
/// from stdout.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports how many of the requested reports have been processed
    ///
    /// # Arguments
    /// * `current` - Reports processed so far
    /// * `total` - Reports requested
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a failure. Implementations should make it stand out.
    fn report_error(&self, message: &str);

    /// Reports completion of the export
    fn report_completion(&self, message: &str);
}
