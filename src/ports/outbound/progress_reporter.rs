/// ProgressReporter port for diagnostic output during a query
///
/// Keeps status messages off stdout so results stay machine-readable.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Announces a blocking activity (e.g. a network fetch) that lasts until
    /// the next `report_error` or `report_completion`
    fn report_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
