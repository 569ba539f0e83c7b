/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod formatter;
pub mod graph_file_reader;
pub mod metadata_fetcher;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use graph_file_reader::GraphFileReader;
pub use metadata_fetcher::MetadataFetcher;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
