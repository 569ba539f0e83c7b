/// Mock implementations for testing
mod mock_graph_file_reader;
mod mock_metadata_fetcher;
mod mock_progress_reporter;

pub use mock_graph_file_reader::MockGraphFileReader;
pub use mock_metadata_fetcher::MockMetadataFetcher;
pub use mock_progress_reporter::MockProgressReporter;
