use crate::shared::Result;
use std::path::Path;

/// GraphFileReader port for reading a local dependency graph declaration
pub trait GraphFileReader {
    /// Reads the whole graph file as UTF-8 text
    ///
    /// # Errors
    /// Returns `QueryError::GraphFileRead` if the file cannot be opened or
    /// read, or is not valid UTF-8.
    fn read_graph_file(&self, path: &Path) -> Result<String>;
}
