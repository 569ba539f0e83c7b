use crate::ports::outbound::GraphFileReader;
use crate::shared::error::QueryError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_GRAPH_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter implementing the GraphFileReader port
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after checking it is a regular, reasonably sized file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let metadata = validate_regular_file(path, file_type)?;
        validate_file_size(metadata.len(), path, MAX_GRAPH_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFileReader for FileSystemReader {
    fn read_graph_file(&self, path: &Path) -> Result<String> {
        self.safe_read_file(path, "dependency graph file")
            .map_err(|e| {
                QueryError::GraphFileRead {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}
