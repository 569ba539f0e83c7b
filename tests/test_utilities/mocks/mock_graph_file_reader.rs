use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use depgraph::prelude::*;

/// Mock GraphFileReader serving fixed content
#[derive(Clone)]
pub struct MockGraphFileReader {
    pub content: String,
    pub should_fail: bool,
    pub read_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockGraphFileReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
            read_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn read_count(&self) -> usize {
        self.read_paths.lock().unwrap().len()
    }
}

impl GraphFileReader for MockGraphFileReader {
    fn read_graph_file(&self, path: &Path) -> Result<String> {
        self.read_paths.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            return Err(QueryError::GraphFileRead {
                path: path.to_path_buf(),
                details: "Mock graph file read failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
