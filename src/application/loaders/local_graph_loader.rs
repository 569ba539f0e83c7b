use crate::dependency_query::domain::DependencyGraph;
use crate::dependency_query::services::LocalGraphParser;
use crate::ports::outbound::GraphFileReader;
use crate::shared::Result;
use std::path::Path;

/// LocalGraphLoader reads a declaration file and parses it into a graph
pub struct LocalGraphLoader<R> {
    reader: R,
}

impl<R: GraphFileReader> LocalGraphLoader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn load(&self, path: &Path) -> Result<DependencyGraph> {
        let content = self.reader.read_graph_file(path)?;
        Ok(LocalGraphParser::parse(&content))
    }
}
