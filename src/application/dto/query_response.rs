use crate::dependency_query::domain::{
    DependencyGraph, Direction, GraphSource, PackageName, ReachableSet, ReportMetadata,
};

/// QueryResponse - everything a formatter needs to present one query
#[derive(Debug, Clone)]
pub struct QueryResponse {
    pub start_package: PackageName,
    pub direction: Direction,
    pub source: GraphSource,
    /// The graph as loaded, before any inversion
    pub graph: DependencyGraph,
    /// Sorted reachable packages, start package excluded
    pub reachable: ReachableSet,
    pub metadata: ReportMetadata,
}

impl QueryResponse {
    pub fn new(
        start_package: PackageName,
        direction: Direction,
        source: GraphSource,
        graph: DependencyGraph,
        reachable: ReachableSet,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            start_package,
            direction,
            source,
            graph,
            reachable,
            metadata,
        }
    }
}
