use crate::dependency_query::domain::{Direction, GraphSource, PackageName};

/// DependencyQuery - immutable request for one reachability query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyQuery {
    /// Package the traversal starts from
    pub start_package: PackageName,
    /// Where the graph is loaded from
    pub source: GraphSource,
    /// Follow edges forward (dependencies) or reversed (dependents)
    pub direction: Direction,
}

impl DependencyQuery {
    pub fn new(start_package: PackageName, source: GraphSource, direction: Direction) -> Self {
        Self {
            start_package,
            source,
            direction,
        }
    }
}
