use crate::dependency_query::domain::{DependencyGraph, ReachableSet};
use std::collections::HashSet;

/// ReachabilitySolver service computing transitive closure from one package
///
/// Iterative depth-first traversal with an explicit work list. The visited
/// set is seeded with the start node, so every node is expanded at most once
/// and the start is never reported, even when a cycle leads back to it.
pub struct ReachabilitySolver;

impl ReachabilitySolver {
    /// All nodes reachable from `start` through one or more edges
    ///
    /// An unknown `start` yields an empty set. Leaves that were never
    /// declared are included when reached.
    pub fn reachable_from(graph: &DependencyGraph, start: &str) -> ReachableSet {
        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut work_list: Vec<&str> = vec![start];
        let mut reachable = Vec::new();

        while let Some(node) = work_list.pop() {
            for dep in graph.dependencies_of(node) {
                if visited.insert(dep.as_str()) {
                    reachable.push(dep.clone());
                    work_list.push(dep.as_str());
                }
            }
        }

        reachable.into_iter().collect()
    }
}
