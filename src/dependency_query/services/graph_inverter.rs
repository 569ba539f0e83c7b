use crate::dependency_query::domain::DependencyGraph;

/// GraphInverter service producing the transpose of a dependency graph
///
/// Every node of the source, including undeclared leaves, becomes a key of
/// the result. For each edge `a -> b` the result holds `b -> a`.
pub struct GraphInverter;

impl GraphInverter {
    pub fn invert(graph: &DependencyGraph) -> DependencyGraph {
        let mut inverted = DependencyGraph::from_declarations(
            graph
                .all_nodes()
                .into_iter()
                .map(|node| (node.to_string(), Vec::new())),
        );

        for (from, to) in graph.edges() {
            inverted.push_dependency(to, from.to_string());
        }

        inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_query::services::LocalGraphParser;

    fn sorted_edges(graph: &DependencyGraph) -> Vec<(String, String)> {
        let mut edges: Vec<(String, String)> = graph
            .edges()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        edges.sort();
        edges
    }

    #[test]
    fn test_invert_reverses_edges() {
        let graph = LocalGraphParser::parse("A: B C\nB:\nC: A");
        let inverted = GraphInverter::invert(&graph);

        assert_eq!(inverted.dependencies_of("B"), ["A"]);
        assert_eq!(inverted.dependencies_of("C"), ["A"]);
        assert_eq!(inverted.dependencies_of("A"), ["C"]);
    }

    #[test]
    fn test_invert_gives_every_node_a_key() {
        let graph = LocalGraphParser::parse("app: lib\nlib: leaf");
        let inverted = GraphInverter::invert(&graph);

        let names: Vec<&str> = inverted.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["app", "lib", "leaf"]);
        assert!(inverted.dependencies_of("app").is_empty());
        assert!(inverted.contains_package("app"));
        assert_eq!(inverted.dependencies_of("leaf"), ["lib"]);
    }

    #[test]
    fn test_invert_does_not_mutate_input() {
        let graph = LocalGraphParser::parse("a: b");
        let _ = GraphInverter::invert(&graph);
        assert_eq!(graph.package_count(), 1);
        assert_eq!(graph.dependencies_of("a"), ["b"]);
        assert!(!graph.contains_package("b"));
    }

    #[test]
    fn test_double_inversion_restores_edge_set() {
        let graph = LocalGraphParser::parse("a: b c c\nb: c a\nc: c\nd:");
        let twice = GraphInverter::invert(&GraphInverter::invert(&graph));

        assert_eq!(sorted_edges(&twice), sorted_edges(&graph));
        for node in graph.all_nodes() {
            assert!(twice.contains_package(node));
        }
    }

    #[test]
    fn test_invert_self_loop() {
        let graph = LocalGraphParser::parse("a: a");
        let inverted = GraphInverter::invert(&graph);
        assert_eq!(inverted.dependencies_of("a"), ["a"]);
    }

    #[test]
    fn test_invert_empty_graph() {
        assert!(GraphInverter::invert(&DependencyGraph::new()).is_empty());
    }
}
