use std::collections::{HashMap, HashSet};

/// DependencyGraph aggregate: package name -> ordered immediate dependencies
///
/// Keys are the packages that were declared (local file) or fetched (index).
/// A name that only shows up as a dependency is a leaf with no known
/// dependencies. Cycles and self-loops are valid states.
///
/// Declaration order is kept so displayed output is reproducible; a package
/// declared twice keeps its first position and takes the later dependency list.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    declaration_order: Vec<String>,
    dependencies: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(package, dependencies)` pairs in declaration order
    pub fn from_declarations<I>(declarations: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut graph = Self::new();
        for (package, deps) in declarations {
            graph.declare(package, deps);
        }
        graph
    }

    pub(crate) fn declare(&mut self, package: String, dependencies: Vec<String>) {
        if !self.dependencies.contains_key(&package) {
            self.declaration_order.push(package.clone());
        }
        self.dependencies.insert(package, dependencies);
    }

    pub(crate) fn push_dependency(&mut self, package: &str, dependency: String) {
        match self.dependencies.get_mut(package) {
            Some(deps) => deps.push(dependency),
            None => self.declare(package.to_string(), vec![dependency]),
        }
    }

    /// Immediate dependencies of `name`; empty when `name` is not a key
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.dependencies
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains_package(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Declared packages with their dependency lists, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.declaration_order
            .iter()
            .map(|name| (name.as_str(), self.dependencies_of(name)))
    }

    /// Every `(from, to)` edge, duplicates included
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries()
            .flat_map(|(from, deps)| deps.iter().map(move |to| (from, to.as_str())))
    }

    /// Every node, declared or not: keys first, then leaves in first-seen order
    pub fn all_nodes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for name in &self.declaration_order {
            if seen.insert(name.as_str()) {
                nodes.push(name.as_str());
            }
        }
        for (_, to) in self.edges() {
            if seen.insert(to) {
                nodes.push(to);
            }
        }
        nodes
    }

    pub fn package_count(&self) -> usize {
        self.declaration_order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.declaration_order.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self::from_declarations(iter)
    }
}
