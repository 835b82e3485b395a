use indexmap::IndexMap;
use serde::Serialize;

/// Package name to its direct dependencies, in the order packages were first
/// reached. A key with an empty list was visited and has no dependencies; a
/// missing key was never visited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ensure_node(&mut self, name: &str) -> &mut Vec<String> {
        self.edges.entry(name.to_string()).or_default()
    }

    /// Records `dependency` under `dependent` unless the edge already exists.
    pub(crate) fn link(&mut self, dependent: &str, dependency: &str) {
        let dependencies = self.ensure_node(dependent);
        if !dependencies.iter().any(|existing| existing == dependency) {
            dependencies.push(dependency.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.edges.get(name).map(Vec::as_slice)
    }

    /// Dependencies of `name`, empty for a package that is not in the graph.
    pub fn dependencies(&self, name: &str) -> &[String] {
        self.get(name).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges
            .iter()
            .map(|(name, dependencies)| (name.as_str(), dependencies.as_slice()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGraph {
    pub graph: DependencyGraph,
    pub install_order: Vec<String>,
}
