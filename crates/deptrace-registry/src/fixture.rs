use std::path::Path;

use anyhow::Result;
use deptrace_core::{FetchError, FixtureError, FixtureGraph};

use crate::ManifestSource;

/// Serves lookups from a preloaded test graph.
#[derive(Debug, Clone)]
pub struct FixtureManifestSource {
    graph: FixtureGraph,
    origin: String,
}

impl FixtureManifestSource {
    pub fn new(graph: FixtureGraph) -> Self {
        Self {
            graph,
            origin: "<in-memory test graph>".to_string(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let graph = FixtureGraph::from_path(path)?;
        Ok(Self {
            graph,
            origin: path.display().to_string(),
        })
    }

    pub fn graph(&self) -> &FixtureGraph {
        &self.graph
    }
}

impl ManifestSource for FixtureManifestSource {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<String>> {
        self.graph
            .dependencies(package)
            .map(<[String]>::to_vec)
            .ok_or_else(|| FetchError::NotInFixture(package.to_string()).into())
    }

    fn describe(&self) -> String {
        self.origin.clone()
    }
}
