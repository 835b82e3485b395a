use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, trace};

use crate::types::DependencyGraph;
use crate::warnings::WarningSink;

/// Expands `root` depth-first, fetching each newly reached package once.
///
/// Only packages popped at a depth below `max_depth` are fetched; deeper ones
/// are recorded with no dependencies. A package reached along several paths is
/// expanded at whichever depth reaches it first. A failed fetch is reported to
/// `warnings` and leaves that package with no dependencies.
pub fn build_dependency_graph<F, W>(
    root: &str,
    max_depth: usize,
    mut fetch: F,
    warnings: &mut W,
) -> DependencyGraph
where
    F: FnMut(&str) -> Result<Vec<String>>,
    W: WarningSink + ?Sized,
{
    let mut graph = DependencyGraph::new();
    if max_depth == 0 {
        graph.ensure_node(root);
        return graph;
    }

    let mut visited: HashSet<String> = HashSet::from([root.to_string()]);
    let mut stack: Vec<(String, usize)> = vec![(root.to_string(), 0)];

    while let Some((current, depth)) = stack.pop() {
        graph.ensure_node(&current);
        if depth >= max_depth {
            trace!(package = %current, depth, "depth limit reached");
            continue;
        }

        let dependencies = match fetch(&current) {
            Ok(dependencies) => dependencies,
            Err(err) => {
                warnings.warn(&format!(
                    "failed to fetch dependencies for '{current}': {err:#}"
                ));
                continue;
            }
        };
        debug!(package = %current, depth, count = dependencies.len(), "expanded package");

        for dependency in dependencies {
            graph.link(&current, &dependency);
            if visited.insert(dependency.clone()) {
                stack.push((dependency, depth + 1));
            }
        }
    }

    graph
}
