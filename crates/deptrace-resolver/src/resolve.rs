use anyhow::Result;

use crate::build::build_dependency_graph;
use crate::order::install_order;
use crate::types::ResolvedGraph;
use crate::warnings::WarningSink;

pub fn resolve_dependency_graph<F, W>(
    root: &str,
    max_depth: usize,
    fetch: F,
    warnings: &mut W,
) -> ResolvedGraph
where
    F: FnMut(&str) -> Result<Vec<String>>,
    W: WarningSink + ?Sized,
{
    let graph = build_dependency_graph(root, max_depth, fetch, warnings);
    let install_order = install_order(&graph, root);
    ResolvedGraph {
        graph,
        install_order,
    }
}
