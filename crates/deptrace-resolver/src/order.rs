use std::collections::HashSet;

use crate::types::DependencyGraph;

/// Post-order walk from `root` with an explicit stack, so every dependency is
/// emitted before its dependents. Packages missing from the graph count as
/// having no dependencies. On a cycle the first member revisited is emitted
/// without waiting on the rest of the cycle.
pub fn install_order(graph: &DependencyGraph, root: &str) -> Vec<String> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut processed: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![root];
    let mut ordered = Vec::new();

    while let Some(&current) = stack.last() {
        if processed.contains(current) {
            stack.pop();
            continue;
        }

        visited.insert(current);
        let mut all_deps_processed = true;
        for dependency in graph.dependencies(current).iter().rev() {
            if !visited.contains(dependency.as_str()) {
                stack.push(dependency.as_str());
                all_deps_processed = false;
            }
        }

        if all_deps_processed {
            processed.insert(current);
            stack.pop();
            ordered.push(current.to_string());
        }
    }

    ordered
}
