mod build;
mod order;
mod resolve;
mod types;
mod warnings;

pub use build::build_dependency_graph;
pub use order::install_order;
pub use resolve::resolve_dependency_graph;
pub use types::{DependencyGraph, ResolvedGraph};
pub use warnings::{CollectedWarnings, WarningSink};

#[cfg(test)]
mod tests;
