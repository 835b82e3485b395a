use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::anyhow;

use super::*;

fn available(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(name, deps)| {
            (
                name.to_string(),
                deps.iter().map(|dep| dep.to_string()).collect(),
            )
        })
        .collect()
}

fn graph_of(entries: &[(&str, &[&str])]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (name, deps) in entries {
        graph.ensure_node(name);
        for dep in deps.iter() {
            graph.link(name, dep);
        }
    }
    graph
}

fn build(
    packages: &BTreeMap<String, Vec<String>>,
    root: &str,
    max_depth: usize,
) -> (DependencyGraph, Vec<String>) {
    let mut warnings = CollectedWarnings::default();
    let graph = build_dependency_graph(
        root,
        max_depth,
        |name| {
            packages
                .get(name)
                .cloned()
                .ok_or_else(|| anyhow!("package '{name}' is not defined"))
        },
        &mut warnings,
    );
    (graph, warnings.into_messages())
}

fn position(order: &[String], name: &str) -> usize {
    order
        .iter()
        .position(|entry| entry == name)
        .unwrap_or_else(|| panic!("{name} must be in install order {order:?}"))
}

#[test]
fn zero_depth_returns_root_without_fetching() {
    let calls = RefCell::new(0_usize);
    let mut warnings = CollectedWarnings::default();

    let graph = build_dependency_graph(
        "app",
        0,
        |_| {
            *calls.borrow_mut() += 1;
            Ok(vec!["lib".to_string()])
        },
        &mut warnings,
    );

    assert_eq!(*calls.borrow(), 0);
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get("app"), Some(&[][..]));
    assert!(warnings.messages().is_empty());
}

#[test]
fn builds_graph_for_diamond_within_depth() {
    let packages = available(&[("A", &["B", "C"]), ("B", &["C"]), ("C", &[])]);

    let (graph, warnings) = build(&packages, "A", 2);

    assert!(warnings.is_empty());
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.dependencies("A"), ["B", "C"]);
    assert_eq!(graph.dependencies("B"), ["C"]);
    assert!(graph.dependencies("C").is_empty());
    assert_eq!(install_order(&graph, "A"), vec!["C", "B", "A"]);
}

#[test]
fn nodes_at_max_depth_are_recorded_but_not_fetched() {
    let packages = available(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"]), ("D", &[])]);
    let fetched = RefCell::new(Vec::new());
    let mut warnings = CollectedWarnings::default();

    let graph = build_dependency_graph(
        "A",
        2,
        |name| {
            fetched.borrow_mut().push(name.to_string());
            Ok(packages.get(name).cloned().unwrap_or_default())
        },
        &mut warnings,
    );

    assert_eq!(*fetched.borrow(), vec!["A", "B"]);
    assert_eq!(graph.dependencies("B"), ["C"]);
    assert_eq!(graph.get("C"), Some(&[][..]));
    assert!(!graph.contains("D"));
}

#[test]
fn each_package_is_fetched_at_most_once() {
    let packages = available(&[
        ("A", &["B", "C", "D"]),
        ("B", &["D"]),
        ("C", &["D", "B"]),
        ("D", &[]),
    ]);
    let fetched = RefCell::new(Vec::<String>::new());
    let mut warnings = CollectedWarnings::default();

    let graph = build_dependency_graph(
        "A",
        10,
        |name| {
            fetched.borrow_mut().push(name.to_string());
            Ok(packages.get(name).cloned().unwrap_or_default())
        },
        &mut warnings,
    );

    let mut fetched = fetched.into_inner();
    fetched.sort();
    assert_eq!(fetched, vec!["A", "B", "C", "D"]);
    assert_eq!(graph.dependencies("C"), ["D", "B"]);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn traversal_pops_most_recently_pushed_first() {
    let packages = available(&[("A", &["B", "C"]), ("B", &[]), ("C", &[])]);

    let (graph, _) = build(&packages, "A", 3);

    assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["A", "C", "B"]);
}

#[test]
fn shared_dependency_keeps_depth_of_first_visit() {
    // C sits two levels below A through B, but the walk reaches it first
    // through D and E at depth 3, where the limit stops expansion.
    let packages = available(&[
        ("A", &["B", "D"]),
        ("B", &["C"]),
        ("D", &["E"]),
        ("E", &["C"]),
        ("C", &["F"]),
        ("F", &[]),
    ]);

    let (graph, _) = build(&packages, "A", 3);

    assert_eq!(graph.dependencies("B"), ["C"]);
    assert_eq!(graph.get("C"), Some(&[][..]));
    assert!(!graph.contains("F"));
}

#[test]
fn duplicate_dependencies_are_linked_once() {
    let packages = available(&[("A", &["B", "B", "C", "B"]), ("B", &[]), ("C", &[])]);

    let (graph, _) = build(&packages, "A", 5);

    assert_eq!(graph.dependencies("A"), ["B", "C"]);
}

#[test]
fn self_dependency_is_recorded_without_reexpansion() {
    let packages = available(&[("A", &["A", "B"]), ("B", &[])]);
    let calls = RefCell::new(0_usize);
    let mut warnings = CollectedWarnings::default();

    let graph = build_dependency_graph(
        "A",
        5,
        |name| {
            *calls.borrow_mut() += 1;
            Ok(packages.get(name).cloned().unwrap_or_default())
        },
        &mut warnings,
    );

    assert_eq!(*calls.borrow(), 2);
    assert_eq!(graph.dependencies("A"), ["A", "B"]);
    assert_eq!(install_order(&graph, "A"), vec!["B", "A"]);
}

#[test]
fn fetch_failure_is_isolated_to_one_package() {
    let packages = available(&[("A", &["B", "X", "C"]), ("B", &["D"]), ("C", &[]), ("D", &[])]);

    let (graph, warnings) = build(&packages, "A", 5);

    assert_eq!(graph.get("X"), Some(&[][..]));
    for name in ["A", "B", "C", "D"] {
        assert!(graph.contains(name), "{name} must be in the graph");
    }
    assert_eq!(
        warnings,
        vec!["failed to fetch dependencies for 'X': package 'X' is not defined"]
    );
}

#[test]
fn root_fetch_failure_leaves_root_without_dependencies() {
    let packages = BTreeMap::new();

    let (graph, warnings) = build(&packages, "app", 3);

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get("app"), Some(&[][..]));
    assert_eq!(warnings.len(), 1);
    assert_eq!(install_order(&graph, "app"), vec!["app"]);
}

#[test]
fn cyclic_graph_terminates() {
    let packages = available(&[("A", &["B"]), ("B", &["A"])]);

    let (graph, warnings) = build(&packages, "A", 100);

    assert!(warnings.is_empty());
    assert_eq!(graph.dependencies("A"), ["B"]);
    assert_eq!(graph.dependencies("B"), ["A"]);
}

#[test]
fn install_order_places_dependencies_first() {
    let graph = graph_of(&[
        ("app", &["cli", "log"]),
        ("cli", &["term", "log"]),
        ("log", &["fmt"]),
        ("term", &["fmt"]),
        ("fmt", &[]),
    ]);

    let order = install_order(&graph, "app");

    assert_eq!(order.len(), 5);
    for (name, deps) in graph.iter() {
        for dep in deps {
            assert!(
                position(&order, dep) < position(&order, name),
                "{dep} must precede {name} in {order:?}"
            );
        }
    }
    assert_eq!(order, vec!["fmt", "term", "log", "cli", "app"]);
}

#[test]
fn install_order_emits_each_cycle_member_once() {
    let graph = graph_of(&[("A", &["B"]), ("B", &["A"])]);

    assert_eq!(install_order(&graph, "A"), vec!["B", "A"]);
    assert_eq!(install_order(&graph, "B"), vec!["A", "B"]);
}

#[test]
fn install_order_excludes_unreachable_packages() {
    let graph = graph_of(&[("A", &["B"]), ("B", &[]), ("Z", &["A"])]);

    assert_eq!(install_order(&graph, "A"), vec!["B", "A"]);
}

#[test]
fn install_order_treats_missing_keys_as_leaves() {
    let graph = graph_of(&[("A", &["B", "C"])]);

    assert_eq!(install_order(&graph, "A"), vec!["B", "C", "A"]);
    assert_eq!(install_order(&DependencyGraph::default(), "solo"), vec!["solo"]);
}

#[test]
fn install_order_is_repeatable() {
    let graph = graph_of(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["D", "A"]),
        ("D", &[]),
    ]);

    assert_eq!(install_order(&graph, "A"), install_order(&graph, "A"));
}

#[test]
fn resolve_returns_graph_and_order() {
    let packages = available(&[("A", &["B", "C"]), ("B", &["C"]), ("C", &[])]);
    let mut warnings = CollectedWarnings::default();

    let resolved = resolve_dependency_graph(
        "A",
        2,
        |name| Ok(packages.get(name).cloned().unwrap_or_default()),
        &mut warnings,
    );

    assert_eq!(resolved.install_order, vec!["C", "B", "A"]);
    assert_eq!(resolved.graph.len(), 3);
}

#[test]
fn dependency_graph_serializes_in_insertion_order() {
    let graph = graph_of(&[("B", &["A"]), ("A", &[])]);

    let json = serde_json::to_string(&graph).expect("graph must serialize");

    assert_eq!(json, r#"{"B":["A"],"A":[]}"#);
}
