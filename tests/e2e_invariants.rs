//! Property tests for the graph invariants.
//!
//! Random declaration sequences over a small name pool, so cycles are
//! attempted often. After every call the graph must stay acyclic, its two
//! adjacency views must agree, and rejected calls must change nothing.

use proptest::prelude::*;
use token_registry::{DependencyGraph, Error};

const POOL: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

#[derive(Debug, Clone)]
struct Declaration {
    target: usize,
    sources: Vec<usize>,
    rule: u8,
}

fn declaration() -> impl Strategy<Value = Declaration> {
    (0..POOL.len(), proptest::collection::vec(0..POOL.len(), 0..4), any::<u8>())
        .prop_map(|(target, sources, rule)| Declaration { target, sources, rule })
}

/// Everything observable about the edge set and rules.
fn snapshot(graph: &DependencyGraph) -> Vec<(String, Vec<String>, Vec<String>, Option<String>)> {
    POOL.iter()
        .map(|name| {
            (
                name.to_string(),
                graph.get_dependents(name).into_iter().collect(),
                graph.get_dependencies(name).into_iter().collect(),
                graph.get_generation_rule(name).map(str::to_owned),
            )
        })
        .collect()
}

fn assert_consistent(graph: &DependencyGraph) {
    let order = graph.topological_sort();
    assert_eq!(order.len(), graph.node_count(), "order covers every linked name");

    let position = |name: &str| order.iter().position(|n| n == name);
    let mut edges = 0;
    for (source, target) in graph.edges() {
        edges += 1;
        let (s, t) = (position(source).unwrap(), position(target).unwrap());
        assert!(s < t, "{source} must precede {target} in {order:?}");
        assert!(graph.get_dependents(source).contains(target));
        assert!(graph.get_dependencies(target).contains(source));
    }
    assert_eq!(edges, graph.edge_count());

    for name in POOL {
        for target in graph.get_dependents(name) {
            assert!(graph.get_dependencies(&target).contains(name));
        }
    }
}

proptest! {
    #[test]
    fn test_random_declarations_keep_invariants(decls in proptest::collection::vec(declaration(), 1..40)) {
        let mut graph = DependencyGraph::new();

        for decl in decls {
            let target = POOL[decl.target];
            let sources: Vec<&str> = decl.sources.iter().map(|&i| POOL[i]).collect();
            let rule = format!("rule:{}", decl.rule);
            let before = snapshot(&graph);

            match graph.add_dependency(target, sources.clone(), rule.clone()) {
                Ok(()) => {
                    prop_assert_eq!(graph.get_generation_rule(target), Some(rule.as_str()));
                    for source in &sources {
                        prop_assert!(graph.get_dependencies(target).contains(*source));
                    }
                }
                Err(err) => {
                    prop_assert_eq!(snapshot(&graph), before, "rejected call mutated the graph");
                    match err {
                        Error::EmptySources { .. } => prop_assert!(sources.is_empty()),
                        Error::SelfDependency { .. } => prop_assert!(sources.contains(&target)),
                        Error::CircularDependency { path, .. } => {
                            prop_assert_eq!(path.first(), path.last());
                            prop_assert_eq!(path.get(1).map(String::as_str), Some(target));
                        }
                        other => prop_assert!(false, "unexpected error {other:?}"),
                    }
                }
            }

            assert_consistent(&graph);
        }
    }

    #[test]
    fn test_order_is_deterministic(decls in proptest::collection::vec(declaration(), 1..30)) {
        let build = || {
            let mut graph = DependencyGraph::new();
            for decl in &decls {
                let sources: Vec<&str> = decl.sources.iter().map(|&i| POOL[i]).collect();
                let _ = graph.add_dependency(POOL[decl.target], sources, "r");
            }
            graph.topological_sort()
        };
        prop_assert_eq!(build(), build());
    }
}
