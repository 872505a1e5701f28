//! Topological ordering (Kahn's algorithm).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{DependencyGraph, NodeIx};

impl DependencyGraph {
    /// Every name that takes part in an edge, each placed after all of its
    /// dependencies.
    ///
    /// Among names whose dependencies are all emitted, the one the graph
    /// saw first goes next, so the order is stable for a given sequence of
    /// insertions. This is the order a regeneration driver replays rules in.
    pub fn topological_sort(&self) -> Vec<String> {
        self.ordered()
            .into_iter()
            .map(|ix| self.name(ix).to_owned())
            .collect()
    }

    pub(super) fn ordered(&self) -> Vec<NodeIx> {
        let mut indegree: Vec<usize> = self.reverse.iter().map(|sources| sources.len()).collect();
        let mut ready: BinaryHeap<Reverse<NodeIx>> = self
            .linked()
            .filter(|ix| indegree[ix.0] == 0)
            .map(Reverse)
            .collect();

        let mut order = Vec::with_capacity(self.names.len());
        while let Some(Reverse(node)) = ready.pop() {
            order.push(node);
            for &next in &self.forward[node.0] {
                indegree[next.0] -= 1;
                if indegree[next.0] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        debug_assert_eq!(order.len(), self.node_count(), "derivation graph holds a cycle");
        order
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::DependencyGraph;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chain_order() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("mid", ["base"], "r1").unwrap();
        graph.add_dependency("top", ["mid"], "r2").unwrap();

        assert_eq!(graph.topological_sort(), vec!["base", "mid", "top"]);
    }

    #[test]
    fn test_declared_out_of_order() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("top", ["mid"], "r2").unwrap();
        graph.add_dependency("mid", ["base"], "r1").unwrap();

        assert_eq!(graph.topological_sort(), vec!["base", "mid", "top"]);
    }

    #[test]
    fn test_ties_follow_first_seen_order() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("primary-100", ["primary"], "scale:100").unwrap();
        graph.add_dependency("neutral-100", ["neutral"], "scale:100").unwrap();
        graph.add_dependency("primary-900", ["primary"], "scale:900").unwrap();

        assert_eq!(
            graph.topological_sort(),
            vec!["primary", "primary-100", "neutral", "neutral-100", "primary-900"]
        );
    }

    #[test]
    fn test_cleared_orphans_drop_out() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("b", ["a"], "r").unwrap();
        graph.add_dependency("c", ["b"], "r").unwrap();
        graph.clear_dependencies("b");

        assert_eq!(graph.topological_sort(), vec!["b", "c"]);
    }

    #[test]
    fn test_empty_graph() {
        assert!(DependencyGraph::new().topological_sort().is_empty());
    }
}
