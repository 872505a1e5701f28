//! Cycle detection for pending derivations.
//!
//! Every edge of a declaration points into the same target, so a simple
//! cycle can use at most one of them. Checking each source against the
//! committed graph alone is therefore sufficient: the declaration closes a
//! cycle iff the target already reaches one of its sources.

use super::{DependencyGraph, NodeIx};

impl DependencyGraph {
    /// The cycle `source -> target -> ... -> source` that declaring
    /// `sources -> target` would create, or None if the declaration is safe.
    pub(super) fn find_cycle(&self, target: &str, sources: &[String]) -> Option<Vec<String>> {
        // A target the graph has never seen cannot reach anything.
        let &start = self.index.get(target)?;

        for source in sources {
            let Some(&goal) = self.index.get(source.as_str()) else { continue };
            if let Some(route) = self.path_between(start, goal) {
                let mut path = Vec::with_capacity(route.len() + 1);
                path.push(source.clone());
                path.extend(route.into_iter().map(|ix| self.name(ix).to_owned()));
                return Some(path);
            }
        }
        None
    }

    /// Forward path from `from` to `to`, both inclusive. Iterative DFS.
    fn path_between(&self, from: NodeIx, to: NodeIx) -> Option<Vec<NodeIx>> {
        let mut parent: Vec<Option<NodeIx>> = vec![None; self.names.len()];
        let mut visited = vec![false; self.names.len()];
        let mut stack = vec![from];
        visited[from.0] = true;

        while let Some(node) = stack.pop() {
            if node == to {
                let mut route = vec![to];
                let mut cursor = to;
                while let Some(prev) = parent[cursor.0] {
                    route.push(prev);
                    cursor = prev;
                }
                route.reverse();
                return Some(route);
            }
            // Reverse push keeps exploration in adjacency order.
            for &next in self.forward[node.0].iter().rev() {
                if !visited[next.0] {
                    visited[next.0] = true;
                    parent[next.0] = Some(node);
                    stack.push(next);
                }
            }
        }
        None
    }
}
