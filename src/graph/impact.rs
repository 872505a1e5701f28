//! Change impact: what has to be recomputed when a token changes.

use std::collections::{BTreeSet, VecDeque};

use super::{Adjacency, DependencyGraph, NodeIx};

impl DependencyGraph {
    /// Everything derived from `name`, directly or through other derived tokens.
    pub fn transitive_dependents(&self, name: &str) -> BTreeSet<String> {
        self.names_of(self.reachable(name, &self.forward))
    }

    /// Everything `name` is derived from, directly or indirectly.
    pub fn transitive_dependencies(&self, name: &str) -> BTreeSet<String> {
        self.names_of(self.reachable(name, &self.reverse))
    }

    /// Tokens that must be regenerated after `changed` changes, in the order
    /// their rules have to run. `changed` itself is not included.
    pub fn regeneration_order(&self, changed: &str) -> Vec<String> {
        let affected = self.reachable(changed, &self.forward);
        if affected.iter().all(|hit| !hit) {
            return Vec::new();
        }
        self.ordered()
            .into_iter()
            .filter(|ix| affected[ix.0])
            .map(|ix| self.name(ix).to_owned())
            .collect()
    }

    /// Names with no dependencies of their own: the base tokens.
    pub fn roots(&self) -> Vec<String> {
        self.linked()
            .filter(|ix| self.reverse[ix.0].is_empty())
            .map(|ix| self.name(ix).to_owned())
            .collect()
    }

    /// Breadth-first reachability mask from `name`, excluding `name` itself.
    fn reachable(&self, name: &str, adjacency: &[Adjacency]) -> Vec<bool> {
        let mut seen = vec![false; self.names.len()];
        let Some(&start) = self.index.get(name) else { return seen };

        let mut queue: VecDeque<NodeIx> = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &next in &adjacency[node.0] {
                if !seen[next.0] {
                    seen[next.0] = true;
                    queue.push_back(next);
                }
            }
        }
        // Acyclic: the start can only be marked through a cycle.
        seen[start.0] = false;
        seen
    }

    fn names_of(&self, mask: Vec<bool>) -> BTreeSet<String> {
        mask.into_iter()
            .enumerate()
            .filter(|(_, hit)| *hit)
            .map(|(i, _)| self.names[i].clone())
            .collect()
    }
}
