//! # Dependency Graph
//!
//! Directed acyclic graph over token names. An edge `source -> target`
//! means `target` is derived from `source`; every target remembers the
//! generation rule of its most recent derivation.
//!
//! Names are interned into dense indices the first time an accepted
//! derivation mentions them. That first-seen order is the tie-breaker
//! for topological ordering, so a given sequence of insertions always
//! yields the same order.
//!
//! ## Invariants
//!
//! - `forward` and `reverse` always describe the same edge set.
//! - The edge set is acyclic. A declaration that would close a cycle is
//!   rejected before anything (including name interning) is touched.

mod cycle;
mod impact;
mod order;

use std::collections::BTreeSet;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{Error, Result};

/// Dense index of an interned token name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeIx(pub(crate) usize);

type Adjacency = SmallVec<[NodeIx; 4]>;

/// The derivation graph between token names.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    names: Vec<String>,
    index: HashMap<String, NodeIx>,
    /// source → targets derived from it
    forward: Vec<Adjacency>,
    /// target → sources it derives from
    reverse: Vec<Adjacency>,
    /// target → rule of its latest derivation
    generation_rules: Vec<Option<String>>,
    edge_count: usize,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Declare that `target` is derived from every name in `sources` via `rule`.
    ///
    /// All-or-nothing: either every `source -> target` edge is committed and
    /// `rule` becomes the target's generation rule, or the call fails and the
    /// graph is untouched. Repeated source names collapse into one edge, and
    /// edges that already exist are left as they are.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySources`] if `sources` is empty.
    /// - [`Error::SelfDependency`] if `target` is one of its own sources.
    /// - [`Error::CircularDependency`] if `target` already reaches a source.
    pub fn add_dependency<I, S>(&mut self, target: &str, sources: I, rule: impl Into<String>) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut declared: Vec<String> = Vec::new();
        for source in sources {
            let source = source.into();
            if !declared.contains(&source) {
                declared.push(source);
            }
        }

        if declared.is_empty() {
            tracing::warn!(token = %target, "rejected derivation with no sources");
            return Err(Error::EmptySources { target: target.to_owned() });
        }
        if declared.iter().any(|s| s == target) {
            tracing::warn!(token = %target, "rejected self-derivation");
            return Err(Error::SelfDependency { target: target.to_owned() });
        }
        if let Some(path) = self.find_cycle(target, &declared) {
            tracing::warn!(token = %target, cycle = %path.join(" -> "), "rejected circular derivation");
            return Err(Error::CircularDependency {
                target: target.to_owned(),
                dependency: path[0].clone(),
                path,
            });
        }

        // Sources are interned ahead of the target so first-seen order
        // follows the direction of derivation.
        let sources: Vec<NodeIx> = declared.iter().map(|s| self.intern(s)).collect();
        let t = self.intern(target);
        let mut added = 0;
        for s in sources {
            if self.link(s, t) {
                added += 1;
            }
        }
        self.generation_rules[t.0] = Some(rule.into());

        tracing::debug!(
            token = %target,
            sources = declared.len(),
            new_edges = added,
            "committed derivation"
        );
        Ok(())
    }

    /// Drop every incoming edge of `target` and forget its generation rule,
    /// so the derivation can be redeclared from scratch.
    ///
    /// Returns the number of edges removed (0 if `target` is unknown).
    pub fn clear_dependencies(&mut self, target: &str) -> usize {
        let Some(&t) = self.index.get(target) else { return 0 };

        let sources = std::mem::take(&mut self.reverse[t.0]);
        for &s in &sources {
            self.forward[s.0].retain(|n| *n != t);
        }
        self.generation_rules[t.0] = None;
        self.edge_count -= sources.len();

        tracing::debug!(token = %target, removed = sources.len(), "cleared derivation");
        sources.len()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Tokens derived directly from `name`. Empty if none or unknown.
    pub fn get_dependents(&self, name: &str) -> BTreeSet<String> {
        self.neighbours(name, &self.forward)
    }

    /// Tokens `name` is derived from directly. Empty if none or unknown.
    pub fn get_dependencies(&self, name: &str) -> BTreeSet<String> {
        self.neighbours(name, &self.reverse)
    }

    /// Rule of the latest derivation of `name`, or None if it was never a target
    /// (or its derivation has been cleared).
    pub fn get_generation_rule(&self, name: &str) -> Option<&str> {
        let &ix = self.index.get(name)?;
        self.generation_rules[ix.0].as_deref()
    }

    /// Whether `name` takes part in at least one edge.
    pub fn contains(&self, name: &str) -> bool {
        self.index.get(name).is_some_and(|&ix| self.is_linked(ix))
    }

    /// Number of names taking part in at least one edge.
    pub fn node_count(&self) -> usize {
        self.linked().count()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Every `(source, target)` edge, grouped by source in first-seen order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.forward.iter().enumerate().flat_map(move |(s, targets)| {
            targets
                .iter()
                .map(move |t| (self.names[s].as_str(), self.names[t.0].as_str()))
        })
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn intern(&mut self, name: &str) -> NodeIx {
        if let Some(&ix) = self.index.get(name) {
            return ix;
        }
        let ix = NodeIx(self.names.len());
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), ix);
        self.forward.push(Adjacency::new());
        self.reverse.push(Adjacency::new());
        self.generation_rules.push(None);
        ix
    }

    /// Add `source -> target` to both adjacency views. False if already present.
    fn link(&mut self, source: NodeIx, target: NodeIx) -> bool {
        if self.forward[source.0].contains(&target) {
            return false;
        }
        self.forward[source.0].push(target);
        self.reverse[target.0].push(source);
        self.edge_count += 1;
        true
    }

    fn neighbours(&self, name: &str, adjacency: &[Adjacency]) -> BTreeSet<String> {
        match self.index.get(name) {
            Some(&ix) => adjacency[ix.0].iter().map(|n| self.names[n.0].clone()).collect(),
            None => BTreeSet::new(),
        }
    }

    fn is_linked(&self, ix: NodeIx) -> bool {
        !self.forward[ix.0].is_empty() || !self.reverse[ix.0].is_empty()
    }

    fn linked(&self) -> impl Iterator<Item = NodeIx> + '_ {
        (0..self.names.len()).map(NodeIx).filter(move |&ix| self.is_linked(ix))
    }

    fn name(&self, ix: NodeIx) -> &str {
        &self.names[ix.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_dependency_links_both_views() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("primary-500", ["primary"], "scale:500").unwrap();

        assert_eq!(graph.get_dependents("primary"), set(&["primary-500"]));
        assert_eq!(graph.get_dependencies("primary-500"), set(&["primary"]));
        assert_eq!(graph.get_generation_rule("primary-500"), Some("scale:500"));
        assert_eq!(graph.get_generation_rule("primary"), None);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_unknown_names_are_empty() {
        let graph = DependencyGraph::new();
        assert!(graph.get_dependents("nope").is_empty());
        assert!(graph.get_dependencies("nope").is_empty());
        assert!(graph.get_generation_rule("nope").is_none());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_empty_sources_rejected() {
        let mut graph = DependencyGraph::new();
        let err = graph.add_dependency("x", Vec::<String>::new(), "rule").unwrap_err();
        assert!(matches!(err, Error::EmptySources { .. }));
        assert!(graph.is_empty());
        assert!(graph.get_generation_rule("x").is_none());
    }

    #[test]
    fn test_self_dependency_rejected() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("x", ["base"], "r").unwrap();

        let err = graph.add_dependency("x", ["other", "x"], "rule").unwrap_err();
        assert!(matches!(err, Error::SelfDependency { .. }));
        assert_eq!(graph.get_dependencies("x"), set(&["base"]));
        assert_eq!(graph.get_generation_rule("x"), Some("r"));
        assert!(!graph.contains("other"));
    }

    #[test]
    fn test_duplicate_sources_collapse() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("mix", ["a", "b", "a"], "blend").unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.get_dependencies("mix"), set(&["a", "b"]));
    }

    #[test]
    fn test_rule_last_write_wins() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("derived", ["base"], "scale:500").unwrap();
        graph.add_dependency("derived", ["base"], "scale:600").unwrap();

        assert_eq!(graph.get_generation_rule("derived"), Some("scale:600"));
        assert_eq!(graph.get_dependencies("derived"), set(&["base"]));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_redeclaration_accumulates_sources() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("derived", ["a"], "r1").unwrap();
        graph.add_dependency("derived", ["b"], "r2").unwrap();

        assert_eq!(graph.get_dependencies("derived"), set(&["a", "b"]));
        assert_eq!(graph.get_generation_rule("derived"), Some("r2"));
    }

    #[test]
    fn test_clear_dependencies() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("mix", ["a", "b"], "blend").unwrap();
        graph.add_dependency("mix-dark", ["mix"], "darken:0.2").unwrap();

        assert_eq!(graph.clear_dependencies("mix"), 2);
        assert!(graph.get_dependencies("mix").is_empty());
        assert!(graph.get_dependents("a").is_empty());
        assert!(graph.get_generation_rule("mix").is_none());
        assert!(!graph.contains("a"));
        assert!(graph.contains("mix"), "still feeds mix-dark");
        assert_eq!(graph.edge_count(), 1);

        assert_eq!(graph.clear_dependencies("unknown"), 0);
    }

    #[test]
    fn test_edges_grouped_by_source() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("b", ["a"], "r").unwrap();
        graph.add_dependency("c", ["a", "b"], "r").unwrap();

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    }
}
