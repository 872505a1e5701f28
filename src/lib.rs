//! # token-registry — Design Token Registry with a Derivation Graph
//!
//! Tracks design tokens (colors, spacing, typography) and the derivation
//! relationships between them, such as a 500-shade derived from a base
//! color by a named rule.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `TokenStore` is the contract between registry and storage
//! 2. **Names are identity**: the graph is keyed by token name alone and may
//!    reference tokens the store has not seen yet
//! 3. **Acyclic, always**: a derivation that would close a cycle is rejected
//!    whole, leaving the graph exactly as it was
//! 4. **Rules are opaque**: generation rules are stored verbatim, never run
//!
//! ## Quick Start
//!
//! ```rust
//! use token_registry::{Token, TokenRegistry};
//!
//! # fn example() -> token_registry::Result<()> {
//! let mut registry = TokenRegistry::new();
//! registry.add(Token::new("primary", "color", "oklch(0.55 0.2 250)"))?;
//!
//! registry.add_dependency("primary-500", ["primary"], "scale:500")?;
//! registry.add_dependency("primary-600", ["primary-500"], "darken:0.1")?;
//!
//! // Recompute derived tokens in this order after `primary` changes.
//! assert_eq!(
//!     registry.graph().topological_sort(),
//!     vec!["primary", "primary-500", "primary-600"],
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Components
//!
//! | Component | Module | Description |
//! |-----------|--------|-------------|
//! | Token Store | `store` | Insertion-ordered records keyed by name |
//! | Dependency Graph | `graph` | Cycle-free derivation edges, ordering, impact |
//! | Registry | (root) | Single entry point composing both |
//! | Shared handle | `shared` | Lock-guarded registry for concurrent callers |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod store;
pub mod graph;
pub mod config;
pub mod manifest;
pub mod shared;
pub mod export;

use std::collections::BTreeSet;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Token, TokenValue, TokenIntelligence, Derivation};
pub use store::{TokenStore, MemoryStore};
pub use graph::DependencyGraph;
pub use config::{RegistryConfig, DuplicatePolicy};
pub use manifest::RegistryManifest;
pub use shared::SharedRegistry;
pub use export::export_dot;

// ============================================================================
// Top-level Registry handle
// ============================================================================

/// The primary entry point. A `TokenRegistry` composes a token store and a
/// dependency graph.
///
/// The two halves are not reconciled: derivations may name tokens the store
/// does not hold, and stored tokens need not appear in any derivation.
#[derive(Debug, Clone)]
pub struct TokenRegistry<S: TokenStore = MemoryStore> {
    store: S,
    graph: DependencyGraph,
    config: RegistryConfig,
}

impl TokenRegistry<MemoryStore> {
    /// Empty in-memory registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_store(MemoryStore::new(), config)
    }
}

impl Default for TokenRegistry<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TokenStore> TokenRegistry<S> {
    /// Create a registry over the given store.
    pub fn with_store(store: S, config: RegistryConfig) -> Self {
        Self { store, graph: DependencyGraph::new(), config }
    }

    // ========================================================================
    // Tokens (store)
    // ========================================================================

    /// Store a token, honoring the configured [`DuplicatePolicy`].
    ///
    /// With the default `Replace` policy this never fails.
    pub fn add(&mut self, token: Token) -> Result<()> {
        if self.config.duplicate_policy == DuplicatePolicy::Reject && self.store.contains(&token.name) {
            tracing::warn!(token = %token.name, "rejected duplicate token");
            return Err(Error::DuplicateToken(token.name));
        }
        let name = token.name.clone();
        if self.store.insert(token).is_some() {
            tracing::debug!(token = %name, "replaced token");
        } else {
            tracing::debug!(token = %name, "added token");
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Token> {
        self.store.get(name)
    }

    /// All tokens in insertion order.
    pub fn list(&self) -> Vec<&Token> {
        self.store.list()
    }

    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn by_category(&self, category: &str) -> Vec<&Token> {
        self.store.by_category(category)
    }

    // ========================================================================
    // Derivations (graph)
    // ========================================================================

    /// Declare that `target` derives from `sources` via `rule`.
    /// See [`DependencyGraph::add_dependency`].
    pub fn add_dependency<I, T>(&mut self, target: &str, sources: I, rule: impl Into<String>) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.graph.add_dependency(target, sources, rule)
    }

    pub fn get_dependents(&self, name: &str) -> BTreeSet<String> {
        self.graph.get_dependents(name)
    }

    pub fn get_dependencies(&self, name: &str) -> BTreeSet<String> {
        self.graph.get_dependencies(name)
    }

    pub fn get_generation_rule(&self, name: &str) -> Option<&str> {
        self.graph.get_generation_rule(name)
    }

    /// Forget the derivation of `target`. Returns the number of edges removed.
    pub fn clear_dependencies(&mut self, target: &str) -> usize {
        self.graph.clear_dependencies(target)
    }

    /// Derived tokens to recompute after `changed` changes, in rule order.
    pub fn regeneration_order(&self, changed: &str) -> Vec<String> {
        self.graph.regeneration_order(changed)
    }

    /// The dependency graph, for ordering and impact queries.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    // ========================================================================
    // Bulk loading
    // ========================================================================

    /// Load a manifest: every token first, then each derivation in order.
    ///
    /// Stops at the first failing derivation. Derivations applied before it
    /// stay applied; the failing one leaves nothing behind.
    pub fn apply_manifest(&mut self, manifest: RegistryManifest) -> Result<()> {
        let RegistryManifest { tokens, derivations } = manifest;
        let (token_count, derivation_count) = (tokens.len(), derivations.len());

        for token in tokens {
            self.add(token)?;
        }
        for derivation in derivations {
            if self.config.strict_manifest {
                self.ensure_stored(&derivation)?;
            }
            let Derivation { target, sources, rule } = derivation;
            self.graph.add_dependency(&target, sources, rule)?;
        }

        tracing::debug!(tokens = token_count, derivations = derivation_count, "applied manifest");
        Ok(())
    }

    fn ensure_stored(&self, derivation: &Derivation) -> Result<()> {
        let endpoints = std::iter::once(&derivation.target).chain(&derivation.sources);
        for name in endpoints {
            if !self.store.contains(name) {
                return Err(Error::UnknownToken {
                    target: derivation.target.clone(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Derivation of '{target}' declares no source tokens")]
    EmptySources { target: String },

    #[error("Token '{target}' cannot derive from itself")]
    SelfDependency { target: String },

    /// `path` runs `dependency -> target -> ... -> dependency`.
    #[error("Circular dependency: {}", .path.join(" -> "))]
    CircularDependency {
        target: String,
        dependency: String,
        path: Vec<String>,
    },

    #[error("Duplicate token: {0}")]
    DuplicateToken(String),

    #[error("Derivation of '{target}' references unknown token '{name}'")]
    UnknownToken { target: String, name: String },

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
