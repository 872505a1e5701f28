//! Shared registry handle for concurrent callers.
//!
//! The registry's maps are not built for concurrent mutation, so the whole
//! registry sits behind one `RwLock`. Every mutation runs inside a single
//! write critical section, which keeps `add_dependency` all-or-nothing for
//! any observer.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::Token;
use crate::store::{MemoryStore, TokenStore};
use crate::{RegistryManifest, Result, TokenRegistry};

/// Cloneable, thread-safe handle to one `TokenRegistry`.
///
/// Reads return owned data so no lock guard escapes.
pub struct SharedRegistry<S: TokenStore = MemoryStore> {
    inner: Arc<RwLock<TokenRegistry<S>>>,
}

impl<S: TokenStore> Clone for SharedRegistry<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl SharedRegistry<MemoryStore> {
    pub fn new() -> Self {
        Self::from_registry(TokenRegistry::new())
    }
}

impl Default for SharedRegistry<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TokenStore> SharedRegistry<S> {
    pub fn from_registry(registry: TokenRegistry<S>) -> Self {
        Self { inner: Arc::new(RwLock::new(registry)) }
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    pub fn add(&self, token: Token) -> Result<()> {
        self.inner.write().add(token)
    }

    pub fn get(&self, name: &str) -> Option<Token> {
        self.inner.read().get(name).cloned()
    }

    pub fn list(&self) -> Vec<Token> {
        self.inner.read().list().into_iter().cloned().collect()
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    // ========================================================================
    // Derivations
    // ========================================================================

    pub fn add_dependency<I, T>(&self, target: &str, sources: I, rule: impl Into<String>) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.inner.write().add_dependency(target, sources, rule)
    }

    pub fn get_dependents(&self, name: &str) -> BTreeSet<String> {
        self.inner.read().get_dependents(name)
    }

    pub fn get_dependencies(&self, name: &str) -> BTreeSet<String> {
        self.inner.read().get_dependencies(name)
    }

    pub fn get_generation_rule(&self, name: &str) -> Option<String> {
        self.inner.read().get_generation_rule(name).map(str::to_owned)
    }

    pub fn topological_sort(&self) -> Vec<String> {
        self.inner.read().graph().topological_sort()
    }

    pub fn regeneration_order(&self, changed: &str) -> Vec<String> {
        self.inner.read().regeneration_order(changed)
    }

    pub fn apply_manifest(&self, manifest: RegistryManifest) -> Result<()> {
        self.inner.write().apply_manifest(manifest)
    }

    // ========================================================================
    // Escape hatches
    // ========================================================================

    /// Run `f` under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&TokenRegistry<S>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` under the write lock. Everything `f` does is one critical section.
    pub fn write<R>(&self, f: impl FnOnce(&mut TokenRegistry<S>) -> R) -> R {
        f(&mut self.inner.write())
    }
}
