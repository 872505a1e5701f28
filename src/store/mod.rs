//! # Token Store Trait
//!
//! The contract between the registry and whatever holds token records.
//! A store knows nothing about derivations; it is a keyed record holder.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | Insertion-ordered in-memory map |
//!
//! Stores are not synchronized. Sharing across threads goes through
//! [`SharedRegistry`](crate::SharedRegistry), which guards the whole registry.

pub mod memory;

use crate::model::Token;

pub use memory::MemoryStore;

/// Authoritative key-value holder for token records.
pub trait TokenStore: Send + Sync + 'static {
    /// Add or replace the record for `token.name`. Returns the replaced record.
    fn insert(&mut self, token: Token) -> Option<Token>;

    /// Get a token by name. Returns None if not present.
    fn get(&self, name: &str) -> Option<&Token>;

    /// All tokens in insertion order. A replaced token keeps its original slot.
    fn list(&self) -> Vec<&Token>;

    /// Number of distinct tokens held.
    fn size(&self) -> usize;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Tokens whose category equals `category`, in insertion order.
    fn by_category(&self, category: &str) -> Vec<&Token> {
        self.list().into_iter().filter(|t| t.in_category(category)).collect()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
