//! In-memory token store.
//!
//! This is the reference implementation of `TokenStore`.
//! Records live in a `Vec` (insertion order) with a name → slot index.
//!
//! ## Limitations
//!
//! - **No removal**: tokens live for the lifetime of the registry, which is
//!   one process invocation.
//! - **No synchronization**: wrap the owning registry in a `SharedRegistry`
//!   for concurrent use.

use hashbrown::HashMap;

use crate::model::Token;
use super::TokenStore;

/// Insertion-ordered in-memory token storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tokens: Vec<Token>,
    /// name → slot in `tokens`
    index: HashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }
}

impl TokenStore for MemoryStore {
    fn insert(&mut self, token: Token) -> Option<Token> {
        match self.index.get(&token.name) {
            Some(&slot) => Some(std::mem::replace(&mut self.tokens[slot], token)),
            None => {
                self.index.insert(token.name.clone(), self.tokens.len());
                self.tokens.push(token);
                None
            }
        }
    }

    fn get(&self, name: &str) -> Option<&Token> {
        self.index.get(name).map(|&slot| &self.tokens[slot])
    }

    fn list(&self) -> Vec<&Token> {
        self.tokens.iter().collect()
    }

    fn size(&self) -> usize {
        self.tokens.len()
    }

    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

impl FromIterator<Token> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        for token in iter {
            store.insert(token);
        }
        store
    }
}
