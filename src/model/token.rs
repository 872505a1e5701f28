//! Token record held by the store.

use serde::{Deserialize, Serialize};
use super::{TokenIntelligence, TokenValue};

/// A named design value.
///
/// `name` is the identity: case-sensitive, no implied namespacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub category: String,
    pub value: TokenValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<TokenIntelligence>,
}

impl Token {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            value: value.into(),
            intelligence: None,
        }
    }

    pub fn with_intelligence(mut self, intelligence: TokenIntelligence) -> Self {
        self.intelligence = Some(intelligence);
        self
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
