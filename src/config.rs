//! Registry configuration.

use serde::{Deserialize, Serialize};

/// What `TokenRegistry::add` does with a name that is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Overwrite the stored record in place (the store's native behavior).
    #[default]
    Replace,
    /// Fail with `Error::DuplicateToken` and keep the stored record.
    Reject,
}

/// Behavior switches for a `TokenRegistry`.
///
/// All fields default to the permissive setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// When applying a manifest, require every derivation endpoint to be a
    /// stored token. Off by default: the graph may name tokens that are
    /// materialized later.
    pub strict_manifest: bool,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_strict_manifest(mut self, strict: bool) -> Self {
        self.strict_manifest = strict;
        self
    }
}
