//! Derivation declaration: how a target token is produced from its sources.

use serde::{Deserialize, Serialize};

/// A declared `sources -> target` relationship with its generation rule.
///
/// `rule` is stored verbatim (e.g. `"scale:500"`, `"multiply:1.5"`) and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    pub target: String,
    pub sources: Vec<String>,
    pub rule: String,
}

impl Derivation {
    pub fn new(
        target: impl Into<String>,
        sources: impl IntoIterator<Item = impl Into<String>>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            sources: sources.into_iter().map(Into::into).collect(),
            rule: rule.into(),
        }
    }
}
