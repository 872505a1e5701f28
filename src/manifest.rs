//! Registry manifest — the tokens and derivations one build step loads.
//!
//! Parsing is a thin serde layer; the manifest is assumed to have passed
//! schema validation already.
//!
//! ```json
//! {
//!   "tokens": [
//!     { "name": "primary", "category": "color", "value": "oklch(0.55 0.2 250)" }
//!   ],
//!   "derivations": [
//!     { "target": "primary-500", "sources": ["primary"], "rule": "scale:500" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{Derivation, Token};
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryManifest {
    pub tokens: Vec<Token>,
    pub derivations: Vec<Derivation>,
}

impl RegistryManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_token(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    pub fn with_derivation(mut self, derivation: Derivation) -> Self {
        self.derivations.push(derivation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_from_json() {
        let manifest = RegistryManifest::from_json(
            r#"{
                "tokens": [{ "name": "primary", "category": "color", "value": "blue" }],
                "derivations": [{ "target": "primary-500", "sources": ["primary"], "rule": "scale:500" }]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.tokens.len(), 1);
        assert_eq!(manifest.derivations[0], Derivation::new("primary-500", ["primary"], "scale:500"));
    }

    #[test]
    fn test_sections_optional() {
        let manifest = RegistryManifest::from_json("{}").unwrap();
        assert_eq!(manifest, RegistryManifest::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = RegistryManifest::from_json(r#"{"tokens": 3}"#).unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }
}
