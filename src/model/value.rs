//! Opaque token payload.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The value carried by a token.
///
/// The registry never interprets a value; it only stores and returns it.
/// Serialized untagged so token files can carry plain JSON literals, and a
/// value written back out matches what was read in:
/// - Scalars: Null, Bool, Integer, Number, Text
/// - Structured: List, Map (keys keep their original order)
///
/// `Integer` is listed ahead of `Number` so whole JSON numbers stay exact
/// instead of widening to `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<TokenValue>),
    Map(IndexMap<String, TokenValue>),
}

// ============================================================================
// Type checking
// ============================================================================

impl TokenValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            TokenValue::Null => "null",
            TokenValue::Bool(_) => "bool",
            TokenValue::Integer(_) => "integer",
            TokenValue::Number(_) => "number",
            TokenValue::Text(_) => "text",
            TokenValue::List(_) => "list",
            TokenValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, TokenValue::Null) }
    pub fn is_structured(&self) -> bool { matches!(self, TokenValue::List(_) | TokenValue::Map(_)) }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TokenValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of either number variant.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            TokenValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Look up a field of a `Map` value (e.g. `"l"` of an OKLCH color).
    pub fn field(&self, key: &str) -> Option<&TokenValue> {
        match self {
            TokenValue::Map(m) => m.get(key),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for TokenValue { fn from(v: bool) -> Self { TokenValue::Bool(v) } }
impl From<i32> for TokenValue { fn from(v: i32) -> Self { TokenValue::Integer(v as i64) } }
impl From<i64> for TokenValue { fn from(v: i64) -> Self { TokenValue::Integer(v) } }
impl From<f64> for TokenValue { fn from(v: f64) -> Self { TokenValue::Number(v) } }
impl From<String> for TokenValue { fn from(v: String) -> Self { TokenValue::Text(v) } }
impl From<&str> for TokenValue { fn from(v: &str) -> Self { TokenValue::Text(v.to_owned()) } }
impl<T: Into<TokenValue>> From<Vec<T>> for TokenValue {
    fn from(v: Vec<T>) -> Self { TokenValue::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<TokenValue>> From<Option<T>> for TokenValue {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(TokenValue::Null) }
}
impl<K: Into<String>, V: Into<TokenValue>> FromIterator<(K, V)> for TokenValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        TokenValue::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Null => write!(f, "null"),
            TokenValue::Bool(b) => write!(f, "{b}"),
            TokenValue::Integer(i) => write!(f, "{i}"),
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Text(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            TokenValue::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            TokenValue::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
