//! # Token Model
//!
//! Plain data that crosses every boundary: store ↔ registry ↔ caller.
//!
//! Design rule: nothing here knows about the dependency graph.
//! This module is pure data — no I/O, no state.

pub mod token;
pub mod value;
pub mod intelligence;
pub mod derivation;

pub use token::Token;
pub use value::TokenValue;
pub use intelligence::TokenIntelligence;
pub use derivation::Derivation;
