//! `stockwise-core` — shared foundation for the stock availability engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers and the error model shared by the policy engine
//! and the resolution layer.

pub mod error;
pub mod id;

pub use error::{StockError, StockResult};
pub use id::{ProductId, ScopeId, StockId};
