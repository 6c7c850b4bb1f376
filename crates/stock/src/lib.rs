//! Stock resolution and the stock state facade.
//!
//! The facade runs the scope → stock → record resolution chain once per call
//! and delegates every evaluation to the pure policy engine in
//! `stockwise-policy`. Collaborators are injected behind single-method
//! traits so the numeric rules stay testable without any IO.

pub mod registry;
pub mod resolver;
pub mod state;

pub use registry::{DefaultScope, InMemoryStockRegistry, InMemoryStockResolver};
pub use resolver::{ScopeResolver, StockRegistry, StockResolver};
pub use state::StockState;
