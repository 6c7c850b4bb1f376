//! Collaborator traits for the resolution chain.
//!
//! Each trait covers exactly one concern so deployments can swap any link of
//! the chain (per-website default scopes, multi-stock routing, cached
//! registries) without touching the policy engine.

use std::sync::Arc;

use stockwise_core::{ProductId, ScopeId, StockId, StockResult};
use stockwise_policy::StockRecord;

/// Supplies the default sales scope when the caller omits one.
pub trait ScopeResolver: Send + Sync {
    fn default_scope(&self) -> ScopeId;
}

/// Maps a `(product, scope)` pair to the stock its quantity is tracked
/// against. Resolution is deterministic within a single evaluation.
pub trait StockResolver: Send + Sync {
    fn resolve_stock(&self, product_id: ProductId, scope_id: ScopeId) -> StockResult<StockId>;
}

/// Returns the persisted stock record for a `(product, stock)` pair.
///
/// Caching and staleness are the implementation's concern; the policy engine
/// evaluates whatever snapshot it is handed.
pub trait StockRegistry: Send + Sync {
    fn stock_record(&self, product_id: ProductId, stock_id: StockId) -> StockResult<StockRecord>;
}

impl<S> ScopeResolver for Arc<S>
where
    S: ScopeResolver + ?Sized,
{
    fn default_scope(&self) -> ScopeId {
        (**self).default_scope()
    }
}

impl<S> StockResolver for Arc<S>
where
    S: StockResolver + ?Sized,
{
    fn resolve_stock(&self, product_id: ProductId, scope_id: ScopeId) -> StockResult<StockId> {
        (**self).resolve_stock(product_id, scope_id)
    }
}

impl<S> StockRegistry for Arc<S>
where
    S: StockRegistry + ?Sized,
{
    fn stock_record(&self, product_id: ProductId, stock_id: StockId) -> StockResult<StockRecord> {
        (**self).stock_record(product_id, stock_id)
    }
}
