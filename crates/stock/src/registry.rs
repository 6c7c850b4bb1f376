//! In-memory resolution chain for tests and single-node deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use stockwise_core::{ProductId, ScopeId, StockError, StockId, StockResult};
use stockwise_policy::StockRecord;

use crate::resolver::{ScopeResolver, StockRegistry, StockResolver};

/// Fixed default scope, injected at construction.
#[derive(Debug, Copy, Clone)]
pub struct DefaultScope {
    scope_id: ScopeId,
}

impl DefaultScope {
    pub fn new(scope_id: ScopeId) -> Self {
        Self { scope_id }
    }
}

impl ScopeResolver for DefaultScope {
    fn default_scope(&self) -> ScopeId {
        self.scope_id
    }
}

/// In-memory stock routing: per-product assignments with a per-scope
/// fallback stock, supporting multi-stock deployments where most products
/// follow their scope's stock and a few are routed individually.
#[derive(Debug, Default)]
pub struct InMemoryStockResolver {
    assignments: RwLock<HashMap<(ProductId, ScopeId), StockId>>,
    scope_stocks: RwLock<HashMap<ScopeId, StockId>>,
}

impl InMemoryStockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a single product within a scope to a specific stock.
    pub fn assign_product(&self, product_id: ProductId, scope_id: ScopeId, stock_id: StockId) {
        if let Ok(mut map) = self.assignments.write() {
            map.insert((product_id, scope_id), stock_id);
        }
    }

    /// Set the fallback stock for every product sold in a scope.
    pub fn assign_scope(&self, scope_id: ScopeId, stock_id: StockId) {
        if let Ok(mut map) = self.scope_stocks.write() {
            map.insert(scope_id, stock_id);
        }
    }
}

impl StockResolver for InMemoryStockResolver {
    fn resolve_stock(&self, product_id: ProductId, scope_id: ScopeId) -> StockResult<StockId> {
        if let Ok(map) = self.assignments.read() {
            if let Some(stock_id) = map.get(&(product_id, scope_id)) {
                return Ok(*stock_id);
            }
        }
        if let Ok(map) = self.scope_stocks.read() {
            if let Some(stock_id) = map.get(&scope_id) {
                return Ok(*stock_id);
            }
        }
        Err(StockError::resolution(format!(
            "no stock assigned for product {product_id} in scope {scope_id}"
        )))
    }
}

/// In-memory stock record store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStockRegistry {
    inner: RwLock<HashMap<(ProductId, StockId), StockRecord>>,
}

impl InMemoryStockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, record: StockRecord) {
        if let Ok(mut map) = self.inner.write() {
            map.insert((record.product_id, record.stock_id), record);
        }
    }

    pub fn remove(&self, product_id: ProductId, stock_id: StockId) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(&(product_id, stock_id));
        }
    }
}

impl StockRegistry for InMemoryStockRegistry {
    fn stock_record(&self, product_id: ProductId, stock_id: StockId) -> StockResult<StockRecord> {
        self.inner
            .read()
            .ok()
            .and_then(|map| map.get(&(product_id, stock_id)).cloned())
            .ok_or_else(|| StockError::not_found(product_id, stock_id))
    }
}
