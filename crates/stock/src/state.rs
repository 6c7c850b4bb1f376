//! Stock state facade.
//!
//! One resolution chain per call, then pure delegation to the policy engine.
//! Concurrent calls share nothing mutable here; any caching lives behind the
//! injected [`StockRegistry`].

use rust_decimal::Decimal;

use stockwise_core::{ProductId, ScopeId, StockResult};
use stockwise_policy::{QtyCheck, StockRecord};

use crate::resolver::{ScopeResolver, StockRegistry, StockResolver};

/// Facade over the scope → stock → record resolution chain.
///
/// Resolution failures propagate unchanged; resolution is deterministic so
/// nothing is retried.
#[derive(Debug)]
pub struct StockState<C, R, G> {
    scopes: C,
    stocks: R,
    registry: G,
}

impl<C, R, G> StockState<C, R, G>
where
    C: ScopeResolver,
    R: StockResolver,
    G: StockRegistry,
{
    pub fn new(scopes: C, stocks: R, registry: G) -> Self {
        Self {
            scopes,
            stocks,
            registry,
        }
    }

    fn resolve(&self, product_id: ProductId, scope: Option<ScopeId>) -> StockResult<StockRecord> {
        let scope_id = match scope {
            Some(scope_id) => scope_id,
            None => self.scopes.default_scope(),
        };
        let stock_id = self.stocks.resolve_stock(product_id, scope_id)?;
        tracing::debug!(%product_id, %scope_id, %stock_id, "resolved stock for evaluation");
        self.registry.stock_record(product_id, stock_id)
    }

    /// Whether the product is currently purchasable.
    pub fn verify_stock(
        &self,
        product_id: ProductId,
        scope: Option<ScopeId>,
    ) -> StockResult<bool> {
        Ok(self.resolve(product_id, scope)?.verify_stock())
    }

    /// Whether quantity is at or below the low-stock notify threshold.
    pub fn verify_notification(
        &self,
        product_id: ProductId,
        scope: Option<ScopeId>,
    ) -> StockResult<bool> {
        Ok(self.resolve(product_id, scope)?.verify_notification())
    }

    /// Whether `qty` is a legal order quantity given current state.
    pub fn check_qty(
        &self,
        product_id: ProductId,
        qty: Decimal,
        scope: Option<ScopeId>,
    ) -> StockResult<bool> {
        Ok(self.resolve(product_id, scope)?.check_qty(qty).passed())
    }

    /// Nearest legal quantity satisfying increment and sale-bound rules, or
    /// `qty` unchanged when no adjustment is determinable.
    pub fn suggest_qty(
        &self,
        product_id: ProductId,
        qty: Decimal,
        scope: Option<ScopeId>,
    ) -> StockResult<Decimal> {
        Ok(self.resolve(product_id, scope)?.suggest_qty(qty))
    }

    /// Current quantity for the resolved record.
    pub fn stock_qty(
        &self,
        product_id: ProductId,
        scope: Option<ScopeId>,
    ) -> StockResult<Decimal> {
        Ok(self.resolve(product_id, scope)?.stock_qty())
    }

    /// Increment-rule check with a rounded-up suggestion on failure.
    pub fn check_qty_increments(
        &self,
        product_id: ProductId,
        qty: Decimal,
        scope: Option<ScopeId>,
    ) -> StockResult<QtyCheck> {
        Ok(self.resolve(product_id, scope)?.check_qty_increments(qty))
    }

    /// Validate a quantity change within an existing order line.
    pub fn check_quote_item_qty(
        &self,
        product_id: ProductId,
        item_qty: Decimal,
        qty_to_check: Decimal,
        orig_qty: Decimal,
        scope: Option<ScopeId>,
    ) -> StockResult<QtyCheck> {
        Ok(self
            .resolve(product_id, scope)?
            .check_quote_item_qty(item_qty, qty_to_check, orig_qty))
    }
}
