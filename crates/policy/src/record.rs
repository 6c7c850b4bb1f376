use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockwise_core::{ProductId, StockId};

/// Inventory state for one product within one stock.
///
/// A record is fetched fresh for each top-level operation and treated as a
/// read-only snapshot for the duration of one evaluation. Quantity is only
/// ever moved by the external ledger; the policy engine evaluates whatever
/// snapshot it is handed, stale or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub product_id: ProductId,
    pub stock_id: StockId,
    /// Current available quantity. May be negative when backorders are on.
    pub quantity: Decimal,
    /// Explicit stock status flag, authoritative over raw-quantity checks.
    pub is_in_stock: bool,
    /// When false, quantity-based rules do not apply at all.
    pub manage_stock: bool,
    /// Quantity floor below which the item counts as out of stock
    /// (no-backorder deployments).
    pub min_qty: Decimal,
    /// Whether orders may drive quantity below `min_qty`.
    pub backorders: bool,
    /// At or below this quantity a low-stock notification fires,
    /// independent of purchasability.
    pub notify_stock_qty: Decimal,
    /// Lower bound for a single order line; disabled when non-positive.
    pub min_sale_qty: Decimal,
    /// Upper bound for a single order line; disabled when non-positive.
    pub max_sale_qty: Decimal,
    /// Required step size for ordered quantities.
    pub qty_increments: Decimal,
    /// Gate for the increment rule.
    pub enable_qty_increments: bool,
}

impl StockRecord {
    /// Create a record with ledger defaults: managed, out of stock, zero
    /// quantity, single-unit minimum sale, no upper bound, increments off.
    pub fn new(product_id: ProductId, stock_id: StockId) -> Self {
        Self {
            product_id,
            stock_id,
            quantity: Decimal::ZERO,
            is_in_stock: false,
            manage_stock: true,
            min_qty: Decimal::ZERO,
            backorders: false,
            notify_stock_qty: Decimal::ONE,
            min_sale_qty: Decimal::ONE,
            max_sale_qty: Decimal::ZERO,
            qty_increments: Decimal::ZERO,
            enable_qty_increments: false,
        }
    }

    /// Minimum sale bound, if enabled (strictly positive).
    pub fn min_sale_bound(&self) -> Option<Decimal> {
        (self.min_sale_qty > Decimal::ZERO).then_some(self.min_sale_qty)
    }

    /// Maximum sale bound, if enabled (strictly positive).
    pub fn max_sale_bound(&self) -> Option<Decimal> {
        (self.max_sale_qty > Decimal::ZERO).then_some(self.max_sale_qty)
    }

    /// Increment step, if the rule is enabled and the step is usable.
    pub fn increment_step(&self) -> Option<Decimal> {
        (self.enable_qty_increments && self.qty_increments > Decimal::ZERO)
            .then_some(self.qty_increments)
    }

    /// Both sale bounds enabled with `min > max`: a configuration violation.
    /// No quantity can satisfy the bounds, so every check fails
    /// deterministically instead of guessing leniently.
    pub fn has_inverted_sale_bounds(&self) -> bool {
        matches!(
            (self.min_sale_bound(), self.max_sale_bound()),
            (Some(min), Some(max)) if min > max
        )
    }
}
