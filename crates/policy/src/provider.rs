//! Policy evaluations over a [`StockRecord`] snapshot.
//!
//! Evaluation order inside the composite checks is fixed: sale bounds, then
//! stock sufficiency, then the increment rule last (it carries the most
//! specific diagnostic and a suggestion). The order never changes the
//! boolean result, only which failure reason the caller gets to render.

use rust_decimal::Decimal;

use crate::outcome::{QtyCheck, QtyFailure};
use crate::record::StockRecord;

impl StockRecord {
    /// Whether the product is currently purchasable.
    ///
    /// Unmanaged items are always purchasable. For managed items the
    /// explicit `is_in_stock` flag is authoritative; recomputing it from raw
    /// quantity is the ledger's job when quantity changes, not this engine's.
    pub fn verify_stock(&self) -> bool {
        if !self.manage_stock {
            return true;
        }
        self.is_in_stock
    }

    /// Whether quantity has reached the low-stock notification threshold.
    ///
    /// Independent of `is_in_stock`: an item can be purchasable and still
    /// warrant a low-stock notice.
    pub fn verify_notification(&self) -> bool {
        self.quantity <= self.notify_stock_qty
    }

    /// Current quantity for this record.
    ///
    /// For composite/bundle products the registry hands us a pre-aggregated
    /// record (minimum availability across components, computed upstream);
    /// the engine never recomputes that aggregation.
    pub fn stock_qty(&self) -> Decimal {
        self.quantity
    }

    /// Validate `qty` as a legal order quantity given current state.
    ///
    /// The individual rules are independent; any single failure fails the
    /// whole check.
    pub fn check_qty(&self, qty: Decimal) -> QtyCheck {
        if self.has_inverted_sale_bounds() {
            return QtyCheck::fail(
                QtyFailure::InvalidBounds,
                format!(
                    "no quantity can satisfy the configured sale bounds \
                     (minimum {} exceeds maximum {})",
                    self.min_sale_qty, self.max_sale_qty
                ),
                None,
            );
        }
        if let Some(min) = self.min_sale_bound() {
            if qty < min {
                return QtyCheck::fail(
                    QtyFailure::BelowMinimum,
                    format!("the fewest you may purchase is {min}"),
                    Some(min),
                );
            }
        }
        if let Some(max) = self.max_sale_bound() {
            if qty > max {
                return QtyCheck::fail(
                    QtyFailure::AboveMaximum,
                    format!("the most you may purchase is {max}"),
                    Some(max),
                );
            }
        }
        if self.manage_stock && !self.backorders && self.quantity - qty < self.min_qty {
            return QtyCheck::fail(
                QtyFailure::InsufficientStock,
                "the requested quantity is not available",
                None,
            );
        }
        self.check_qty_increments(qty)
    }

    /// Best-effort nearest legal quantity; returns `qty` unchanged when no
    /// adjustment is determinable. Never fails.
    ///
    /// Fixed adjustment order: clamp into the enabled sale bounds, round up
    /// to the next increment multiple, then re-clamp down to the largest
    /// multiple under the maximum if rounding overshot. When no in-range
    /// multiple exists the original quantity comes back untouched.
    pub fn suggest_qty(&self, qty: Decimal) -> Decimal {
        if qty <= Decimal::ZERO || self.has_inverted_sale_bounds() {
            return qty;
        }

        let mut suggested = qty;
        if let Some(min) = self.min_sale_bound() {
            if suggested < min {
                suggested = min;
            }
        }
        if let Some(max) = self.max_sale_bound() {
            if suggested > max {
                suggested = max;
            }
        }

        if let Some(step) = self.increment_step() {
            let remainder = suggested % step;
            if !remainder.is_zero() {
                let rounded_up = suggested - remainder + step;
                suggested = match self.max_sale_bound() {
                    Some(max) if rounded_up > max => {
                        // Rounding overshot; the largest multiple not above
                        // the maximum is the only remaining candidate.
                        let rounded_down = max - (max % step);
                        let above_min = self
                            .min_sale_bound()
                            .is_none_or(|min| rounded_down >= min);
                        if rounded_down > Decimal::ZERO && above_min {
                            rounded_down
                        } else {
                            return qty;
                        }
                    }
                    _ => rounded_up,
                };
            }
        }

        suggested
    }

    /// Check `qty` against the increment rule alone.
    ///
    /// Failures carry a suggestion rounded **up** to the next multiple:
    /// rounding down could suggest zero for a positive quantity smaller than
    /// one increment.
    pub fn check_qty_increments(&self, qty: Decimal) -> QtyCheck {
        let Some(step) = self.increment_step() else {
            return QtyCheck::pass();
        };
        let remainder = qty % step;
        if remainder.is_zero() {
            return QtyCheck::pass();
        }
        let suggested = qty - remainder + step;
        QtyCheck::fail(
            QtyFailure::NotAMultiple,
            format!("quantity must be ordered in multiples of {step}"),
            Some(suggested),
        )
    }

    /// Validate a quantity change within an existing order line.
    ///
    /// `item_qty` is the resulting line total, `orig_qty` the total before
    /// this change, and `qty_to_check` the delta under validation. Sale
    /// bounds apply to the resulting total; the no-backorder stock floor
    /// applies to the incremental draw, taking the larger of the computed
    /// difference and the stated delta so an understated `orig_qty` cannot
    /// mask an oversized draw.
    pub fn check_quote_item_qty(
        &self,
        item_qty: Decimal,
        qty_to_check: Decimal,
        orig_qty: Decimal,
    ) -> QtyCheck {
        if self.has_inverted_sale_bounds() {
            return QtyCheck::fail(
                QtyFailure::InvalidBounds,
                format!(
                    "no quantity can satisfy the configured sale bounds \
                     (minimum {} exceeds maximum {})",
                    self.min_sale_qty, self.max_sale_qty
                ),
                None,
            );
        }
        if let Some(min) = self.min_sale_bound() {
            if item_qty < min {
                return QtyCheck::fail(
                    QtyFailure::BelowMinimum,
                    format!("quantity below minimum: the fewest you may purchase is {min}"),
                    Some(min),
                );
            }
        }
        if let Some(max) = self.max_sale_bound() {
            if item_qty > max {
                return QtyCheck::fail(
                    QtyFailure::AboveMaximum,
                    format!("quantity above maximum: the most you may purchase is {max}"),
                    Some(max),
                );
            }
        }

        let draw = core::cmp::max(item_qty - orig_qty, qty_to_check);
        if self.manage_stock
            && !self.backorders
            && draw > Decimal::ZERO
            && self.quantity - draw < self.min_qty
        {
            return QtyCheck::fail(
                QtyFailure::InsufficientStock,
                "insufficient stock: the requested quantity is not available",
                None,
            );
        }

        self.check_qty_increments(item_qty)
    }
}
