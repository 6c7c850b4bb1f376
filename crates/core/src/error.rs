//! Error model for the resolution chain.
//!
//! Keep this focused on resolution faults (scope/stock/record lookup).
//! Quantity-rule failures are expected business outcomes and are returned as
//! structured `QtyCheck` values by the policy crate, never as errors.

use thiserror::Error;

use crate::id::{ProductId, StockId};

/// Result type used across the engine.
pub type StockResult<T> = Result<T, StockError>;

/// Resolution-chain error.
///
/// Resolution is deterministic for a given `(product, scope)` pair, so none
/// of these are retried; they propagate to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// No stock could be resolved for the given product/scope.
    #[error("stock resolution failed: {0}")]
    Resolution(String),

    /// No stock record exists for the resolved `(product, stock)` pair.
    #[error("stock record not found (product {product_id}, stock {stock_id})")]
    NotFound {
        product_id: ProductId,
        stock_id: StockId,
    },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl StockError {
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(product_id: ProductId, stock_id: StockId) -> Self {
        Self::NotFound {
            product_id,
            stock_id,
        }
    }
}
