use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which quantity rule a check tripped over.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QtyFailure {
    /// Quantity below the minimum sale bound.
    BelowMinimum,
    /// Quantity above the maximum sale bound.
    AboveMaximum,
    /// The draw would take the stock below its no-backorder floor.
    InsufficientStock,
    /// Quantity is not a multiple of the configured increment.
    NotAMultiple,
    /// `min_sale_qty > max_sale_qty`: no quantity can satisfy the bounds.
    InvalidBounds,
}

/// Outcome of a quantity policy check.
///
/// Rule failures are expected business outcomes that callers render as user
/// messages, so they are values with a reason and an optional suggested
/// quantity, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum QtyCheck {
    Pass,
    Fail {
        reason: QtyFailure,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        suggested_qty: Option<Decimal>,
    },
}

impl QtyCheck {
    pub fn pass() -> Self {
        Self::Pass
    }

    pub fn fail(
        reason: QtyFailure,
        message: impl Into<String>,
        suggested_qty: Option<Decimal>,
    ) -> Self {
        Self::Fail {
            reason,
            message: message.into(),
            suggested_qty,
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn reason(&self) -> Option<QtyFailure> {
        match self {
            Self::Pass => None,
            Self::Fail { reason, .. } => Some(*reason),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail { message, .. } => Some(message),
        }
    }

    pub fn suggested_qty(&self) -> Option<Decimal> {
        match self {
            Self::Pass => None,
            Self::Fail { suggested_qty, .. } => *suggested_qty,
        }
    }
}
