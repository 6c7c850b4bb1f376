//! Stock state policy engine.
//!
//! This crate contains the business rules for inventory availability,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Every evaluation is a pure function over a [`StockRecord`]
//! snapshot and auxiliary quantities; the engine never mutates a record and
//! performs no staleness detection of its own.

pub mod outcome;
pub mod provider;
pub mod record;

pub use outcome::{QtyCheck, QtyFailure};
pub use record::StockRecord;
