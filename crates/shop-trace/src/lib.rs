//! `shop-trace` — CSV trace output for the shopfloor framework.
//!
//! [`CsvTrace`] is a [`ShopObserver`][shop_sim::ShopObserver] that records
//! two CSV streams:
//!
//! - **snapshots** — one row per customer at every snapshot tick
//!   (position, heading, state, visit count);
//! - **events** — one row per [`CustomerEvent`][shop_agent::CustomerEvent].
//!
//! Observer methods have no return value, so write errors are buffered and
//! surfaced through [`CsvTrace::take_error`] after the run.

pub mod error;
pub mod observer;
pub mod row;

#[cfg(test)]
mod tests;

pub use error::{TraceError, TraceResult};
pub use observer::CsvTrace;
pub use row::{EventRow, SnapshotRow};
