//! `shop-sim` — tick loop orchestrator for the shopfloor framework.
//!
//! # The tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Step     — advance every customer by dt (parallel with the
//!                `parallel` feature); each step appends to a private
//!                per-customer event batch.
//!   ② Deliver  — report all batches to the observer in ascending
//!                AgentId order.
//!   ③ Snapshot — at the configured cadence, hand the observer the full
//!                customer pool for position/state recording.
//! ```
//!
//! Events raised while customers spawn (inside [`ShopBuilder::build`]) are
//! buffered and delivered at the start of the first tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs the step phase on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use shop_core::SimConfig;
//! use shop_path::RandomDfs;
//! use shop_sim::{NoopObserver, ShopBuilder};
//!
//! let mut shop = ShopBuilder::from_floor_csv(config, "floor.csv", RandomDfs::default())?
//!     .spawn_batch(20, entrance)
//!     .build()?;
//! shop.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::ShopBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ShopObserver};
pub use sim::Shop;
