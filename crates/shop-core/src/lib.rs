//! `shop-core` — foundational types for the `shopfloor` NPC simulation
//! framework.
//!
//! This crate is a dependency of every other `shop-*` crate.  It has no
//! `shop-*` dependencies and only one external one (`rand`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|--------------------------------------------|
//! | [`ids`]  | `AgentId`, `NodeId`, `ProductId`           |
//! | [`math`] | `Vec3`, yaw helpers for heading rotation   |
//! | [`time`] | `Tick`, `SimClock`, `SimConfig`            |
//! | [`rng`]  | `AgentRng` — seedable per-agent randomness |

pub mod ids;
pub mod math;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AgentId, NodeId, ProductId};
pub use math::{Vec3, slerp_yaw, yaw_of};
pub use rng::AgentRng;
pub use time::{SimClock, SimConfig, Tick};
