//! `shop-agent` — the shopping customer.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`customer`] | `Customer` — spawn, per-tick step, waypoint handling    |
//! | [`state`]    | `CustomerState` tagged variants, `PathCursor`           |
//! | [`goals`]    | next-goal policy (product nodes, register fallback)     |
//! | [`params`]   | `CustomerParams` tuning knobs with standard defaults    |
//! | [`event`]    | `CustomerEvent`, `StateKind` — the effect-trigger sink  |
//!
//! # The shopping cycle
//!
//! ```text
//! spawn ─► plan goal ─► Moving ─► waypoint reached ─┬► browse (product, roll
//!            ▲                                      │   succeeds): Looking-
//!            │                                      │   AtProduct, timer,
//!            │                                      │   then continue path
//!            └── path exhausted ◄───────────────────┼► AtRegister (terminal)
//!                                                   └► pass through: next
//!                                                      waypoint
//! ```
//!
//! A customer owns all of its mutable state; the graph and path strategy it
//! is handed each step are shared read-only.  Stepping different customers
//! on different threads is therefore safe without locks.

pub mod customer;
pub mod event;
pub mod goals;
pub mod params;
pub mod state;


pub use customer::Customer;
pub use event::{CustomerEvent, StateKind};
pub use params::CustomerParams;
pub use state::{CustomerState, PathCursor};
