//! `shop-path` — path search over the waypoint graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`search`] | `PathStrategy` trait, `RandomDfs` default     |
//!
//! # Why not shortest-path?
//!
//! Customers are supposed to wander.  The default [`RandomDfs`] is a
//! depth-bounded depth-first search that shuffles each node's neighbor list
//! before descending, producing varied, non-optimal routes through the
//! aisles.  Replacing it with Dijkstra/A* would change observable behavior
//! (everyone beelines), so deterministic-shortest routing is deliberately
//! not provided — plug in your own [`PathStrategy`] if you want it.

pub mod search;

#[cfg(test)]
mod tests;

pub use search::{DEFAULT_MAX_DEPTH, PathStrategy, RandomDfs};
