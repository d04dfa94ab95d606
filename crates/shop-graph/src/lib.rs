//! `shop-graph` — the shop-floor waypoint graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `WaypointGraph` (CSR adjacency + role index + catalog + R-tree), `WaypointGraphBuilder`, `Role`, `ProductInfo` |
//! | [`loader`] | CSV authoring format → `WaypointGraph`                    |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                            |
//!
//! # Design notes
//!
//! The graph is built once at load time and is strictly read-only during
//! simulation — many customers query it within the same tick and no locking
//! is ever needed.  All goal/path decisions run against pre-built indices
//! (role lists, product→node map, nearest-node R-tree) rather than scanning
//! every node per decision.

pub mod error;
pub mod graph;
pub mod loader;


pub use error::{GraphError, GraphResult};
pub use graph::{ProductInfo, Role, WaypointGraph, WaypointGraphBuilder};
pub use loader::{load_graph_csv, load_graph_reader};
