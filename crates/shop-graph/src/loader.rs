//! CSV authoring loader.
//!
//! # CSV format
//!
//! One row per waypoint.  `id` is the authored identifier used by the
//! `neighbors` column; ids must be unique but need not be dense or ordered.
//!
//! ```csv
//! id,role,x,y,z,product,stop_chance,dwell_min,dwell_max,neighbors
//! 0,entrance,0,0,0,,,,,1
//! 1,product,2,0,0,milk,1.0,1,1,0;2
//! 2,register,4,0,0,,,,,1
//! ```
//!
//! | Column        | Meaning                                                  |
//! |---------------|----------------------------------------------------------|
//! | `role`        | `path`, `product`, `register`, or `entrance`             |
//! | `product`     | product name; required for `product` rows, ignored otherwise |
//! | `stop_chance` | optional; default 0.5                                    |
//! | `dwell_min`/`dwell_max` | optional; default 1 and 3 seconds              |
//! | `neighbors`   | `;`-separated authored ids; directed, one-way as listed  |
//!
//! Neighbor references to ids that appear in no row are dropped with a
//! warning rather than failing the load — a removed shelf must not brick
//! the whole floor plan.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use shop_core::{NodeId, Vec3};

use crate::graph::{WaypointGraph, WaypointGraphBuilder};
use crate::GraphError;

// ── Authoring defaults ────────────────────────────────────────────────────────

const DEFAULT_STOP_CHANCE: f32 = 0.5;
const DEFAULT_DWELL_SECS: (f32, f32) = (1.0, 3.0);

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    id: u32,
    role: String,
    x: f32,
    y: f32,
    z: f32,
    product: Option<String>,
    stop_chance: Option<f32>,
    dwell_min: Option<f32>,
    dwell_max: Option<f32>,
    neighbors: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`WaypointGraph`] from a CSV file.
pub fn load_graph_csv(path: &Path) -> Result<WaypointGraph, GraphError> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_graph_reader(file)
}

/// Like [`load_graph_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded floor plans.
pub fn load_graph_reader<R: Read>(reader: R) -> Result<WaypointGraph, GraphError> {
    // ── Parse rows ────────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: Vec<WaypointRecord> = Vec::new();
    for result in csv_reader.deserialize::<WaypointRecord>() {
        rows.push(result.map_err(|e| GraphError::Parse(e.to_string()))?);
    }

    // ── First pass: create nodes, remember authored id → NodeId ───────────
    let mut builder = WaypointGraphBuilder::new();
    let mut by_authored_id: FxHashMap<u32, NodeId> = FxHashMap::default();

    for row in &rows {
        let pos = Vec3::new(row.x, row.y, row.z);
        let node = match row.role.trim() {
            "path" => builder.add_path(pos),
            "entrance" => builder.add_entrance(pos),
            "register" => builder.add_register(pos),
            "product" => {
                let name = row
                    .product
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .ok_or_else(|| {
                        GraphError::Parse(format!("product row {} has no product name", row.id))
                    })?;
                let dwell_min = row.dwell_min.unwrap_or(DEFAULT_DWELL_SECS.0);
                let dwell_max = row.dwell_max.unwrap_or(DEFAULT_DWELL_SECS.1);
                builder.add_product(
                    pos,
                    name,
                    row.stop_chance.unwrap_or(DEFAULT_STOP_CHANCE),
                    (dwell_min, dwell_max),
                )
            }
            other => {
                return Err(GraphError::Parse(format!(
                    "row {}: unknown role {other:?} (expected path, product, register, or entrance)",
                    row.id
                )));
            }
        };
        if by_authored_id.insert(row.id, node).is_some() {
            return Err(GraphError::DuplicateNode(row.id));
        }
    }

    // ── Second pass: edges, dropping dangling references ──────────────────
    for row in &rows {
        let from = by_authored_id[&row.id];
        let Some(list) = row.neighbors.as_deref() else { continue };
        for field in list.split(';').map(str::trim).filter(|f| !f.is_empty()) {
            let authored: u32 = field.parse().map_err(|_| {
                GraphError::Parse(format!("row {}: bad neighbor id {field:?}", row.id))
            })?;
            match by_authored_id.get(&authored) {
                Some(&to) => builder.add_edge(from, to),
                None => {
                    tracing::warn!(
                        row = row.id,
                        neighbor = authored,
                        "dropping neighbor reference to a waypoint that does not exist"
                    );
                }
            }
        }
    }

    Ok(builder.build())
}
