//! Plain data rows; serialized straight into CSV column headers.

use serde::Serialize;

/// One customer's pose and progress at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub tick: u64,
    pub agent: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Heading in radians.
    pub yaw: f32,
    pub state: &'static str,
    pub products_visited: u32,
}

/// One discrete customer event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub tick: u64,
    pub agent: u32,
    /// `reached_waypoint` or `entered_state`.
    pub event: &'static str,
    /// The node id or state name, depending on `event`.
    pub detail: String,
}
