//! `CsvTrace<W>` — a `ShopObserver` backed by two CSV writers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use shop_agent::{Customer, CustomerEvent};
use shop_core::{AgentId, Tick};
use shop_sim::ShopObserver;

use crate::row::{EventRow, SnapshotRow};
use crate::{TraceError, TraceResult};

/// Records customer snapshots and events as CSV.
///
/// Errors from the underlying writers are stored internally because
/// observer methods have no return value; after the run, check with
/// [`take_error`][Self::take_error].
pub struct CsvTrace<W: Write> {
    snapshots: csv::Writer<W>,
    events: csv::Writer<W>,
    last_error: Option<TraceError>,
}

impl CsvTrace<File> {
    /// Create `customer_snapshots.csv` and `customer_events.csv` in `dir`
    /// (creating the directory if needed).
    pub fn create(dir: &Path) -> TraceResult<Self> {
        std::fs::create_dir_all(dir)?;
        let snapshots = csv::Writer::from_path(dir.join("customer_snapshots.csv"))?;
        let events = csv::Writer::from_path(dir.join("customer_events.csv"))?;
        Ok(Self { snapshots, events, last_error: None })
    }
}

impl<W: Write> CsvTrace<W> {
    /// Wrap arbitrary writers; used by tests to capture output in memory.
    pub fn from_writers(snapshots: W, events: W) -> Self {
        Self {
            snapshots: csv::Writer::from_writer(snapshots),
            events: csv::Writer::from_writer(events),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Flush and unwrap the inner writers (snapshots, events).
    pub fn into_writers(self) -> TraceResult<(W, W)> {
        let snapshots = self.snapshots.into_inner().map_err(|e| e.into_error())?;
        let events = self.events.into_inner().map_err(|e| e.into_error())?;
        Ok((snapshots, events))
    }

    fn store_err(&mut self, result: TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> ShopObserver for CsvTrace<W> {
    fn on_event(&mut self, tick: Tick, agent: AgentId, event: &CustomerEvent) {
        let row = match event {
            CustomerEvent::ReachedWaypoint { node } => EventRow {
                tick: tick.0,
                agent: agent.0,
                event: "reached_waypoint",
                detail: node.0.to_string(),
            },
            CustomerEvent::EnteredState { state } => EventRow {
                tick: tick.0,
                agent: agent.0,
                event: "entered_state",
                detail: state.as_str().to_string(),
            },
        };
        let result = self.events.serialize(&row).map_err(TraceError::from);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, customers: &[Customer]) {
        for customer in customers {
            let row = SnapshotRow {
                tick: tick.0,
                agent: customer.id.0,
                x: customer.position.x,
                y: customer.position.y,
                z: customer.position.z,
                yaw: customer.yaw,
                state: customer.state_kind().as_str(),
                products_visited: customer.products_visited(),
            };
            let result = self.snapshots.serialize(&row).map_err(TraceError::from);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.snapshots.flush().map_err(TraceError::from);
        self.store_err(result);
        let result = self.events.flush().map_err(TraceError::from);
        self.store_err(result);
    }
}
