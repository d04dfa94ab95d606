//! The `Shop` struct and its tick loop.

use shop_agent::{Customer, CustomerEvent, StateKind};
use shop_core::{AgentId, AgentRng, SimClock, SimConfig, Tick};
use shop_graph::WaypointGraph;
use shop_path::PathStrategy;

use crate::ShopObserver;

/// The main simulation runner.
///
/// `Shop<P>` owns the floor plan, the customer pool, and one RNG per
/// customer, and drives the per-tick step/deliver/snapshot cycle described
/// in the [crate docs](crate).  Create via [`ShopBuilder`][crate::ShopBuilder].
#[derive(Debug)]
pub struct Shop<P: PathStrategy> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to sim seconds.
    pub clock: SimClock,

    /// The floor plan.  Shared read-only by every customer step.
    pub graph: WaypointGraph,

    /// The path strategy.  Shared read-only; randomness comes from the
    /// per-customer RNG passed into each search.
    pub paths: P,

    /// The customer pool, indexed by `AgentId`.
    pub customers: Vec<Customer>,

    /// Per-customer deterministic RNGs, parallel to `customers`.  Kept
    /// separate so stepping can split the borrows.
    pub rngs: Vec<AgentRng>,

    /// Events raised during spawn, delivered at the first tick boundary.
    pub(crate) pending_events: Vec<(AgentId, CustomerEvent)>,
}

impl<P: PathStrategy> Shop<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: ShopObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            let now = self.clock.current_tick;
            self.process_tick(now, observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: ShopObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.process_tick(now, observer);
            self.clock.advance();
        }
    }

    /// Customers still moving or browsing.
    pub fn active_customers(&self) -> usize {
        self.customers
            .iter()
            .filter(|c| {
                matches!(
                    c.state_kind(),
                    StateKind::Moving | StateKind::LookingAtProduct
                )
            })
            .count()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: ShopObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);

        // Spawn-time events were buffered by the builder; they belong to
        // the first tick the observer sees.
        for (agent, event) in std::mem::take(&mut self.pending_events) {
            observer.on_event(now, agent, &event);
        }

        let batches = self.step_customers();

        // Sequential delivery in ascending AgentId order keeps observer
        // output deterministic even when the step phase ran in parallel.
        for (i, events) in batches.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            for event in &events {
                observer.on_event(now, agent, event);
            }
        }

        observer.on_tick_end(now, self.active_customers());

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.customers);
        }
    }

    /// Step every customer by one dt, collecting each one's events in a
    /// private batch.
    ///
    /// With the `parallel` Cargo feature the steps run on Rayon's thread
    /// pool; customers never share mutable state, so the phases are
    /// identical up to scheduling.
    fn step_customers(&mut self) -> Vec<Vec<CustomerEvent>> {
        let dt = self.clock.dt_secs;
        let graph = &self.graph;
        let paths = &self.paths;

        #[cfg(not(feature = "parallel"))]
        {
            self.customers
                .iter_mut()
                .zip(self.rngs.iter_mut())
                .map(|(customer, rng)| {
                    let mut events = Vec::new();
                    customer.step(dt, graph, paths, rng, &mut events);
                    events
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.customers
                .par_iter_mut()
                .zip(self.rngs.par_iter_mut())
                .map(|(customer, rng)| {
                    let mut events = Vec::new();
                    customer.step(dt, graph, paths, rng, &mut events);
                    events
                })
                .collect()
        }
    }
}
