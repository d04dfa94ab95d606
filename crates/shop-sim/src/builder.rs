//! Fluent builder for constructing a [`Shop`].

use std::path::Path;

use shop_agent::{Customer, CustomerParams};
use shop_core::{AgentId, AgentRng, NodeId, SimConfig};
use shop_graph::{WaypointGraph, load_graph_csv};
use shop_path::PathStrategy;

use crate::{Shop, SimError, SimResult};

/// Fluent builder for [`Shop<P>`].
///
/// Required inputs are the [`SimConfig`], the floor plan, and a path
/// strategy; customers are queued with the `spawn_*` methods and actually
/// spawned (list sampling, first path) inside [`build`](Self::build).
///
/// # Example
///
/// ```rust,ignore
/// let mut shop = ShopBuilder::new(config, graph, RandomDfs::default())
///     .spawn_batch(10, entrance)
///     .spawn_with(Some(side_door), slow_params)
///     .build()?;
/// shop.run(&mut NoopObserver);
/// ```
pub struct ShopBuilder<P: PathStrategy> {
    config: SimConfig,
    graph: WaypointGraph,
    paths: P,
    spawns: Vec<(Option<NodeId>, CustomerParams)>,
}

impl<P: PathStrategy> ShopBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, graph: WaypointGraph, paths: P) -> Self {
        Self { config, graph, paths, spawns: Vec::new() }
    }

    /// Create a builder with the floor plan loaded from a CSV file.
    pub fn from_floor_csv(
        config: SimConfig,
        path: impl AsRef<Path>,
        paths: P,
    ) -> SimResult<Self> {
        let graph = load_graph_csv(path.as_ref())?;
        Ok(Self::new(config, graph, paths))
    }

    /// Queue one customer with default params, entering at `start`.
    pub fn spawn(self, start: NodeId) -> Self {
        self.spawn_with(Some(start), CustomerParams::default())
    }

    /// Queue one customer with explicit params.
    ///
    /// `start: None` spawns the customer off the floor: it is created but
    /// stays idle (with a logged warning) until external code intervenes.
    pub fn spawn_with(mut self, start: Option<NodeId>, params: CustomerParams) -> Self {
        self.spawns.push((start, params));
        self
    }

    /// Queue `count` customers with default params, all entering at `start`.
    ///
    /// Each still gets its own RNG stream, list, and browse target.
    pub fn spawn_batch(mut self, count: usize, start: NodeId) -> Self {
        for _ in 0..count {
            self.spawns.push((Some(start), CustomerParams::default()));
        }
        self
    }

    /// Validate the config, spawn all queued customers, and return a
    /// ready-to-run [`Shop`].
    ///
    /// Spawning assigns `AgentId`s in queue order and seeds one RNG per
    /// customer from `config.seed`; events raised here are buffered and
    /// delivered at the first tick.
    pub fn build(self) -> SimResult<Shop<P>> {
        let Self { config, graph, paths, spawns } = self;

        if !(config.dt_secs.is_finite() && config.dt_secs > 0.0) {
            return Err(SimError::Config(format!(
                "tick duration must be positive, got {}",
                config.dt_secs
            )));
        }

        let mut customers = Vec::with_capacity(spawns.len());
        let mut rngs = Vec::with_capacity(spawns.len());
        let mut pending_events = Vec::new();

        for (i, (start, params)) in spawns.into_iter().enumerate() {
            let id = AgentId(i as u32);
            let mut rng = AgentRng::new(config.seed, id);
            let mut events = Vec::new();
            let customer =
                Customer::spawn(id, params, start, &graph, &paths, &mut rng, &mut events);
            pending_events.extend(events.into_iter().map(|e| (id, e)));
            customers.push(customer);
            rngs.push(rng);
        }

        Ok(Shop {
            clock: config.make_clock(),
            config,
            graph,
            paths,
            customers,
            rngs,
            pending_events,
        })
    }
}
