//! The customer: spawn-time sampling, per-tick stepping, and the waypoint
//! handling that drives the shopping cycle.

use shop_core::{AgentId, AgentRng, NodeId, ProductId, Vec3, slerp_yaw, yaw_of};
use shop_graph::{Role, WaypointGraph};
use shop_path::PathStrategy;

use crate::event::{CustomerEvent, StateKind};
use crate::goals;
use crate::params::CustomerParams;
use crate::state::{CustomerState, PathCursor};

/// One shopping NPC.
///
/// A customer owns all of its mutable state: position, heading, shopping
/// list, visited products, and the state machine itself.  The graph and
/// path strategy passed to [`step`](Customer::step) are shared read-only;
/// random decisions draw from the customer's own `AgentRng`.
#[derive(Debug)]
pub struct Customer {
    pub id: AgentId,

    /// Continuous world position, updated while `Moving`.
    pub position: Vec3,

    /// Heading (yaw, radians) eased toward the travel direction.
    pub yaw: f32,

    params: CustomerParams,

    /// Sampled once at spawn, never regenerated.  May contain duplicates.
    shopping_list: Vec<ProductId>,

    /// Products already browsed; a product never triggers a second stop.
    visited: Vec<ProductId>,

    products_visited: u32,
    /// Browse appetite, sampled at spawn independently of the list length.
    products_to_visit: u32,

    /// Most recently reached waypoint; the origin for replanning.
    /// `INVALID` only for customers that never entered the floor.
    last_waypoint: NodeId,

    state: CustomerState,
    /// Last state kind reported through `EnteredState`, so internal
    /// placeholder swaps never produce spurious events.
    reported_kind: StateKind,
}

impl Customer {
    // ── Spawn ─────────────────────────────────────────────────────────────

    /// Create a customer and, when a valid start waypoint is given, begin
    /// the shopping cycle immediately.
    ///
    /// Misconfiguration (no start node, unknown start node, empty product
    /// catalog) is logged as a warning and leaves the customer permanently
    /// `Idle` rather than panicking.  Transition events raised during spawn
    /// are pushed to `events`.
    pub fn spawn<P: PathStrategy>(
        id: AgentId,
        params: CustomerParams,
        start: Option<NodeId>,
        graph: &WaypointGraph,
        paths: &P,
        rng: &mut AgentRng,
        events: &mut Vec<CustomerEvent>,
    ) -> Customer {
        let to_visit_max = params.max_products_to_visit.max(params.min_products_to_visit);
        let products_to_visit = rng.gen_range(params.min_products_to_visit..=to_visit_max);

        let mut customer = Customer {
            id,
            position: Vec3::ZERO,
            yaw: 0.0,
            params,
            shopping_list: Vec::new(),
            visited: Vec::new(),
            products_visited: 0,
            products_to_visit,
            last_waypoint: NodeId::INVALID,
            state: CustomerState::Idle,
            reported_kind: StateKind::Idle,
        };

        let start = match start {
            Some(node) if node.index() < graph.node_count() => node,
            Some(node) => {
                tracing::warn!(agent = %id, %node, "start waypoint does not exist; customer stays idle");
                return customer;
            }
            None => {
                tracing::warn!(agent = %id, "no start waypoint assigned; customer stays idle");
                return customer;
            }
        };

        customer.position = graph.position(start);
        customer.last_waypoint = start;
        customer.start_shopping(graph, paths, rng, events);
        customer
    }

    fn start_shopping<P: PathStrategy>(
        &mut self,
        graph: &WaypointGraph,
        paths: &P,
        rng: &mut AgentRng,
        events: &mut Vec<CustomerEvent>,
    ) {
        if graph.product_count() == 0 {
            tracing::warn!(agent = %self.id, "product catalog is empty; customer stays idle");
            return;
        }
        if self.shopping_list.is_empty() {
            let max_items = self.params.max_list_items.max(self.params.min_list_items);
            let item_count = rng.gen_range(self.params.min_list_items..=max_items);
            for _ in 0..item_count {
                let pick = rng.gen_range(0..graph.product_count());
                self.shopping_list.push(ProductId(pick as u16));
            }
        }
        self.plan_next_goal(graph, paths, rng, events);
    }

    // ── Per-tick step ─────────────────────────────────────────────────────

    /// Advance this customer by `dt` simulated seconds.
    ///
    /// `Idle`, `AtRegister`, and `RequestingHelp` are no-ops; the first is
    /// a stall awaiting external intervention, the latter two are handled
    /// by systems outside the core.
    pub fn step<P: PathStrategy>(
        &mut self,
        dt: f32,
        graph: &WaypointGraph,
        paths: &P,
        rng: &mut AgentRng,
        events: &mut Vec<CustomerEvent>,
    ) {
        match self.state {
            CustomerState::Idle
            | CustomerState::AtRegister
            | CustomerState::RequestingHelp => {}
            CustomerState::Moving { .. } => self.step_moving(dt, graph, paths, rng, events),
            CustomerState::LookingAtProduct { .. } => {
                self.step_browsing(dt, graph, paths, rng, events)
            }
        }
    }

    /// Ground-plane movement toward the current target waypoint.
    ///
    /// The target's vertical coordinate is projected onto the customer's
    /// own height, and the heading eases toward the travel direction.
    fn step_moving<P: PathStrategy>(
        &mut self,
        dt: f32,
        graph: &WaypointGraph,
        paths: &P,
        rng: &mut AgentRng,
        events: &mut Vec<CustomerEvent>,
    ) {
        let CustomerState::Moving { cursor } = &self.state else { return };
        let target_node = cursor.target();
        let target = graph.position(target_node).with_y(self.position.y);

        if let Some(dir) = (target - self.position).normalized() {
            self.position = self.position + dir * (self.params.speed * dt);
            self.yaw = slerp_yaw(self.yaw, yaw_of(dir), self.params.rotation_speed * dt);
        }

        if self.position.distance(target) < self.params.reach_distance {
            self.on_waypoint_reached(target_node, graph, paths, rng, events);
        }
    }

    /// Dwell countdown; resumes the path exactly when the timer crosses 0.
    fn step_browsing<P: PathStrategy>(
        &mut self,
        dt: f32,
        graph: &WaypointGraph,
        paths: &P,
        rng: &mut AgentRng,
        events: &mut Vec<CustomerEvent>,
    ) {
        let CustomerState::LookingAtProduct { remaining_secs, .. } = &mut self.state else {
            return;
        };
        *remaining_secs -= dt;
        if *remaining_secs <= 0.0 {
            self.continue_to_next_waypoint(graph, paths, rng, events);
        }
    }

    // ── Waypoint handling ─────────────────────────────────────────────────

    fn on_waypoint_reached<P: PathStrategy>(
        &mut self,
        node: NodeId,
        graph: &WaypointGraph,
        paths: &P,
        rng: &mut AgentRng,
        events: &mut Vec<CustomerEvent>,
    ) {
        events.push(CustomerEvent::ReachedWaypoint { node });
        self.last_waypoint = node;

        match graph.role(node) {
            Role::Product => {
                if let Some(info) = graph.product_info(node).copied() {
                    let should_stop = rng.random::<f32>() < info.stop_chance;
                    let wants_it = self.shopping_list.contains(&info.product);
                    let unvisited = !self.visited.contains(&info.product);
                    let still_browsing = self.products_visited < self.products_to_visit;

                    if should_stop && wants_it && unvisited && still_browsing {
                        self.products_visited += 1;
                        self.visited.push(info.product);
                        let dwell =
                            rng.gen_range(info.dwell_min_secs..=info.dwell_max_secs);
                        // Browsing happens in place: the path index is not
                        // advanced, so the walk resumes from this node.
                        let Some(cursor) = self.take_cursor() else { return };
                        self.enter(
                            CustomerState::LookingAtProduct { remaining_secs: dwell, cursor },
                            events,
                        );
                        return;
                    }
                }
                // Skipped (roll failed, not on the list, already visited, or
                // browse target met): an ordinary waypoint.
                self.continue_to_next_waypoint(graph, paths, rng, events);
            }
            Role::Register => {
                self.enter(CustomerState::AtRegister, events);
            }
            Role::Path | Role::Entrance => {
                self.continue_to_next_waypoint(graph, paths, rng, events);
            }
        }
    }

    fn continue_to_next_waypoint<P: PathStrategy>(
        &mut self,
        graph: &WaypointGraph,
        paths: &P,
        rng: &mut AgentRng,
        events: &mut Vec<CustomerEvent>,
    ) {
        let Some(mut cursor) = self.take_cursor() else { return };
        if cursor.advance() {
            self.enter(CustomerState::Moving { cursor }, events);
        } else {
            // Path exhausted at its final node: start a new goal cycle from
            // the waypoint just reached.
            self.plan_next_goal(graph, paths, rng, events);
        }
    }

    /// Ask the goal policy for a target and the path strategy for a route.
    ///
    /// On any failure (no goal because the floor has no register, or no
    /// path within the depth bound) the customer stalls in `Idle`; there is
    /// no automatic retry.
    fn plan_next_goal<P: PathStrategy>(
        &mut self,
        graph: &WaypointGraph,
        paths: &P,
        rng: &mut AgentRng,
        events: &mut Vec<CustomerEvent>,
    ) {
        let Some(goal) = goals::next_goal(
            graph,
            &self.shopping_list,
            &self.visited,
            self.products_visited,
            self.products_to_visit,
            rng,
        ) else {
            tracing::warn!(agent = %self.id, "no shopping goal available; customer stalls");
            self.enter(CustomerState::Idle, events);
            return;
        };

        let origin = if self.last_waypoint != NodeId::INVALID {
            self.last_waypoint
        } else {
            match graph.nearest_node(self.position) {
                Some(node) => node,
                None => {
                    tracing::warn!(agent = %self.id, "graph has no nodes; customer stalls");
                    self.enter(CustomerState::Idle, events);
                    return;
                }
            }
        };

        let nodes = paths.find_path(graph, origin, goal, rng);
        if nodes.is_empty() {
            tracing::warn!(
                agent = %self.id, %origin, %goal,
                "no path found within depth bound; customer stalls"
            );
            self.enter(CustomerState::Idle, events);
            return;
        }

        self.enter(CustomerState::Moving { cursor: PathCursor::new(nodes) }, events);
    }

    // ── State plumbing ────────────────────────────────────────────────────

    /// Move into `state`, reporting `EnteredState` when the kind changed
    /// since the last report.
    fn enter(&mut self, state: CustomerState, events: &mut Vec<CustomerEvent>) {
        let kind = state.kind();
        self.state = state;
        if kind != self.reported_kind {
            self.reported_kind = kind;
            events.push(CustomerEvent::EnteredState { state: kind });
        }
    }

    /// Take the path cursor out of the current state, leaving an `Idle`
    /// placeholder.  `None` for states that carry no cursor.
    fn take_cursor(&mut self) -> Option<PathCursor> {
        match std::mem::replace(&mut self.state, CustomerState::Idle) {
            CustomerState::Moving { cursor }
            | CustomerState::LookingAtProduct { cursor, .. } => Some(cursor),
            other => {
                self.state = other;
                None
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &CustomerState {
        &self.state
    }

    pub fn state_kind(&self) -> StateKind {
        self.state.kind()
    }

    pub fn shopping_list(&self) -> &[ProductId] {
        &self.shopping_list
    }

    pub fn visited_products(&self) -> &[ProductId] {
        &self.visited
    }

    pub fn products_visited(&self) -> u32 {
        self.products_visited
    }

    pub fn products_to_visit(&self) -> u32 {
        self.products_to_visit
    }

    /// Most recently reached waypoint (`INVALID` before the first).
    pub fn last_waypoint(&self) -> NodeId {
        self.last_waypoint
    }

    /// The waypoint currently walked toward, while a path is active.
    pub fn current_target(&self) -> Option<NodeId> {
        match &self.state {
            CustomerState::Moving { cursor }
            | CustomerState::LookingAtProduct { cursor, .. } => Some(cursor.target()),
            _ => None,
        }
    }
}
