//! minimart — smallest demo for the shopfloor framework.
//!
//! Sends a dozen customers through a six-shelf corner store and writes a
//! CSV trace of their positions and events to `output/minimart/`.

mod floor;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use shop_agent::{CustomerEvent, StateKind};
use shop_core::{AgentId, SimConfig, Tick};
use shop_path::RandomDfs;
use shop_sim::{ShopBuilder, ShopObserver};
use shop_trace::CsvTrace;

use floor::build_floor;

// ── Constants ─────────────────────────────────────────────────────────────────

const CUSTOMER_COUNT: usize = 12;
const SEED: u64 = 42;
const DT_SECS: f32 = 0.05; // 20 steps per simulated second
const SIM_MINUTES: u64 = 3;
const SNAPSHOT_INTERVAL_TICKS: u64 = 20; // one snapshot row per sim second

// ── Observer wrapper to count checkouts ───────────────────────────────────────

struct CheckoutCounter<O: ShopObserver> {
    inner: O,
    checkouts: usize,
    events: usize,
}

impl<O: ShopObserver> CheckoutCounter<O> {
    fn new(inner: O) -> Self {
        Self { inner, checkouts: 0, events: 0 }
    }
}

impl<O: ShopObserver> ShopObserver for CheckoutCounter<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_event(&mut self, tick: Tick, agent: AgentId, event: &CustomerEvent) {
        self.events += 1;
        if matches!(event, CustomerEvent::EnteredState { state: StateKind::AtRegister }) {
            self.checkouts += 1;
        }
        self.inner.on_event(tick, agent, event);
    }

    fn on_tick_end(&mut self, tick: Tick, active: usize) {
        self.inner.on_tick_end(tick, active);
    }

    fn on_snapshot(&mut self, tick: Tick, customers: &[shop_agent::Customer]) {
        self.inner.on_snapshot(tick, customers);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== minimart — shopfloor sim ===");
    println!("Customers: {CUSTOMER_COUNT}  |  Minutes: {SIM_MINUTES}  |  Seed: {SEED}");
    println!();

    // 1. Build the floor plan.
    let (graph, entrance) = build_floor();
    println!(
        "Floor plan: {} waypoints, {} products",
        graph.node_count(),
        graph.product_count()
    );

    // 2. Sim config.
    let ticks_per_second = (1.0 / DT_SECS) as u64;
    let config = SimConfig {
        dt_secs: DT_SECS,
        total_ticks: SIM_MINUTES * 60 * ticks_per_second,
        seed: SEED,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
    };
    let total_ticks = config.total_ticks;
    println!(
        "Sim: {} ticks ({} min × {} ticks/s), snapshot every {} ticks",
        total_ticks, SIM_MINUTES, ticks_per_second, SNAPSHOT_INTERVAL_TICKS
    );
    println!();

    // 3. Build the shop: all customers enter at the door, each with its own
    //    RNG stream, list, and browse target.
    let mut shop = ShopBuilder::new(config, graph, RandomDfs::default())
        .spawn_batch(CUSTOMER_COUNT, entrance)
        .build()?;

    // 4. Set up trace output.
    let trace = CsvTrace::create(Path::new("output/minimart"))?;
    let mut obs = CheckoutCounter::new(trace);

    // 5. Run.
    let t0 = Instant::now();
    shop.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("trace error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  events recorded : {}", obs.events);
    println!("  checked out     : {}/{}", obs.checkouts, CUSTOMER_COUNT);
    println!();

    // 7. Final customer table.
    println!("{:<8} {:<18} {:<8} {:<6}", "Agent", "State", "Visited", "List");
    println!("{}", "-".repeat(42));
    for customer in &shop.customers {
        println!(
            "{:<8} {:<18} {:<8} {:<6}",
            customer.id.0,
            customer.state_kind().as_str(),
            customer.products_visited(),
            customer.shopping_list().len(),
        );
    }

    Ok(())
}
