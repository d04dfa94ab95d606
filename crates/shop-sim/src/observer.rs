//! Simulation observer trait for progress reporting and data collection.

use shop_agent::{Customer, CustomerEvent};
use shop_core::{AgentId, Tick};

/// Callbacks invoked by [`Shop::run`][crate::Shop::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Within one tick, `on_event` is called
/// in ascending `AgentId` order regardless of how the step phase ran.
///
/// # Example — checkout counter
///
/// ```rust,ignore
/// struct CheckoutCounter { done: usize }
///
/// impl ShopObserver for CheckoutCounter {
///     fn on_event(&mut self, _tick: Tick, _agent: AgentId, event: &CustomerEvent) {
///         if matches!(event, CustomerEvent::EnteredState { state: StateKind::AtRegister }) {
///             self.done += 1;
///         }
///     }
/// }
/// ```
pub trait ShopObserver {
    /// Called at the very start of each tick, before any customer steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every event a customer raised this tick.
    ///
    /// Events from spawning are reported here too, at the first tick.
    fn on_event(&mut self, _tick: Tick, _agent: AgentId, _event: &CustomerEvent) {}

    /// Called at the end of each tick.
    ///
    /// `active` is the number of customers still moving or browsing.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks, including tick 0).
    ///
    /// Provides read-only access to the whole customer pool so output
    /// writers can record positions and states without the sim knowing
    /// about any specific format.
    fn on_snapshot(&mut self, _tick: Tick, _customers: &[Customer]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`ShopObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl ShopObserver for NoopObserver {}
