//! Discrete events for external effect systems.
//!
//! Audio, VFX, and UI layers subscribe to these through the sim observer;
//! the core fires them and never waits on any consumer.

use shop_core::NodeId;

/// Fieldless mirror of `CustomerState` for reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    Idle,
    Moving,
    LookingAtProduct,
    AtRegister,
    RequestingHelp,
}

impl StateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::Idle => "idle",
            StateKind::Moving => "moving",
            StateKind::LookingAtProduct => "looking_at_product",
            StateKind::AtRegister => "at_register",
            StateKind::RequestingHelp => "requesting_help",
        }
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discrete happening during one customer's step.
///
/// `EnteredState` fires when the state *kind* changes; waypoint-to-waypoint
/// hops inside `Moving` are reported via `ReachedWaypoint` instead of a
/// repeated `EnteredState(Moving)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomerEvent {
    ReachedWaypoint { node: NodeId },
    EnteredState { state: StateKind },
}
