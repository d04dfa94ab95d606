//! The customer's tagged state machine.
//!
//! The state enum carries, per variant, exactly the data that is meaningful
//! in that state: there is no way to represent "browsing with no remaining
//! time" or "moving with no target".

use shop_core::NodeId;

use crate::event::StateKind;

// ── PathCursor ────────────────────────────────────────────────────────────────

/// A computed path plus the index of the waypoint currently being walked
/// toward.  Paths are simple node sequences ending at the active goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathCursor {
    nodes: Vec<NodeId>,
    index: usize,
}

impl PathCursor {
    /// Wrap a non-empty path, targeting its first node.
    ///
    /// # Panics
    /// Debug-asserts that `nodes` is non-empty; callers check for the empty
    /// "no path found" result before constructing a cursor.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, index: 0 }
    }

    /// The waypoint currently being walked toward.
    #[inline]
    pub fn target(&self) -> NodeId {
        self.nodes[self.index]
    }

    /// Advance to the next waypoint.  Returns `false` when the path is
    /// exhausted (the previous target was the final node).
    pub fn advance(&mut self) -> bool {
        self.index += 1;
        self.index < self.nodes.len()
    }

    /// Remaining nodes including the current target.
    pub fn remaining(&self) -> &[NodeId] {
        &self.nodes[self.index..]
    }
}

// ── CustomerState ─────────────────────────────────────────────────────────────

/// What a customer is doing right now.
#[derive(Clone, Debug, PartialEq)]
pub enum CustomerState {
    /// No-op state: before the first path is computed, or after a plan
    /// failed and the customer is stalled waiting for external intervention.
    Idle,

    /// Walking toward `cursor.target()` at the configured speed.
    Moving { cursor: PathCursor },

    /// Stopped at a product node; position frozen while `remaining_secs`
    /// counts down.  The cursor is kept so the walk resumes on the same
    /// path — browsing never advances the path index.
    LookingAtProduct { remaining_secs: f32, cursor: PathCursor },

    /// Terminal for now: checkout handling is an external concern.
    AtRegister,

    /// Reserved extension point (help-request quests).  The core defines no
    /// transition into or out of this state.
    RequestingHelp,
}

impl CustomerState {
    /// The fieldless discriminant, for event reporting and tracing.
    pub fn kind(&self) -> StateKind {
        match self {
            CustomerState::Idle => StateKind::Idle,
            CustomerState::Moving { .. } => StateKind::Moving,
            CustomerState::LookingAtProduct { .. } => StateKind::LookingAtProduct,
            CustomerState::AtRegister => StateKind::AtRegister,
            CustomerState::RequestingHelp => StateKind::RequestingHelp,
        }
    }
}
