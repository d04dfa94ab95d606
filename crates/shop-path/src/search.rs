//! Path strategy trait and the default randomized depth-first search.

use shop_core::{AgentRng, NodeId};
use shop_graph::WaypointGraph;

/// Depth bound of the default search.  A branch that recurses past this
/// many nodes is abandoned, so any returned path has at most
/// `DEFAULT_MAX_DEPTH + 1` nodes.
pub const DEFAULT_MAX_DEPTH: usize = 50;

// ── PathStrategy ──────────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// Returns the node sequence from `start` to `goal` **inclusive of both
/// endpoints**, or an empty `Vec` when no path was found.  An empty result
/// is a valid outcome, not an error: the caller is expected to hold its
/// current state and stall, never to crash.
///
/// `find_path(a, a)` returns `[a]`.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one strategy instance can serve
/// every customer when steps run on a thread pool.  All randomness comes
/// through the caller's `AgentRng`, keeping results reproducible per agent.
pub trait PathStrategy: Send + Sync {
    fn find_path(
        &self,
        graph: &WaypointGraph,
        start: NodeId,
        goal: NodeId,
        rng: &mut AgentRng,
    ) -> Vec<NodeId>;
}

// ── RandomDfs ─────────────────────────────────────────────────────────────────

/// Depth-bounded randomized depth-first search.
///
/// At each node the neighbor list is copied and shuffled uniformly before
/// descending, and the search returns the **first** path found in that
/// order — a stochastic any-path search, not a shortest-path one.  The
/// visited set is local to a single call; nothing is cached on the graph.
#[derive(Clone, Copy, Debug)]
pub struct RandomDfs {
    /// Branches recursing deeper than this fail silently; the search then
    /// backtracks and tries the remaining neighbors.
    pub max_depth: usize,
}

impl Default for RandomDfs {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl PathStrategy for RandomDfs {
    fn find_path(
        &self,
        graph: &WaypointGraph,
        start: NodeId,
        goal: NodeId,
        rng: &mut AgentRng,
    ) -> Vec<NodeId> {
        if start.index() >= graph.node_count() || goal.index() >= graph.node_count() {
            return Vec::new();
        }

        let mut visited = vec![false; graph.node_count()];
        let mut path = Vec::new();
        if self.dfs(graph, start, goal, 0, &mut visited, &mut path, rng) {
            // The recursion pushes nodes goal-first on unwind.
            path.reverse();
            path
        } else {
            Vec::new()
        }
    }
}

impl RandomDfs {
    fn dfs(
        &self,
        graph: &WaypointGraph,
        current: NodeId,
        goal: NodeId,
        depth: usize,
        visited: &mut [bool],
        path: &mut Vec<NodeId>,
        rng: &mut AgentRng,
    ) -> bool {
        if depth > self.max_depth {
            return false;
        }
        visited[current.index()] = true;

        if current == goal {
            path.push(current);
            return true;
        }

        let mut order: Vec<NodeId> = graph.neighbors(current).to_vec();
        rng.shuffle(&mut order);

        for next in order {
            if !visited[next.index()]
                && self.dfs(graph, next, goal, depth + 1, visited, path, rng)
            {
                path.push(current);
                return true;
            }
        }

        false
    }
}
