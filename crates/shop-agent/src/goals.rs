//! Next-goal selection.
//!
//! The policy: while the customer
//! still wants to browse (`products_visited < products_to_visit`), pick
//! uniformly among product nodes whose product is on the shopping list and
//! not yet visited; with no such node, or once the browse target is met,
//! head for the register.  A floor plan without a register yields `None` —
//! the caller stalls rather than crashing.

use shop_core::{AgentRng, NodeId, ProductId};
use shop_graph::{Role, WaypointGraph};

/// Pick the next node to route toward, or `None` when no goal exists.
pub fn next_goal(
    graph: &WaypointGraph,
    shopping_list: &[ProductId],
    visited: &[ProductId],
    products_visited: u32,
    products_to_visit: u32,
    rng: &mut AgentRng,
) -> Option<NodeId> {
    if products_visited < products_to_visit {
        if let Some(node) = random_wanted_product_node(graph, shopping_list, visited, rng) {
            return Some(node);
        }
    }
    register_node(graph)
}

/// Uniform pick among product nodes that are wanted and unvisited.
///
/// Candidates are collected in ascending `NodeId` order from the role
/// index, so the choice depends only on the rng state — not on iteration
/// order of any hash structure.
fn random_wanted_product_node(
    graph: &WaypointGraph,
    shopping_list: &[ProductId],
    visited: &[ProductId],
    rng: &mut AgentRng,
) -> Option<NodeId> {
    let candidates: Vec<NodeId> = graph
        .nodes_with_role(Role::Product)
        .iter()
        .copied()
        .filter(|&node| {
            graph.product_info(node).is_some_and(|info| {
                shopping_list.contains(&info.product) && !visited.contains(&info.product)
            })
        })
        .collect();
    rng.choose(&candidates).copied()
}

/// The first register node, if the floor plan has one.
fn register_node(graph: &WaypointGraph) -> Option<NodeId> {
    graph.nodes_with_role(Role::Register).first().copied()
}
