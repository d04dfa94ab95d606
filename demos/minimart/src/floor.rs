//! The minimart floor plan.
//!
//! A two-sided aisle with six shelves, one entrance, and one register:
//!
//! ```text
//!    milk ─── eggs ─── apples
//!     │        │         │
//!     a0 ───── a1 ────── a2 ── register
//!     │        │         │
//!    bread ── cheese ── coffee
//!
//!    entrance ── a0
//! ```
//!
//! Distances are metres; shelves use the default 0.5 stop chance and a
//! 1–3 s dwell.

use shop_core::{NodeId, Vec3};
use shop_graph::{WaypointGraph, WaypointGraphBuilder};

/// Build the floor plan.  Returns `(graph, entrance)`.
pub fn build_floor() -> (WaypointGraph, NodeId) {
    let mut b = WaypointGraphBuilder::new();

    let entrance = b.add_entrance(Vec3::new(2.0, 0.0, -2.0));
    let a0 = b.add_path(Vec3::new(0.0, 0.0, 0.0));
    let a1 = b.add_path(Vec3::new(0.0, 0.0, 4.0));
    let a2 = b.add_path(Vec3::new(0.0, 0.0, 8.0));
    let register = b.add_register(Vec3::new(3.0, 0.0, 8.0));

    let milk = b.add_product(Vec3::new(-2.0, 0.0, 0.0), "milk", 0.5, (1.0, 3.0));
    let eggs = b.add_product(Vec3::new(-2.0, 0.0, 4.0), "eggs", 0.5, (1.0, 3.0));
    let apples = b.add_product(Vec3::new(-2.0, 0.0, 8.0), "apples", 0.5, (1.0, 3.0));
    let bread = b.add_product(Vec3::new(2.0, 0.0, 0.0), "bread", 0.5, (1.0, 3.0));
    let cheese = b.add_product(Vec3::new(2.0, 0.0, 4.0), "cheese", 0.5, (1.0, 3.0));
    let coffee = b.add_product(Vec3::new(2.0, 0.0, 8.0), "coffee", 0.5, (1.0, 3.0));

    // Center aisle.
    b.add_link(entrance, a0);
    b.add_link(a0, a1);
    b.add_link(a1, a2);
    b.add_link(a2, register);

    // Shelves off the aisle.
    b.add_link(a0, milk);
    b.add_link(a1, eggs);
    b.add_link(a2, apples);
    b.add_link(a0, bread);
    b.add_link(a1, cheese);
    b.add_link(a2, coffee);

    // Side corridors along each shelf row.
    b.add_link(milk, eggs);
    b.add_link(eggs, apples);
    b.add_link(bread, cheese);
    b.add_link(cheese, coffee);

    (b.build(), entrance)
}
