//! Per-customer tuning parameters.

/// Movement and shopping-appetite knobs for one customer.
///
/// Defaults: 2 m/s walking speed, a
/// heading slerp factor of 5/s, a 0.5 m waypoint-reach radius, and both the
/// shopping-list size and the browse target sampled uniformly from 1..=3.
#[derive(Clone, Copy, Debug)]
pub struct CustomerParams {
    /// Walking speed in metres per simulated second.
    pub speed: f32,

    /// Heading interpolation factor per second; see `shop_core::slerp_yaw`.
    pub rotation_speed: f32,

    /// A waypoint counts as reached when the customer is closer than this.
    pub reach_distance: f32,

    /// Inclusive range for the number of shopping-list entries sampled at
    /// spawn (duplicates allowed).
    pub min_list_items: u32,
    pub max_list_items: u32,

    /// Inclusive range for `products_to_visit`, sampled at spawn
    /// independently of the list length.  A customer with a 3-item list may
    /// still be modeled as browsing only 1 before checkout — the decoupling
    /// is deliberate (impulse/partial shopping), not an inconsistency.
    pub min_products_to_visit: u32,
    pub max_products_to_visit: u32,
}

impl Default for CustomerParams {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_speed: 5.0,
            reach_distance: 0.5,
            min_list_items: 1,
            max_list_items: 3,
            min_products_to_visit: 1,
            max_products_to_visit: 3,
        }
    }
}
