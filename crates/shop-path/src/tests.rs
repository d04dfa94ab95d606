//! Unit tests for shop-path.

#[cfg(test)]
mod helpers {
    use shop_core::{NodeId, Vec3};
    use shop_graph::{WaypointGraph, WaypointGraphBuilder};

    /// 3×3 grid of path nodes, 4-connected, node id = row * 3 + col.
    pub fn grid3x3() -> WaypointGraph {
        let mut b = WaypointGraphBuilder::new();
        let mut ids = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                ids.push(b.add_path(Vec3::new(col as f32, 0.0, row as f32)));
            }
        }
        for row in 0..3 {
            for col in 0..3 {
                let here = ids[row * 3 + col];
                if col + 1 < 3 {
                    b.add_link(here, ids[row * 3 + col + 1]);
                }
                if row + 1 < 3 {
                    b.add_link(here, ids[(row + 1) * 3 + col]);
                }
            }
        }
        b.build()
    }

    /// A straight chain of `n` path nodes, linked both ways.
    pub fn chain(n: usize) -> WaypointGraph {
        let mut b = WaypointGraphBuilder::new();
        let ids: Vec<NodeId> = (0..n)
            .map(|i| b.add_path(Vec3::new(i as f32, 0.0, 0.0)))
            .collect();
        for pair in ids.windows(2) {
            b.add_link(pair[0], pair[1]);
        }
        b.build()
    }

    /// Two disconnected path nodes.
    pub fn split() -> WaypointGraph {
        let mut b = WaypointGraphBuilder::new();
        b.add_path(Vec3::new(0.0, 0.0, 0.0));
        b.add_path(Vec3::new(10.0, 0.0, 0.0));
        b.build()
    }
}

#[cfg(test)]
mod random_dfs {
    use shop_core::{AgentId, AgentRng, NodeId};
    use crate::{DEFAULT_MAX_DEPTH, PathStrategy, RandomDfs};

    fn rng(seed: u64) -> AgentRng {
        AgentRng::new(seed, AgentId(0))
    }

    #[test]
    fn start_equals_goal_is_single_node_path() {
        let g = super::helpers::grid3x3();
        let path = RandomDfs::default().find_path(&g, NodeId(4), NodeId(4), &mut rng(1));
        assert_eq!(path, &[NodeId(4)]);
    }

    #[test]
    fn paths_are_simple_and_bounded_across_seeds() {
        let g = super::helpers::grid3x3();
        let search = RandomDfs::default();
        for seed in 0..50 {
            let path = search.find_path(&g, NodeId(0), NodeId(8), &mut rng(seed));
            assert!(!path.is_empty(), "grid is connected; seed {seed} found nothing");
            assert_eq!(path.first(), Some(&NodeId(0)));
            assert_eq!(path.last(), Some(&NodeId(8)));
            assert!(path.len() <= DEFAULT_MAX_DEPTH + 1);
            // Simple path: no node repeats.
            let mut seen = vec![false; g.node_count()];
            for &n in &path {
                assert!(!seen[n.index()], "seed {seed} repeated {n}");
                seen[n.index()] = true;
            }
            // Consecutive nodes are actually adjacent.
            for pair in path.windows(2) {
                assert!(g.neighbors(pair[0]).contains(&pair[1]));
            }
        }
    }

    #[test]
    fn routes_vary_with_the_random_order() {
        let g = super::helpers::grid3x3();
        let search = RandomDfs::default();
        let mut lengths = std::collections::HashSet::new();
        for seed in 0..50 {
            lengths.insert(search.find_path(&g, NodeId(0), NodeId(8), &mut rng(seed)).len());
        }
        // A shortest-path search would always return length 5.
        assert!(lengths.len() > 1, "expected varied route lengths, got {lengths:?}");
    }

    #[test]
    fn deterministic_for_a_fixed_seed() {
        let g = super::helpers::grid3x3();
        let search = RandomDfs::default();
        let a = search.find_path(&g, NodeId(0), NodeId(8), &mut rng(7));
        let b = search.find_path(&g, NodeId(0), NodeId(8), &mut rng(7));
        assert_eq!(a, b);
    }

    #[test]
    fn disconnected_components_yield_empty() {
        let g = super::helpers::split();
        let path = RandomDfs::default().find_path(&g, NodeId(0), NodeId(1), &mut rng(3));
        assert!(path.is_empty());
    }

    #[test]
    fn depth_bound_cuts_long_chains() {
        // A chain has exactly one route, so the depth bound is the only
        // variable.  60 nodes needs depth 59 > 50: unreachable.
        let long = super::helpers::chain(60);
        let search = RandomDfs::default();
        let blocked = search.find_path(&long, NodeId(0), NodeId(59), &mut rng(1));
        assert!(blocked.is_empty());

        // 51 nodes needs depth 50: exactly at the bound, still reachable.
        let edge = super::helpers::chain(51);
        let ok = search.find_path(&edge, NodeId(0), NodeId(50), &mut rng(1));
        assert_eq!(ok.len(), 51);
    }

    #[test]
    fn custom_depth_bound_is_respected() {
        let g = super::helpers::chain(10);
        let tight = RandomDfs { max_depth: 3 };
        assert!(tight.find_path(&g, NodeId(0), NodeId(9), &mut rng(1)).is_empty());
        assert_eq!(tight.find_path(&g, NodeId(0), NodeId(3), &mut rng(1)).len(), 4);
    }

    #[test]
    fn out_of_range_endpoints_yield_empty() {
        let g = super::helpers::chain(3);
        let search = RandomDfs::default();
        assert!(search.find_path(&g, NodeId::INVALID, NodeId(0), &mut rng(1)).is_empty());
        assert!(search.find_path(&g, NodeId(0), NodeId(99), &mut rng(1)).is_empty());
    }
}
