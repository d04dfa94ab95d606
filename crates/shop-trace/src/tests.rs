//! Tests capture CSV output in memory and assert on the text.

#[cfg(test)]
mod csv_trace {
    use shop_core::{NodeId, SimConfig, Vec3};
    use shop_graph::WaypointGraphBuilder;
    use shop_path::RandomDfs;
    use shop_sim::ShopBuilder;
    use crate::CsvTrace;

    fn run_small_sim(trace: &mut CsvTrace<Vec<u8>>) -> NodeId {
        let mut b = WaypointGraphBuilder::new();
        let door = b.add_entrance(Vec3::new(0.0, 0.0, 0.0));
        let milk = b.add_product(Vec3::new(0.0, 0.0, 2.0), "milk", 1.0, (1.0, 1.0));
        let till = b.add_register(Vec3::new(0.0, 0.0, 4.0));
        b.add_link(door, milk);
        b.add_link(milk, till);
        let graph = b.build();

        let config = SimConfig {
            dt_secs: 0.05,
            total_ticks: 2_000,
            seed: 17,
            snapshot_interval_ticks: 500,
        };
        let mut shop = ShopBuilder::new(config, graph, RandomDfs::default())
            .spawn_batch(2, door)
            .build()
            .unwrap();
        shop.run(trace);
        milk
    }

    #[test]
    fn snapshots_have_headers_and_expected_row_count() {
        let mut trace = CsvTrace::from_writers(Vec::new(), Vec::new());
        run_small_sim(&mut trace);
        assert!(trace.take_error().is_none());

        let (snapshots, _) = trace.into_writers().unwrap();
        let text = String::from_utf8(snapshots).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("tick,agent,x,y,z,yaw,state,products_visited")
        );
        // Snapshots at ticks 0, 500, 1000, 1500 × 2 customers.
        assert_eq!(lines.count(), 8);
    }

    #[test]
    fn events_record_waypoints_and_state_changes() {
        let mut trace = CsvTrace::from_writers(Vec::new(), Vec::new());
        let milk = run_small_sim(&mut trace);
        assert!(trace.take_error().is_none());

        let (_, events) = trace.into_writers().unwrap();
        let text = String::from_utf8(events).unwrap();
        assert!(text.starts_with("tick,agent,event,detail"));
        // Both customers browse the milk shelf and check out.
        assert!(text.contains(&format!("reached_waypoint,{}", milk.0)));
        assert!(text.contains("entered_state,looking_at_product"));
        assert!(text.contains("entered_state,at_register"));
        // Spawn transitions land on the first tick.
        assert!(text.contains("0,0,entered_state,moving"));
        assert!(text.contains("0,1,entered_state,moving"));
    }
}
