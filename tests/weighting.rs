mod utils;

use std::sync::Arc;

use utils::{SpeedEdge, create_network, diamond_network, diamond_predictions};
use viatempo::prelude::*;

fn freeflow() -> FreeFlowWeighting {
    FreeFlowWeighting::new(100.0, 300_000.0)
}

fn td(rows: Vec<TravelTimeRow>) -> TimeDependentWeighting {
    // The profile maximum must stay above any speed the predictions imply,
    // or the lower bound would stop being admissible.
    let table = Arc::new(table_from_rows(rows).unwrap());
    TimeDependentWeighting::new(table, "car", 140.0, 300_000.0)
}

#[test]
fn static_cost_is_distance_over_directional_speed() {
    let network = diamond_network();
    let overlay = QueryOverlay::new(&network);
    let weighting = freeflow();

    // 1000 m at 100 km/h forward, both directions open.
    assert_eq!(weighting.edge_weight(&overlay.traversal(0, false), None, None), 36_000.0);
    assert_eq!(weighting.edge_weight(&overlay.traversal(0, true), None, None), 36_000.0);
    // 1000 m at 50 km/h.
    assert_eq!(weighting.edge_weight(&overlay.traversal(2, false), None, None), 72_000.0);
}

#[test]
fn closed_direction_costs_infinity_in_static_mode() {
    // Forward-only edge: stored backward speed 0 must not become a cost of 0.
    let network = create_network(&[SpeedEdge::new(0, 1, 1000.0, 80).directed(80, 0)]);
    let overlay = QueryOverlay::new(&network);
    let weighting = freeflow();

    assert!(weighting.edge_weight(&overlay.traversal(0, false), None, None).is_finite());
    assert!(weighting.edge_weight(&overlay.traversal(0, true), None, None).is_infinite());
}

#[test]
#[should_panic(expected = "closed direction")]
fn time_dependent_mode_rejects_closed_directions() {
    // The search never expands a direction whose static cost is infinite, so
    // a time-dependent query for one is a caller bug and must fail loudly.
    let network = create_network(&[SpeedEdge::new(0, 1, 1000.0, 80).directed(80, 0)]);
    let overlay = QueryOverlay::new(&network);
    let weighting = td(diamond_predictions());

    weighting.edge_weight(&overlay.traversal(0, true), None, Some(58 * 60));
}

#[test]
fn predictions_are_used_verbatim() {
    let network = diamond_network();
    let overlay = QueryOverlay::new(&network);
    let weighting = td(diamond_predictions());

    let cost = weighting.edge_weight(&overlay.traversal(0, false), None, Some(58 * 60));
    assert_eq!(cost, 30_000.0);
    let congested = weighting.edge_weight(&overlay.traversal(0, false), None, Some(480 * 60));
    assert_eq!(congested, 200_000.0);
}

#[test]
fn missing_predictions_fall_back_to_free_flow() {
    let network = diamond_network();
    let overlay = QueryOverlay::new(&network);
    let weighting = td(diamond_predictions());
    let reference = freeflow();

    // Link 4 (edge 2 forward) has no predictions at any hour.
    let traversal = overlay.traversal(2, false);
    let expected = reference.edge_weight(&traversal, None, None);
    assert_eq!(weighting.edge_weight(&traversal, None, Some(58 * 60)), expected);
    // Link 0 has predictions, but not for hour 3.
    let traversal = overlay.traversal(0, false);
    let expected = reference.edge_weight(&traversal, None, None);
    assert_eq!(weighting.edge_weight(&traversal, None, Some(3 * 3600)), expected);
}

#[test]
fn without_departure_time_the_td_weighting_is_static() {
    let network = diamond_network();
    let overlay = QueryOverlay::new(&network);
    let weighting = td(diamond_predictions());

    assert_eq!(weighting.edge_weight(&overlay.traversal(0, false), None, None), 36_000.0);
}

#[test]
fn heading_penalty_applies_to_unfavored_static_traversals() {
    let network = diamond_network();
    let mut overlay = QueryOverlay::new(&network);
    overlay.mark_unfavored(0);
    let weighting = freeflow();

    assert_eq!(weighting.edge_weight(&overlay.traversal(0, false), None, None), 336_000.0);
    assert_eq!(weighting.edge_weight(&overlay.traversal(1, false), None, None), 36_000.0);
}

#[test]
fn min_weight_never_exceeds_any_edge_cost() {
    let network = diamond_network();
    let overlay = QueryOverlay::new(&network);
    let weighting = td(diamond_predictions());

    for edge in 0..network.edge_count() as EdgeId {
        let traversal = overlay.traversal(edge, false);
        let bound = weighting.min_weight(traversal.distance_m);
        for departure in [None, Some(58 * 60), Some(480 * 60)] {
            let cost = weighting.edge_weight(&traversal, None, departure);
            assert!(
                bound <= cost,
                "lower bound {bound} exceeds cost {cost} on edge {edge}"
            );
        }
    }
}

#[test]
fn vehicles_without_predictions_always_fall_back() {
    let network = diamond_network();
    let overlay = QueryOverlay::new(&network);
    let table = Arc::new(table_from_rows(diamond_predictions()).unwrap());
    let weighting = TimeDependentWeighting::new(table, "bike", 30.0, 300_000.0);

    // 1000 m at the stored 100 km/h, not at any predicted time.
    let cost = weighting.edge_weight(&overlay.traversal(0, false), None, Some(58 * 60));
    assert_eq!(cost, 36_000.0);
}

#[test]
fn strategy_table_resolves_weightings_by_name() {
    let dir = std::env::temp_dir().join(format!("viatempo-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("predictions.csv");
    std::fs::write(
        &file,
        "link_id,mode,hour,travel_time_ms\n0,car,0,30000\n2,car,0,30000\n",
    )
    .unwrap();

    let config_file = dir.join("engine.json");
    std::fs::write(
        &config_file,
        format!(
            r#"{{
                "travel_time_file": {:?},
                "profiles": [
                    {{"name": "car", "max_speed_kmh": 140.0}},
                    {{"name": "bike", "max_speed_kmh": 30.0}}
                ]
            }}"#,
            file
        ),
    )
    .unwrap();

    let config = EngineConfig::from_file(&config_file).unwrap();
    // The heading penalty was omitted and falls back to its default.
    assert_eq!(config.heading_penalty_secs, 300.0);
    let engine = create_engine(&config, diamond_network()).unwrap();
    assert!(engine.weighting_names().any(|name| name == WEIGHTING_TD));

    assert_eq!(engine.weighting(WEIGHTING_TD, "car").unwrap().name(), "td");
    assert_eq!(
        engine.weighting(WEIGHTING_FREEFLOW, "bike").unwrap().name(),
        "freeflow"
    );
    assert!(matches!(
        engine.weighting("scenic", "car"),
        Err(Error::UnknownWeighting(_))
    ));
    assert!(matches!(
        engine.weighting(WEIGHTING_TD, "hovercraft"),
        Err(Error::UnknownProfile(_))
    ));

    std::fs::remove_dir_all(&dir).ok();
}
