use viatempo::prelude::*;

pub struct SpeedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance_m: f64,
    pub speed_fwd_kmh: u32,
    pub speed_bwd_kmh: u32,
    pub original_forward: bool,
}

impl SpeedEdge {
    pub fn new(from: NodeId, to: NodeId, distance_m: f64, speed_kmh: u32) -> Self {
        Self {
            from,
            to,
            distance_m,
            speed_fwd_kmh: speed_kmh,
            speed_bwd_kmh: speed_kmh,
            original_forward: true,
        }
    }

    pub fn directed(mut self, speed_fwd_kmh: u32, speed_bwd_kmh: u32) -> Self {
        self.speed_fwd_kmh = speed_fwd_kmh;
        self.speed_bwd_kmh = speed_bwd_kmh;
        self
    }

    pub fn original_backward(mut self) -> Self {
        self.original_forward = false;
        self
    }
}

/// Creates a dummy network from a given edge list; node ids are allocated up
/// to the largest one mentioned.
pub fn create_network(edges: &[SpeedEdge]) -> RoadNetwork {
    assert!(!edges.is_empty(), "network must not be empty!");
    let max_node_id = edges.iter().map(|edge| edge.from.max(edge.to)).max().unwrap();

    let mut network = RoadNetwork::new();
    for external_id in 0..=max_node_id {
        network.add_node(u64::from(external_id));
    }
    for edge in edges {
        network.add_edge(
            edge.from,
            edge.to,
            edge.distance_m,
            EdgeFlags::new(edge.speed_fwd_kmh, edge.speed_bwd_kmh, edge.original_forward),
        );
    }
    network
}

pub fn prediction(link_id: LinkId, mode: &str, hour: u32, travel_time_ms: u32) -> TravelTimeRow {
    TravelTimeRow {
        link_id,
        mode: mode.to_string(),
        hour,
        travel_time_ms,
    }
}

/// Diamond network used by the routing tests: nodes 0-1-3 form the fast
/// corridor, nodes 0-2-3 the alternative; all edges 1000 m.
///
/// ```text
///     1
///    / \      edge 0: 0-1 (100 km/h)   edge 1: 1-3 (100 km/h)
///   0   3     edge 2: 0-2 ( 50 km/h)   edge 3: 2-3 ( 50 km/h)
///    \ /
///     2
/// ```
pub fn diamond_network() -> RoadNetwork {
    create_network(&[
        SpeedEdge::new(0, 1, 1000.0, 100),
        SpeedEdge::new(1, 3, 1000.0, 100),
        SpeedEdge::new(0, 2, 1000.0, 50),
        SpeedEdge::new(2, 3, 1000.0, 50),
    ])
}

/// Predictions for [`diamond_network`]: the fast corridor (links 0 and 2)
/// is quick in the first hour of the day and congested at hour 8; the
/// alternative has no predictions at all.
pub fn diamond_predictions() -> Vec<TravelTimeRow> {
    vec![
        prediction(0, "car", 0, 30_000),
        prediction(2, "car", 0, 30_000),
        prediction(0, "car", 8, 200_000),
        prediction(2, "car", 8, 200_000),
    ]
}

#[test]
fn build_dummy_network() {
    let network = diamond_network();
    assert_eq!(network.node_count(), 4);
    assert_eq!(network.edge_count(), 4);
}
