//! A computed route

use crate::Timestamp;
use crate::model::overlay::EdgeTraversal;
use crate::routing::weighting::Weighting;

/// Edge sequence of a computed route together with the per-edge travel times
/// used for reporting. `total_time_ms` is always the exact sum of
/// `times_ms`, so interval sums over the path details reconcile with the
/// reported total.
#[derive(Debug, Clone)]
pub struct Path {
    pub traversals: Vec<EdgeTraversal>,
    /// Travel time attributed to each edge, rounded to whole milliseconds.
    pub times_ms: Vec<u64>,
    pub total_time_ms: u64,
    pub distance_m: f64,
    pub departure: Option<Timestamp>,
}

impl Path {
    /// Re-walks an edge sequence with the weighting that produced it,
    /// attributing one rounded millisecond value per edge. The walk advances
    /// the departure time edge by edge, so time-dependent costs are
    /// evaluated the way the search saw them.
    pub fn from_traversals(
        traversals: Vec<EdgeTraversal>,
        weighting: &dyn Weighting,
        departure: Option<Timestamp>,
    ) -> Self {
        let mut times_ms = Vec::with_capacity(traversals.len());
        let mut elapsed_ms = 0u64;
        let mut distance_m = 0.0;
        let mut prev_edge = None;
        for traversal in &traversals {
            let at = departure.map(|start| start + (elapsed_ms / 1000) as Timestamp);
            let cost = weighting.edge_weight(traversal, prev_edge, at);
            debug_assert!(
                cost.is_finite(),
                "computed path contains an inadmissible edge"
            );
            let edge_ms = cost.round() as u64;
            times_ms.push(edge_ms);
            elapsed_ms += edge_ms;
            distance_m += traversal.distance_m;
            prev_edge = Some(traversal.edge);
        }
        Self {
            traversals,
            times_ms,
            total_time_ms: elapsed_ms,
            distance_m,
            departure,
        }
    }

    pub fn len(&self) -> usize {
        self.traversals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traversals.is_empty()
    }
}
