//! Static free-flow weighting

use super::{SPEED_CONV, WEIGHTING_FREEFLOW, Weighting, static_cost};
use crate::model::overlay::EdgeTraversal;
use crate::{EdgeId, Timestamp, Weight};

/// Cost model without predictions: distance over the directional free-flow
/// speed stored on the edge. Any supplied departure time is ignored.
#[derive(Debug, Clone)]
pub struct FreeFlowWeighting {
    max_speed_kmh: f64,
    heading_penalty_ms: f64,
}

impl FreeFlowWeighting {
    pub fn new(max_speed_kmh: f64, heading_penalty_ms: f64) -> Self {
        Self {
            max_speed_kmh,
            heading_penalty_ms,
        }
    }
}

impl Weighting for FreeFlowWeighting {
    fn name(&self) -> &'static str {
        WEIGHTING_FREEFLOW
    }

    fn min_weight(&self, distance_m: f64) -> Weight {
        distance_m / self.max_speed_kmh * SPEED_CONV
    }

    fn edge_weight(
        &self,
        traversal: &EdgeTraversal,
        _prev_edge: Option<EdgeId>,
        _departure: Option<Timestamp>,
    ) -> Weight {
        static_cost(traversal, self.heading_penalty_ms)
    }
}
