//! Time-dependent weighting backed by the prediction table

use std::sync::Arc;

use super::{SPEED_CONV, WEIGHTING_TD, Weighting, assert_direction_open, static_cost};
use crate::model::links::link_id;
use crate::model::overlay::EdgeTraversal;
use crate::model::travel_times::{ModeId, TravelTimeTable};
use crate::{EdgeId, Timestamp, Weight};

/// Cost model consulting the prediction table. With a departure time, the
/// prediction for the traversal's link at that (quantized) time is the cost,
/// verbatim. Without a departure time, or when the table holds no prediction
/// for the link and bucket, the cost degrades to the free-flow value of the
/// same traversal. The degradation is deterministic: the same traversal and
/// departure always produce the same cost.
pub struct TimeDependentWeighting {
    table: Arc<TravelTimeTable>,
    /// `None` when the table carries no predictions for this vehicle at all;
    /// every evaluation then takes the free-flow fallback.
    mode: Option<ModeId>,
    max_speed_kmh: f64,
    heading_penalty_ms: f64,
}

impl TimeDependentWeighting {
    pub fn new(
        table: Arc<TravelTimeTable>,
        mode_name: &str,
        max_speed_kmh: f64,
        heading_penalty_ms: f64,
    ) -> Self {
        let mode = table.resolve_mode(mode_name);
        Self {
            table,
            mode,
            max_speed_kmh,
            heading_penalty_ms,
        }
    }
}

impl Weighting for TimeDependentWeighting {
    fn name(&self) -> &'static str {
        WEIGHTING_TD
    }

    fn min_weight(&self, distance_m: f64) -> Weight {
        distance_m / self.max_speed_kmh * SPEED_CONV
    }

    fn edge_weight(
        &self,
        traversal: &EdgeTraversal,
        _prev_edge: Option<EdgeId>,
        departure: Option<Timestamp>,
    ) -> Weight {
        let Some(at) = departure else {
            return static_cost(traversal, self.heading_penalty_ms);
        };
        assert_direction_open(traversal);
        if let Some(mode) = self.mode {
            if let Some(predicted) = self.table.lookup(mode, link_id(traversal), at) {
                return f64::from(predicted);
            }
        }
        static_cost(traversal, self.heading_penalty_ms)
    }
}
