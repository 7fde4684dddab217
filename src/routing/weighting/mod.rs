//! Per-edge cost functions handed to the search algorithm
//!
//! A search consults these millions of times per request, so implementations
//! are cheap, allocation-free and safe to call concurrently from any number
//! of request threads. An infinite cost means "do not expand this edge in
//! this direction" and is a normal outcome for one-way and access-restricted
//! edges, never an error.

mod freeflow;
mod td;

pub use freeflow::FreeFlowWeighting;
pub use td::TimeDependentWeighting;

use crate::model::overlay::EdgeTraversal;
use crate::{EdgeId, Timestamp, Weight};

/// Request-time name of the static free-flow weighting.
pub const WEIGHTING_FREEFLOW: &str = "freeflow";
/// Request-time name of the time-dependent weighting.
pub const WEIGHTING_TD: &str = "td";

/// Milliseconds needed to cover one meter at one km/h.
pub(crate) const SPEED_CONV: f64 = 3_600.0;

/// Per-edge cost function consulted by the search loop.
pub trait Weighting: Send + Sync {
    /// Name used for request-time selection.
    fn name(&self) -> &'static str;

    /// Lower bound for any cost this weighting can return for an edge of the
    /// given length, regardless of direction or departure time. Goal-directed
    /// searches rely on this never exceeding [`Self::edge_weight`].
    fn min_weight(&self, distance_m: f64) -> Weight;

    /// Cost in milliseconds of `traversal`, entered from `prev_edge`,
    /// departing at `departure` (seconds since midnight) when known.
    /// `f64::INFINITY` marks the edge as inadmissible in this direction.
    fn edge_weight(
        &self,
        traversal: &EdgeTraversal,
        prev_edge: Option<EdgeId>,
        departure: Option<Timestamp>,
    ) -> Weight;
}

/// Static cost of a traversal: distance over the stored directional
/// free-flow speed, plus the heading penalty on unfavored traversals. A
/// stored speed of zero yields an infinite cost.
pub(crate) fn static_cost(traversal: &EdgeTraversal, heading_penalty_ms: f64) -> Weight {
    let speed_kmh = f64::from(traversal.flags.speed_kmh(traversal.reverse));
    if speed_kmh == 0.0 {
        return f64::INFINITY;
    }
    let mut cost = traversal.distance_m / speed_kmh * SPEED_CONV;
    if traversal.unfavored {
        cost += heading_penalty_ms;
    }
    cost
}

/// Guards time-dependent evaluation against a closed direction. The search
/// only expands directions whose static cost is finite; a time-dependent
/// query for a closed direction is a caller fault and fails loudly instead
/// of returning a plausible cost.
pub(crate) fn assert_direction_open(traversal: &EdgeTraversal) {
    assert!(
        traversal.flags.access(traversal.reverse),
        "cost requested for a closed direction on edge {} (reverse: {}, forward open: {}, backward open: {})",
        traversal.base_edge,
        traversal.reverse,
        traversal.flags.access(false),
        traversal.flags.access(true),
    );
}
