//! Time-dependent road routing core
//!
//! This crate bridges two edge-numbering schemes: the internal ids of a
//! persisted road network and the link ids of an externally produced
//! travel-time prediction table. On top of that bridge it provides the
//! per-edge cost functions a shortest-path search consults millions of times
//! per request, and the path-detail accumulators that report per-link values
//! of a computed route.
//!
//! The search algorithm itself, data import and service wiring are external
//! collaborators; [`routing::dijkstra`] ships a reference search so the cost
//! side of the contract can be exercised end to end.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Internal node id of the road network. Ids at or above the network's node
/// count denote virtual query nodes.
pub type NodeId = u32;
/// Internal edge id. Ids at or above the network's edge count denote virtual
/// edges created for mid-edge query points.
pub type EdgeId = u32;
/// Link id in the external numbering scheme; each base edge owns two.
pub type LinkId = u32;
/// Departure time in seconds since midnight.
pub type Timestamp = u32;
/// Travel-time prediction in milliseconds.
pub type TravelTimeMs = u32;
/// Edge cost in milliseconds; `f64::INFINITY` marks an inadmissible edge.
pub type Weight = f64;

pub const SECONDS_PER_DAY: Timestamp = 86_400;
/// Native resolution of the travel-time table.
pub const BUCKET_SECONDS: Timestamp = 3_600;
/// Number of buckets per day at the table's native resolution.
pub const TIME_BUCKETS: usize = (SECONDS_PER_DAY / BUCKET_SECONDS) as usize;
/// Default penalty in seconds for entering an edge in an unfavored direction
/// at a start/stop/via point.
pub const DEFAULT_HEADING_PENALTY_SECS: f64 = 300.0;
