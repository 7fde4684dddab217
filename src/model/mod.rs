//! Data model for time-dependent road routing
//!
//! Contains the road network storage, the query-time overlay with virtual
//! edges, the external link numbering and the travel-time prediction table.

pub mod engine;
pub mod links;
pub mod network;
pub mod overlay;
pub mod travel_times;

// Re-export of the main model structures
pub use engine::{RoutingEngine, VehicleProfile};
pub use network::{BaseEdge, EdgeFlags, RoadNetwork, RoadNode};
pub use overlay::{EdgeTraversal, QueryOverlay, TraversalKey};
pub use travel_times::{ModeId, TravelTimeRow, TravelTimeTable};
