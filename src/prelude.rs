// Re-export key components
pub use crate::loading::{EngineConfig, create_engine, load_travel_times, table_from_rows};
pub use crate::model::links::link_id;
pub use crate::model::{
    BaseEdge, EdgeFlags, EdgeTraversal, QueryOverlay, RoadNetwork, RoutingEngine, TravelTimeRow,
    TravelTimeTable, VehicleProfile,
};
pub use crate::routing::dijkstra::route;
pub use crate::routing::path::Path;
pub use crate::routing::path_details::{
    DetailValue, PathDetailInterval, PathDetailsBuilder, collect_path_details, create_builders,
};
pub use crate::routing::weighting::{
    FreeFlowWeighting, TimeDependentWeighting, WEIGHTING_FREEFLOW, WEIGHTING_TD, Weighting,
};

// Core scalar types
pub use crate::Error;
pub use crate::{EdgeId, LinkId, NodeId, Timestamp, TravelTimeMs, Weight};
