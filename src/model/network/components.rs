//! Road network components - junction nodes and base edges

use super::flags::EdgeFlags;

/// Junction node of the road network
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// Stable id of the node in the source data set
    pub external_id: u64,
}

/// Persisted, bidirectional road edge. Stored once and traversed in both
/// directions; read-only once the network is built.
#[derive(Debug, Clone)]
pub struct BaseEdge {
    /// Length in meters
    pub distance_m: f64,
    /// Packed directional access/speed word
    pub flags: EdgeFlags,
}
