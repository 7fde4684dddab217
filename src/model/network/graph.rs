//! Road network storage on top of a petgraph adjacency structure

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::{BaseEdge, RoadNode};
use super::flags::EdgeFlags;
use crate::{EdgeId, NodeId};

/// Persistent road network. Edges are stored once and traversed in both
/// directions; node and edge ids are dense and stable once the network is
/// built. The network is read-only while requests are in flight.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub graph: UnGraph<RoadNode, BaseEdge>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, external_id: u64) -> NodeId {
        self.graph.add_node(RoadNode { external_id }).index() as NodeId
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, distance_m: f64, flags: EdgeFlags) -> EdgeId {
        self.graph
            .add_edge(
                NodeIndex::new(from as usize),
                NodeIndex::new(to as usize),
                BaseEdge { distance_m, flags },
            )
            .index() as EdgeId
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn distance(&self, edge: EdgeId) -> f64 {
        self.edge(edge).distance_m
    }

    pub fn flags(&self, edge: EdgeId) -> EdgeFlags {
        self.edge(edge).flags
    }

    /// Endpoints of an edge in storage orientation.
    pub fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        let (from, to) = self
            .graph
            .edge_endpoints(EdgeIndex::new(edge as usize))
            .unwrap_or_else(|| panic!("no edge {edge} in the road network"));
        (from.index() as NodeId, to.index() as NodeId)
    }

    pub(crate) fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.graph
            .edges(NodeIndex::new(node as usize))
            .map(|edge| edge.id().index() as EdgeId)
    }

    fn edge(&self, edge: EdgeId) -> &BaseEdge {
        self.graph
            .edge_weight(EdgeIndex::new(edge as usize))
            .unwrap_or_else(|| panic!("no edge {edge} in the road network"))
    }
}
