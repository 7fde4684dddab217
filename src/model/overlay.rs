//! Query-time overlay over the road network
//!
//! A query point that lies mid-edge splits the underlying edge into virtual
//! pieces. Virtual edges carry ids past the real edge range and remember the
//! directed traversal of the base edge they were cut from; every read that
//! depends on edge identity resolves a virtual id back to that base
//! traversal before anything downstream sees it. The overlay is
//! request-local and never outlives the request that built it.

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;

use super::network::{EdgeFlags, RoadNetwork};
use crate::{EdgeId, NodeId};

/// Directed traversal of a base edge, packed as `edge * 2 + direction bit`.
pub type TraversalKey = u32;

pub fn encode_key(edge: EdgeId, reverse: bool) -> TraversalKey {
    edge * 2 + TraversalKey::from(reverse)
}

pub fn decode_key(key: TraversalKey) -> (EdgeId, bool) {
    (key / 2, key & 1 == 1)
}

/// One direction of travel across an edge, with every identity-dependent
/// field already resolved to the underlying base edge. This is the unit
/// handed to weightings and path-detail builders.
#[derive(Debug, Clone, Copy)]
pub struct EdgeTraversal {
    /// Edge id as seen by the search; may be virtual.
    pub edge: EdgeId,
    /// Underlying base edge.
    pub base_edge: EdgeId,
    /// Direction relative to the base edge's storage orientation.
    pub reverse: bool,
    /// Length of the traversed edge (a virtual piece is shorter than its
    /// base edge).
    pub distance_m: f64,
    /// The base edge's stored flag word.
    pub flags: EdgeFlags,
    /// The direction-change penalty applies when entering this edge.
    pub unfavored: bool,
}

#[derive(Debug, Clone)]
struct VirtualEdge {
    from: NodeId,
    to: NodeId,
    distance_m: f64,
    /// Base traversal this piece was cut from, in the piece's forward
    /// orientation.
    original_key: TraversalKey,
}

/// Request-local view of the network plus the virtual nodes and edges
/// created for mid-edge query points.
pub struct QueryOverlay<'a> {
    network: &'a RoadNetwork,
    virtual_edges: Vec<VirtualEdge>,
    virtual_adjacency: HashMap<NodeId, Vec<EdgeId>>,
    virtual_nodes: u32,
    unfavored: FixedBitSet,
}

impl<'a> QueryOverlay<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self {
            network,
            virtual_edges: Vec::new(),
            virtual_adjacency: HashMap::new(),
            virtual_nodes: 0,
            unfavored: FixedBitSet::with_capacity(network.edge_count()),
        }
    }

    pub fn network(&self) -> &RoadNetwork {
        self.network
    }

    pub fn is_virtual_edge(&self, edge: EdgeId) -> bool {
        (edge as usize) >= self.network.edge_count()
    }

    pub fn is_virtual_node(&self, node: NodeId) -> bool {
        (node as usize) >= self.network.node_count()
    }

    /// Splits `edge` at `fraction` of its length, measured from the storage
    /// start node. Returns the new virtual node and the two virtual pieces,
    /// both oriented along the base edge's storage direction.
    pub fn split_edge(&mut self, edge: EdgeId, fraction: f64) -> (NodeId, EdgeId, EdgeId) {
        assert!(
            !self.is_virtual_edge(edge),
            "cannot split virtual edge {edge}"
        );
        assert!(
            fraction > 0.0 && fraction < 1.0,
            "split fraction must lie strictly inside the edge, got {fraction}"
        );
        let (from, to) = self.network.endpoints(edge);
        let distance = self.network.distance(edge);
        let node = self.network.node_count() as NodeId + self.virtual_nodes;
        self.virtual_nodes += 1;

        let key = encode_key(edge, false);
        let first = self.push_virtual(from, node, distance * fraction, key);
        let second = self.push_virtual(node, to, distance * (1.0 - fraction), key);
        (node, first, second)
    }

    /// Flags an edge as an unfavored direction change at a start/stop/via
    /// point; the weighting adds the heading penalty for it.
    pub fn mark_unfavored(&mut self, edge: EdgeId) {
        self.unfavored.grow(edge as usize + 1);
        self.unfavored.insert(edge as usize);
    }

    /// Resolves any edge id to `(base edge, direction relative to storage)`.
    ///
    /// A virtual piece resolves to the traversal of the base edge it was cut
    /// from; traversing a piece backwards flips the direction bit of that
    /// key. Constant time, no side effects. Panics when a virtual edge
    /// carries a key outside the real edge range: the traversal-to-link
    /// bijection is broken at that point and no downstream mapping is safe.
    pub fn resolve(&self, edge: EdgeId, reverse: bool) -> (EdgeId, bool) {
        match self.virtual_edge(edge) {
            Some(virt) => {
                let key = virt.original_key ^ TraversalKey::from(reverse);
                let (base, base_reverse) = decode_key(key);
                assert!(
                    (base as usize) < self.network.edge_count(),
                    "corrupt original traversal key {key} on virtual edge {edge}: no base edge {base}"
                );
                (base, base_reverse)
            }
            None => (edge, reverse),
        }
    }

    /// Materializes the traversal view of `edge` in the given direction.
    pub fn traversal(&self, edge: EdgeId, reverse: bool) -> EdgeTraversal {
        let (base_edge, base_reverse) = self.resolve(edge, reverse);
        let distance_m = self
            .virtual_edge(edge)
            .map_or_else(|| self.network.distance(edge), |virt| virt.distance_m);
        EdgeTraversal {
            edge,
            base_edge,
            reverse: base_reverse,
            distance_m,
            flags: self.network.flags(base_edge),
            unfavored: self.unfavored.contains(edge as usize),
        }
    }

    /// Expansion candidates when leaving `node`: each incident edge (real or
    /// virtual) in outgoing orientation, paired with its target node.
    pub fn traversals_from(&self, node: NodeId) -> Vec<(NodeId, EdgeTraversal)> {
        let mut candidates = Vec::new();
        if !self.is_virtual_node(node) {
            for edge in self.network.incident_edges(node) {
                let (from, to) = self.network.endpoints(edge);
                let (target, reverse) = if from == node { (to, false) } else { (from, true) };
                candidates.push((target, self.traversal(edge, reverse)));
            }
        }
        if let Some(edges) = self.virtual_adjacency.get(&node) {
            for &edge in edges {
                let virt = &self.virtual_edges[edge as usize - self.network.edge_count()];
                let (target, reverse) = if virt.from == node {
                    (virt.to, false)
                } else {
                    (virt.from, true)
                };
                candidates.push((target, self.traversal(edge, reverse)));
            }
        }
        candidates
    }

    fn push_virtual(
        &mut self,
        from: NodeId,
        to: NodeId,
        distance_m: f64,
        original_key: TraversalKey,
    ) -> EdgeId {
        let edge = (self.network.edge_count() + self.virtual_edges.len()) as EdgeId;
        self.virtual_edges.push(VirtualEdge {
            from,
            to,
            distance_m,
            original_key,
        });
        self.virtual_adjacency.entry(from).or_default().push(edge);
        self.virtual_adjacency.entry(to).or_default().push(edge);
        self.unfavored.grow(edge as usize + 1);
        edge
    }

    fn virtual_edge(&self, edge: EdgeId) -> Option<&VirtualEdge> {
        (edge as usize)
            .checked_sub(self.network.edge_count())
            .map(|index| &self.virtual_edges[index])
    }
}
