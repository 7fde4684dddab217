//! Reference time-dependent search
//!
//! One worker per request runs this to completion, consulting the weighting
//! synchronously for every expansion; an infinite cost prunes the edge.
//! Production deployments are expected to bring their own search, since this
//! crate defines the cost side of the contract; tests and small tools route
//! with this one.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;

use crate::error::Error;
use crate::model::overlay::{EdgeTraversal, QueryOverlay};
use crate::routing::path::Path;
use crate::routing::weighting::Weighting;
use crate::{NodeId, Timestamp, Weight};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: Weight,
    node: NodeId,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Time-dependent Dijkstra from `from` to `to` over the overlay. With a
/// departure time the weighting is queried at the clock time each edge is
/// entered; without one the search is plain static Dijkstra.
///
/// # Errors
///
/// Returns [`Error::NoRouteFound`] when no admissible edge sequence connects
/// the query points.
pub fn route(
    overlay: &QueryOverlay,
    weighting: &dyn Weighting,
    from: NodeId,
    to: NodeId,
    departure: Option<Timestamp>,
) -> Result<Path, Error> {
    let mut distances: HashMap<NodeId, Weight> = HashMap::new();
    let mut predecessors: HashMap<NodeId, (NodeId, EdgeTraversal)> = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(from, 0.0);
    heap.push(State {
        cost: 0.0,
        node: from,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if node == to {
            break;
        }
        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        let at = departure.map(|start| start + (cost / 1000.0) as Timestamp);
        let prev_edge = predecessors.get(&node).map(|&(_, entered)| entered.edge);
        for (target, traversal) in overlay.traversals_from(node) {
            let edge_cost = weighting.edge_weight(&traversal, prev_edge, at);
            if edge_cost.is_infinite() {
                // Closed in this direction; a normal outcome, not an error.
                continue;
            }
            let next_cost = cost + edge_cost;
            match distances.entry(target) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(target, (node, traversal));
                    heap.push(State {
                        cost: next_cost,
                        node: target,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(target, (node, traversal));
                        heap.push(State {
                            cost: next_cost,
                            node: target,
                        });
                    }
                }
            }
        }
    }

    if from != to && !predecessors.contains_key(&to) {
        return Err(Error::NoRouteFound);
    }

    // Follow predecessors backward from target to start
    let mut traversals = Vec::new();
    let mut current = to;
    while current != from {
        let &(prev, traversal) = predecessors.get(&current).ok_or(Error::NoRouteFound)?;
        traversals.push(traversal);
        current = prev;
    }
    traversals.reverse();

    Ok(Path::from_traversals(traversals, weighting, departure))
}
