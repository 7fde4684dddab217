//! Path detail accumulation
//!
//! Detail builders walk the edges of a computed path once, in order, and
//! emit maximal intervals of constant value. Builders only decide whether an
//! edge starts a new interval and expose the value of the current one; the
//! walker owns the open/close bookkeeping. One builder instance serves one
//! path of one request and is discarded afterwards.

mod builders;

pub use builders::{
    AverageSpeedDetails, DETAIL_AVERAGE_SPEED, DETAIL_EDGE_ID, DETAIL_LINK_ID, DETAIL_TIME,
    EdgeIdDetails, LinkIdDetails, TimeDetails, create_builders,
};

use hashbrown::HashMap;
use serde::Serialize;

use crate::model::overlay::EdgeTraversal;
use crate::routing::path::Path;

/// Value carried by a path-detail interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetailValue {
    Int(u64),
    Float(f64),
}

/// Maximal run of consecutive path edges sharing one derived value,
/// inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathDetailInterval {
    pub first: usize,
    pub last: usize,
    pub value: DetailValue,
}

/// One requested detail kind.
pub trait PathDetailsBuilder {
    /// Name the intervals are reported under.
    fn name(&self) -> &'static str;

    /// Advances the builder to the next edge of the path; `true` opens a new
    /// interval at this position. Must return `true` for the first edge.
    fn is_edge_different(&mut self, traversal: &EdgeTraversal) -> bool;

    /// Value of the interval currently open.
    fn current_value(&self) -> DetailValue;
}

struct Collector<'a> {
    builder: Box<dyn PathDetailsBuilder + 'a>,
    intervals: Vec<PathDetailInterval>,
    open_at: usize,
    open_value: Option<DetailValue>,
}

impl Collector<'_> {
    fn close(&mut self, position: usize) {
        if let Some(value) = self.open_value.take() {
            self.intervals.push(PathDetailInterval {
                first: self.open_at,
                last: position - 1,
                value,
            });
        }
    }
}

/// Walks a path once and collects the intervals of every builder, keyed by
/// builder name.
pub fn collect_path_details<'a>(
    path: &Path,
    builders: Vec<Box<dyn PathDetailsBuilder + 'a>>,
) -> HashMap<&'static str, Vec<PathDetailInterval>> {
    let mut collectors: Vec<Collector<'a>> = builders
        .into_iter()
        .map(|builder| Collector {
            builder,
            intervals: Vec::new(),
            open_at: 0,
            open_value: None,
        })
        .collect();

    for (position, traversal) in path.traversals.iter().enumerate() {
        for collector in &mut collectors {
            if collector.builder.is_edge_different(traversal) {
                collector.close(position);
                collector.open_at = position;
                collector.open_value = Some(collector.builder.current_value());
            }
        }
    }

    let end = path.traversals.len();
    collectors
        .into_iter()
        .map(|mut collector| {
            collector.close(end);
            (collector.builder.name(), collector.intervals)
        })
        .collect()
}
