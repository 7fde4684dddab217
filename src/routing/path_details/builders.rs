//! Built-in detail builders

use super::{DetailValue, PathDetailsBuilder};
use crate::error::Error;
use crate::model::links::link_id;
use crate::model::overlay::EdgeTraversal;
use crate::routing::path::Path;
use crate::{EdgeId, LinkId};

pub const DETAIL_LINK_ID: &str = "link_id";
pub const DETAIL_TIME: &str = "time";
pub const DETAIL_EDGE_ID: &str = "edge_id";
pub const DETAIL_AVERAGE_SPEED: &str = "average_speed";

/// External link id of each traversed edge. The pieces of a split edge
/// resolve to the same link, so consecutive equal ids collapse into one
/// interval.
#[derive(Default)]
pub struct LinkIdDetails {
    current: Option<LinkId>,
}

impl LinkIdDetails {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathDetailsBuilder for LinkIdDetails {
    fn name(&self) -> &'static str {
        DETAIL_LINK_ID
    }

    fn is_edge_different(&mut self, traversal: &EdgeTraversal) -> bool {
        let id = link_id(traversal);
        if self.current != Some(id) {
            self.current = Some(id);
            true
        } else {
            false
        }
    }

    fn current_value(&self) -> DetailValue {
        match self.current {
            Some(id) => DetailValue::Int(u64::from(id)),
            None => panic!("value read before the first edge"),
        }
    }
}

/// Travel time in milliseconds attributed to each edge. Every edge opens its
/// own interval; the interval values sum to the path's total time.
pub struct TimeDetails<'a> {
    times_ms: &'a [u64],
    position: usize,
    current: u64,
}

impl<'a> TimeDetails<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self {
            times_ms: &path.times_ms,
            position: 0,
            current: 0,
        }
    }
}

impl PathDetailsBuilder for TimeDetails<'_> {
    fn name(&self) -> &'static str {
        DETAIL_TIME
    }

    fn is_edge_different(&mut self, _traversal: &EdgeTraversal) -> bool {
        self.current = self.times_ms[self.position];
        self.position += 1;
        true
    }

    fn current_value(&self) -> DetailValue {
        DetailValue::Int(self.current)
    }
}

/// Internal id of each traversed edge, virtual ids included. A debugging
/// detail; external consumers want [`LinkIdDetails`].
#[derive(Default)]
pub struct EdgeIdDetails {
    current: Option<EdgeId>,
}

impl EdgeIdDetails {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathDetailsBuilder for EdgeIdDetails {
    fn name(&self) -> &'static str {
        DETAIL_EDGE_ID
    }

    fn is_edge_different(&mut self, traversal: &EdgeTraversal) -> bool {
        if self.current != Some(traversal.edge) {
            self.current = Some(traversal.edge);
            true
        } else {
            false
        }
    }

    fn current_value(&self) -> DetailValue {
        match self.current {
            Some(id) => DetailValue::Int(u64::from(id)),
            None => panic!("value read before the first edge"),
        }
    }
}

/// Average speed in km/h over each edge, consecutive equal values merged.
pub struct AverageSpeedDetails<'a> {
    times_ms: &'a [u64],
    position: usize,
    current: f64,
    started: bool,
}

impl<'a> AverageSpeedDetails<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self {
            times_ms: &path.times_ms,
            position: 0,
            current: 0.0,
            started: false,
        }
    }
}

impl PathDetailsBuilder for AverageSpeedDetails<'_> {
    fn name(&self) -> &'static str {
        DETAIL_AVERAGE_SPEED
    }

    fn is_edge_different(&mut self, traversal: &EdgeTraversal) -> bool {
        let time_ms = self.times_ms[self.position];
        self.position += 1;
        let speed_kmh = if time_ms == 0 {
            0.0
        } else {
            traversal.distance_m * 3_600.0 / time_ms as f64
        };
        if !self.started || speed_kmh != self.current {
            self.current = speed_kmh;
            self.started = true;
            true
        } else {
            false
        }
    }

    fn current_value(&self) -> DetailValue {
        DetailValue::Float(self.current)
    }
}

/// Builds the requested detail builders for one path. Detail names come from
/// the request; asking for an unknown one is a request error, not a panic.
///
/// # Errors
///
/// Returns [`Error::UnknownPathDetail`] for a name no builder answers to.
pub fn create_builders<'a>(
    requested: &[String],
    path: &'a Path,
) -> Result<Vec<Box<dyn PathDetailsBuilder + 'a>>, Error> {
    let mut builders: Vec<Box<dyn PathDetailsBuilder + 'a>> =
        Vec::with_capacity(requested.len());
    for name in requested {
        match name.as_str() {
            DETAIL_LINK_ID => builders.push(Box::new(LinkIdDetails::new())),
            DETAIL_TIME => builders.push(Box::new(TimeDetails::new(path))),
            DETAIL_EDGE_ID => builders.push(Box::new(EdgeIdDetails::new())),
            DETAIL_AVERAGE_SPEED => builders.push(Box::new(AverageSpeedDetails::new(path))),
            other => return Err(Error::UnknownPathDetail(other.to_string())),
        }
    }
    Ok(builders)
}
