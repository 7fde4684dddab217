//! Immutable table of time-bucketed travel-time predictions
//!
//! Built once at startup from the external producer's export and read-only
//! for the process lifetime. Lookups are plain shared reads with no locking,
//! safe from any number of concurrent request threads.

use std::num::NonZeroU32;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::{BUCKET_SECONDS, LinkId, SECONDS_PER_DAY, TIME_BUCKETS, Timestamp, TravelTimeMs};

/// Interned index of a prediction mode (one per vehicle profile name).
pub type ModeId = usize;

/// One raw prediction row as supplied by the external producer.
#[derive(Debug, Clone, Deserialize)]
pub struct TravelTimeRow {
    pub link_id: LinkId,
    pub mode: String,
    pub hour: u32,
    pub travel_time_ms: TravelTimeMs,
}

/// Process-wide prediction table keyed by (mode, link id, time bucket).
/// A missing entry means "no prediction available", which is a defined
/// condition, not an error; the weighting decides what to do with it.
#[derive(Debug, Default)]
pub struct TravelTimeTable {
    mode_index: HashMap<String, ModeId>,
    modes: Vec<ModeTable>,
}

#[derive(Debug, Default)]
struct ModeTable {
    by_link: HashMap<LinkId, [Option<NonZeroU32>; TIME_BUCKETS]>,
}

impl TravelTimeTable {
    /// Quantizes a departure time to the table's native resolution. The
    /// exporter applies the same rule when bucketing its predictions; the two
    /// sides must never diverge.
    pub fn bucket(departure: Timestamp) -> usize {
        ((departure % SECONDS_PER_DAY) / BUCKET_SECONDS) as usize
    }

    /// Resolves a mode name once per request; lookups then use the index.
    pub fn resolve_mode(&self, mode: &str) -> Option<ModeId> {
        self.mode_index.get(mode).copied()
    }

    /// Prediction for traversing `link` departing at `departure`, if the
    /// producer exported one for that bucket.
    pub fn lookup(&self, mode: ModeId, link: LinkId, departure: Timestamp) -> Option<TravelTimeMs> {
        self.modes.get(mode)?.by_link.get(&link)?[Self::bucket(departure)].map(NonZeroU32::get)
    }

    /// Total number of predictions held.
    pub fn prediction_count(&self) -> usize {
        self.modes
            .iter()
            .flat_map(|mode| mode.by_link.values())
            .map(|buckets| buckets.iter().flatten().count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.iter().all(|mode| mode.by_link.is_empty())
    }

    pub(crate) fn intern_mode(&mut self, mode: &str) -> ModeId {
        if let Some(&id) = self.mode_index.get(mode) {
            return id;
        }
        let id = self.modes.len();
        self.modes.push(ModeTable::default());
        self.mode_index.insert(mode.to_string(), id);
        id
    }

    /// Inserts one prediction; returns `false` when the slot was already
    /// occupied (duplicate export rows are rejected by the loader).
    pub(crate) fn insert(
        &mut self,
        mode: ModeId,
        link: LinkId,
        bucket: usize,
        travel_time_ms: NonZeroU32,
    ) -> bool {
        let buckets = self.modes[mode].by_link.entry(link).or_default();
        if buckets[bucket].is_some() {
            return false;
        }
        buckets[bucket] = Some(travel_time_ms);
        true
    }
}
