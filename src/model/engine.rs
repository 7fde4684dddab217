//! Immutable routing engine wiring
//!
//! Everything a request needs is assembled once at startup into a single
//! record and shared by reference across request threads. There are no
//! delegate chains to follow at request time: weighting selection goes
//! through an explicit strategy table frozen during construction.

use std::sync::Arc;

use hashbrown::HashMap;
use serde::Deserialize;

use super::network::RoadNetwork;
use super::travel_times::TravelTimeTable;
use crate::error::Error;
use crate::routing::weighting::{
    FreeFlowWeighting, TimeDependentWeighting, WEIGHTING_FREEFLOW, WEIGHTING_TD, Weighting,
};

/// Vehicle profile selectable per request. The name doubles as the mode key
/// of the travel-time table.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleProfile {
    pub name: String,
    pub max_speed_kmh: f64,
}

/// Constructor entry of the weighting strategy table.
type WeightingCtor = fn(&RoutingEngine, &VehicleProfile) -> Box<dyn Weighting>;

/// Immutable wiring record: network, prediction table, vehicle profiles and
/// the weighting strategy table. Never mutated while requests are in flight.
pub struct RoutingEngine {
    pub network: RoadNetwork,
    pub travel_times: Arc<TravelTimeTable>,
    profiles: HashMap<String, VehicleProfile>,
    weightings: HashMap<&'static str, WeightingCtor>,
    heading_penalty_ms: f64,
}

impl RoutingEngine {
    pub(crate) fn new(
        network: RoadNetwork,
        travel_times: Arc<TravelTimeTable>,
        profiles: Vec<VehicleProfile>,
        heading_penalty_secs: f64,
    ) -> Self {
        let mut weightings: HashMap<&'static str, WeightingCtor> = HashMap::new();
        weightings.insert(WEIGHTING_FREEFLOW, |engine, profile| {
            Box::new(FreeFlowWeighting::new(
                profile.max_speed_kmh,
                engine.heading_penalty_ms,
            ))
        });
        weightings.insert(WEIGHTING_TD, |engine, profile| {
            Box::new(TimeDependentWeighting::new(
                Arc::clone(&engine.travel_times),
                &profile.name,
                profile.max_speed_kmh,
                engine.heading_penalty_ms,
            ))
        });

        Self {
            network,
            travel_times,
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.name.clone(), profile))
                .collect(),
            weightings,
            heading_penalty_ms: heading_penalty_secs * 1000.0,
        }
    }

    pub fn heading_penalty_ms(&self) -> f64 {
        self.heading_penalty_ms
    }

    pub fn profile(&self, vehicle: &str) -> Result<&VehicleProfile, Error> {
        self.profiles
            .get(vehicle)
            .ok_or_else(|| Error::UnknownProfile(vehicle.to_string()))
    }

    /// Resolves the strategy table for one request. The returned weighting
    /// owns its references and is safe to hand to a search on any thread.
    ///
    /// # Errors
    ///
    /// Returns an error when the weighting or vehicle name is not registered.
    pub fn weighting(&self, weighting: &str, vehicle: &str) -> Result<Box<dyn Weighting>, Error> {
        let profile = self.profile(vehicle)?;
        let ctor = self
            .weightings
            .get(weighting)
            .ok_or_else(|| Error::UnknownWeighting(weighting.to_string()))?;
        Ok(ctor(self, profile))
    }

    /// Names accepted by [`Self::weighting`], for request validation.
    pub fn weighting_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.weightings.keys().copied()
    }
}
