//! Engine initialization

use std::sync::Arc;

use log::{info, warn};

use super::config::{EngineConfig, validate_config};
use super::travel_times::load_travel_times;
use crate::error::Error;
use crate::model::engine::RoutingEngine;
use crate::model::network::RoadNetwork;

/// Builds the immutable `RoutingEngine` in one explicit, ordered sequence:
/// validate the configuration, load the travel-time table, then freeze the
/// vehicle profiles and the weighting strategy table into a single record.
/// Any failure aborts the build; the caller must not serve requests without
/// an engine.
///
/// The network is passed in ready-built because graph import is the job of
/// an external loader.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the travel-time
/// table cannot be loaded.
pub fn create_engine(config: &EngineConfig, network: RoadNetwork) -> Result<RoutingEngine, Error> {
    validate_config(config)?;

    info!(
        "loading travel time predictions: {}",
        config.travel_time_file.display()
    );
    let travel_times = load_travel_times(&config.travel_time_file)?;

    for profile in &config.profiles {
        if travel_times.resolve_mode(&profile.name).is_none() {
            warn!(
                "no predictions for vehicle profile '{}'; time-dependent requests will fall \
                back to free-flow costs",
                profile.name
            );
        }
    }

    let engine = RoutingEngine::new(
        network,
        Arc::new(travel_times),
        config.profiles.clone(),
        config.heading_penalty_secs,
    );
    info!(
        "routing engine ready: {} nodes, {} edges, {} predictions",
        engine.network.node_count(),
        engine.network.edge_count(),
        engine.travel_times.prediction_count()
    );
    Ok(engine)
}
