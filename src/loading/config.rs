//! Engine configuration

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::DEFAULT_HEADING_PENALTY_SECS;
use crate::error::Error;
use crate::model::engine::VehicleProfile;

/// Configuration for building a `RoutingEngine`
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Predicted travel times, one CSV row per (link, mode, hour)
    pub travel_time_file: PathBuf,
    /// Vehicle profiles selectable per request
    pub profiles: Vec<VehicleProfile>,
    /// Penalty in seconds for entering an edge in an unfavored direction
    #[serde(default = "default_heading_penalty")]
    pub heading_penalty_secs: f64,
}

fn default_heading_penalty() -> f64 {
    DEFAULT_HEADING_PENALTY_SECS
}

impl EngineConfig {
    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        serde_json::from_reader(file)
            .map_err(|e| Error::InvalidData(format!("invalid engine configuration: {e}")))
    }
}

pub(crate) fn validate_config(config: &EngineConfig) -> Result<(), Error> {
    if !config.travel_time_file.exists() {
        return Err(Error::InvalidData(format!(
            "travel time file not found: {}",
            config.travel_time_file.display()
        )));
    }

    if config.profiles.is_empty() {
        return Err(Error::InvalidData(
            "no vehicle profiles provided in the configuration".to_string(),
        ));
    }

    for profile in &config.profiles {
        if profile.max_speed_kmh <= 0.0 {
            return Err(Error::InvalidData(format!(
                "vehicle profile '{}' has no positive maximum speed",
                profile.name
            )));
        }
    }

    if config.heading_penalty_secs < 0.0 {
        return Err(Error::InvalidData(
            "heading penalty must not be negative".to_string(),
        ));
    }

    Ok(())
}
