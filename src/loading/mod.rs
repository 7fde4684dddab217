//! Startup loading: configuration, travel-time predictions, engine wiring
//!
//! Everything here runs once before the first request is served. Failures
//! are returned to the startup caller, which must refuse to serve rather
//! than route with undefined costs.

mod builder;
mod config;
mod travel_times;

pub use builder::create_engine;
pub use config::EngineConfig;
pub use travel_times::{load_travel_times, table_from_rows};
