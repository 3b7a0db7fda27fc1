//! Server shared state
//!
//! Holds configuration and the geocoder for the HTTP server. Everything
//! here is built once at startup and read-only afterwards, so the state is
//! shared behind a plain `Arc` with no locking.

use crate::config::Config;
use crate::geocode::Geocoder;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Reverse geocoder, constructed once at startup
    pub geocoder: Geocoder,
}

impl AppState {
    /// Create new application state
    ///
    /// Builds the geocoder, which loads its embedded place dataset; this is
    /// the expensive part of startup.
    pub fn new(config: Config) -> Self {
        let geocoder = Geocoder::new(config.geocoder.max_match_distance);
        Self { config, geocoder }
    }
}
