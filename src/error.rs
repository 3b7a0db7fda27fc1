//! Error types for revgeod

use thiserror::Error;

/// Main error type for revgeod operations
///
/// Display text matters here: request handlers write it verbatim into the
/// HTTP response body, and `CountryNotFound` in particular is part of the
/// wire contract.
#[derive(Error, Debug)]
pub enum Error {
    #[error("request must be in the form /query?<lon>&<lat>")]
    MalformedQuery,

    #[error("invalid coordinate {token:?}")]
    Coordinate {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("country not found")]
    CountryNotFound,

    #[error("geocoding error: {0}")]
    Geocode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for revgeod operations
pub type Result<T> = std::result::Result<T, Error>;
