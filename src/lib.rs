//! revgeod: Reverse Geocoding Microservice
//!
//! A small HTTP service mapping a longitude/latitude pair to its enclosing
//! country, province, and city. The spatial lookup is delegated to the
//! `reverse_geocoder` crate (nearest populated place over an embedded
//! dataset); country metadata comes from `keshvar`. What lives here is the
//! glue: a single-route axum server, positional query parsing, JSON
//! serialization, and request logging.
//!
//! ## Wire format
//!
//! `GET /query?<lon>&<lat>` — two bare tokens split on `&`, no key names,
//! no URL encoding. Success is a JSON record; any failure is HTTP 500 with
//! a plain-text message.
//!
//! ## Quick Start
//!
//! ```rust
//! use revgeod::geocode::Geocoder;
//!
//! let geocoder = Geocoder::new(2.0);
//!
//! let location = geocoder.reverse_geocode(0.0, 52.0).unwrap();
//! assert_eq!(location.country_code_2, "GB");
//!
//! // Open ocean has no enclosing country.
//! assert!(geocoder.reverse_geocode(0.0, 0.0).is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod geocode;
pub mod query;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geocode::{Geocoder, Location};
