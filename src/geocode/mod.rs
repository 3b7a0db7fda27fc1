//! Reverse geocoding
//!
//! Wraps the external lookup engine behind the one operation the service
//! needs: coordinates in, enclosing-place record out. The spatial work is
//! done entirely by the `reverse_geocoder` crate (nearest populated place
//! over its embedded dataset); country-level metadata comes from `keshvar`.
//! Nothing in this module indexes, loads, or walks geometry itself.

use crate::error::{Error, Result};
use reverse_geocoder::ReverseGeocoder;
use serde::{Deserialize, Serialize};

/// A resolved place, as written to the wire.
///
/// Field order here is serialization order and is part of the response
/// contract. `province` and `city` are omitted entirely when the dataset
/// does not supply them — never null, never empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub country_long: String,
    pub country_code_2: String,
    pub country_code_3: String,
    pub continent: String,
    pub region: String,
    pub subregion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Reverse geocoder with a bounded match distance.
///
/// One instance is built at startup and shared read-only across all request
/// handlers; construction parses the embedded dataset and is the expensive
/// part, lookups are cheap.
pub struct Geocoder {
    engine: ReverseGeocoder,
    max_match_distance: f64,
}

impl Geocoder {
    /// Build a geocoder.
    ///
    /// `max_match_distance` is in degrees: a nearest match farther than
    /// this from the queried point is treated as "no enclosing region"
    /// rather than returned, so open-ocean and polar coordinates report
    /// `country not found` instead of the closest coastal town.
    pub fn new(max_match_distance: f64) -> Self {
        Self {
            engine: ReverseGeocoder::new(),
            max_match_distance,
        }
    }

    /// Resolve a longitude/latitude pair to its enclosing place.
    ///
    /// Argument order is longitude first, matching the query format.
    pub fn reverse_geocode(&self, longitude: f64, latitude: f64) -> Result<Location> {
        // The engine takes (lat, lon).
        let found = self.engine.search((latitude, longitude));

        // The engine reports squared chord lengths on the unit sphere;
        // convert the configured degree cutoff to the same unit before
        // comparing.
        let max_chord = 2.0 * (self.max_match_distance.to_radians() / 2.0).sin();
        if found.distance > max_chord * max_chord {
            return Err(Error::CountryNotFound);
        }

        let record = found.record;
        let country = keshvar::Alpha2::try_from(record.cc.as_str())
            .map_err(|_| Error::Geocode(format!("unrecognized country code {:?}", record.cc)))?
            .to_country();

        let continent = display_name(&country.continent().to_string());
        // Countries outside the UN M49 scheme (Antarctica) have no region or
        // subregion; fall back one level each so the fields stay populated.
        let region = country
            .maybe_region()
            .map(|r| display_name(&r.to_string()))
            .unwrap_or_else(|| continent.clone());
        let subregion = country
            .maybe_subregion()
            .map(|s| display_name(&s.to_string()))
            .unwrap_or_else(|| region.clone());

        Ok(Location {
            country: country.iso_short_name().to_string(),
            country_long: country.iso_long_name().to_string(),
            country_code_2: record.cc.clone(),
            country_code_3: country.alpha3().to_string(),
            continent,
            region,
            subregion,
            province: Some(record.admin1.clone()).filter(|s| !s.is_empty()),
            city: Some(record.name.clone()).filter(|s| !s.is_empty()),
        })
    }
}

/// Turn a lowercase-hyphenated continent/region identifier into its
/// human-readable name: "north-america" becomes "North America".
fn display_name(identifier: &str) -> String {
    identifier
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DEFAULT_MAX_MATCH_DISTANCE;

    fn geocoder() -> Geocoder {
        Geocoder::new(DEFAULT_MAX_MATCH_DISTANCE)
    }

    #[test]
    fn test_united_kingdom() {
        let location = geocoder().reverse_geocode(0.0, 52.0).unwrap();

        assert_eq!(location.country_code_2, "GB");
        assert_eq!(location.country_code_3, "GBR");
        assert!(location.country.contains("United Kingdom"));
        assert_eq!(location.continent, "Europe");
        assert_eq!(location.subregion, "Northern Europe");
        assert!(location.city.is_some());
    }

    #[test]
    fn test_germany() {
        let location = geocoder().reverse_geocode(13.405, 52.52).unwrap();

        assert_eq!(location.country_code_2, "DE");
        assert_eq!(location.country_code_3, "DEU");
        assert_eq!(location.region, "Europe");
    }

    #[test]
    fn test_united_states() {
        let location = geocoder().reverse_geocode(-74.006, 40.7128).unwrap();

        assert_eq!(location.country_code_2, "US");
        assert_eq!(location.continent, "North America");
        assert_eq!(location.region, "Americas");
        assert_eq!(location.subregion, "Northern America");
    }

    #[test]
    fn test_open_ocean_not_found() {
        let err = geocoder().reverse_geocode(0.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::CountryNotFound));
        assert_eq!(err.to_string(), "country not found");
    }

    #[test]
    fn test_north_pole_not_found() {
        let err = geocoder().reverse_geocode(-135.0, 90.0).unwrap_err();
        assert!(matches!(err, Error::CountryNotFound));
    }

    #[test]
    fn test_cutoff_is_in_degrees() {
        // The nearest place to (0, 0) is the Ghanaian coast, roughly five
        // degrees away: outside the default cutoff, inside a ten-degree one.
        let generous = Geocoder::new(10.0);
        let location = generous.reverse_geocode(0.0, 0.0).unwrap();
        assert_eq!(location.country_code_2, "GH");
    }

    #[test]
    fn test_display_name_title_cases_identifiers() {
        assert_eq!(display_name("europe"), "Europe");
        assert_eq!(display_name("north-america"), "North America");
        assert_eq!(display_name("south-eastern-asia"), "South Eastern Asia");
    }

    #[test]
    fn test_tight_cutoff_rejects_everything_offshore() {
        // A cutoff of effectively zero turns even coastal water into
        // not-found; sanity check that the distance bound is honored.
        let strict = Geocoder::new(1e-9);
        assert!(strict.reverse_geocode(0.0, 0.0).is_err());
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let geocoder = geocoder();
        let first = geocoder.reverse_geocode(-102.560616, 49.0).unwrap();
        let second = geocoder.reverse_geocode(-102.560616, 49.0).unwrap();

        assert_eq!(first.country_code_2, second.country_code_2);
        assert_eq!(first.city, second.city);
    }

    #[test]
    fn test_serialization_omits_absent_optionals() {
        let location = Location {
            country: "Antarctica".to_string(),
            country_long: "Antarctica".to_string(),
            country_code_2: "AQ".to_string(),
            country_code_3: "ATA".to_string(),
            continent: "Antarctica".to_string(),
            region: "Antarctica".to_string(),
            subregion: "Antarctica".to_string(),
            province: None,
            city: None,
        };

        let json = serde_json::to_string(&location).unwrap();
        assert!(!json.contains("province"));
        assert!(!json.contains("city"));
    }

    #[test]
    fn test_serialization_field_order() {
        let location = Location {
            country: "c".to_string(),
            country_long: "cl".to_string(),
            country_code_2: "C2".to_string(),
            country_code_3: "C3".to_string(),
            continent: "co".to_string(),
            region: "r".to_string(),
            subregion: "s".to_string(),
            province: Some("p".to_string()),
            city: Some("t".to_string()),
        };

        let json = serde_json::to_string(&location).unwrap();
        let keys: Vec<usize> = [
            "\"country\"",
            "\"country_long\"",
            "\"country_code_2\"",
            "\"country_code_3\"",
            "\"continent\"",
            "\"region\"",
            "\"subregion\"",
            "\"province\"",
            "\"city\"",
        ]
        .iter()
        .map(|k| json.find(k).unwrap())
        .collect();

        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}
