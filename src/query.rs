//! Positional coordinate query parsing
//!
//! The query endpoint takes its coordinates as two bare, ampersand-separated
//! tokens: `/query?<lon>&<lat>`. There are no key names and no URL decoding;
//! the raw query string is split on `&` and the first two tokens are parsed
//! as floats. This format predates the service and clients depend on it, so
//! it is preserved as-is rather than normalized to `key=value` form.

use crate::error::{Error, Result};

/// Extract a `(longitude, latitude)` pair from a raw query string.
///
/// Rules:
/// - An empty query, or one containing no `&`, is rejected.
/// - The first token is the longitude, the second the latitude. Anything
///   past the second token is ignored.
/// - A token that does not parse as `f64` is rejected with the offending
///   token in the error.
///
/// No range checking is done here; out-of-range coordinates simply resolve
/// to nothing downstream.
pub fn parse_coordinates(raw: &str) -> Result<(f64, f64)> {
    if raw.is_empty() || !raw.contains('&') {
        return Err(Error::MalformedQuery);
    }

    let mut tokens = raw.split('&');

    let lon = parse_token(tokens.next().unwrap_or_default())?;
    let lat = parse_token(tokens.next().unwrap_or_default())?;

    Ok((lon, lat))
}

fn parse_token(token: &str) -> Result<f64> {
    token.parse().map_err(|source| Error::Coordinate {
        token: token.to_string(),
        source,
    })
}
