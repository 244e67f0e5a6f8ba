//! Reverse geocoding client.
//!
//! Speaks the geocode.xyz response shape: a single JSON object with
//! `country` and `city` fields. The public instance signals throttling
//! by omitting `country` from an otherwise successful response rather
//! than with an error status.
//!
//! See <https://geocode.xyz/api>

use country_atlas_http::JsonFetch;

use crate::{GeolocateError, Place, Position};

/// Default public reverse geocoding instance.
pub const DEFAULT_BASE_URL: &str = "https://geocode.xyz";

/// Resolves a position to a city/country pair.
///
/// # Errors
///
/// Returns [`GeolocateError`] if the fetch fails or the response has
/// no usable `country` field (the service's rate-limit signal).
pub async fn reverse_geocode(
    fetcher: &dyn JsonFetch,
    base_url: &str,
    position: Position,
) -> Result<Place, GeolocateError> {
    let url = format!(
        "{base_url}/{lat},{lng}?json=1",
        lat = position.latitude,
        lng = position.longitude,
    );
    let body = fetcher.fetch_json(&url, "Problem with geocoding").await?;
    parse_place(&body)
}

/// Parses a reverse geocoding response.
fn parse_place(body: &serde_json::Value) -> Result<Place, GeolocateError> {
    let Some(country) = body.get("country").and_then(serde_json::Value::as_str) else {
        return Err(GeolocateError::RateLimited);
    };

    let city = body
        .get("city")
        .and_then(serde_json::Value::as_str)
        .map(String::from);

    Ok(Place {
        city,
        country: country.to_string(),
    })
}
