//! Position providers.
//!
//! A terminal process has no browser geolocation API, so the production
//! provider asks an IP geolocation service for approximate coordinates.
//! Anything that can produce a latitude/longitude pair asynchronously
//! can stand in through the [`PositionProvider`] trait.

use async_trait::async_trait;
use country_atlas_http::fetch_json;

use crate::{GeolocateError, Position};

/// Default public IP geolocation endpoint.
pub const DEFAULT_BASE_URL: &str = "https://ipapi.co";

/// An async source of the current position.
///
/// Failure modes (service unavailable, lookup refused) collapse into
/// the single [`GeolocateError`] channel.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Returns the current position.
    ///
    /// # Errors
    ///
    /// Returns [`GeolocateError`] if no position can be determined.
    async fn current_position(&self) -> Result<Position, GeolocateError>;
}

/// Position provider backed by an IP geolocation service.
pub struct IpLookupProvider {
    client: reqwest::Client,
    base_url: String,
}

impl IpLookupProvider {
    /// Creates a provider against `base_url` (see [`DEFAULT_BASE_URL`]).
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PositionProvider for IpLookupProvider {
    async fn current_position(&self) -> Result<Position, GeolocateError> {
        let url = format!("{}/json/", self.base_url);
        let body = fetch_json(&self.client, &url, "Position lookup failed").await?;
        parse_position(&body)
    }
}

/// Parses an IP geolocation response.
fn parse_position(body: &serde_json::Value) -> Result<Position, GeolocateError> {
    let latitude = body
        .get("latitude")
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| GeolocateError::MissingField {
            message: "response missing latitude".to_string(),
        })?;

    let longitude = body
        .get("longitude")
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| GeolocateError::MissingField {
            message: "response missing longitude".to_string(),
        })?;

    Ok(Position {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        let body = serde_json::json!({
            "ip": "203.0.113.10",
            "city": "Lagos",
            "latitude": 6.4541,
            "longitude": 3.3947
        });
        let position = parse_position(&body).unwrap();
        assert!((position.latitude - 6.4541).abs() < 1e-6);
        assert!((position.longitude - 3.3947).abs() < 1e-6);
    }

    #[test]
    fn missing_latitude_is_an_error() {
        let body = serde_json::json!({ "longitude": 3.3947 });
        let err = parse_position(&body).unwrap_err();
        assert!(matches!(err, GeolocateError::MissingField { .. }));
        assert!(err.to_string().contains("latitude"));
    }
}
