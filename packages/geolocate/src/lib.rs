#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Position lookup and reverse geocoding.
//!
//! Answers "where am I" in three steps: a [`position::PositionProvider`]
//! supplies coordinates, the [`reverse`] module resolves them to a
//! city/country pair, and [`whereami`] hands the country name to the
//! country-and-neighbour chain.

pub mod position;
pub mod reverse;
pub mod whereami;

use thiserror::Error;

/// A latitude/longitude pair (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A reverse-geocoded place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// City name, when the geocoder can resolve one.
    pub city: Option<String>,
    /// Country name.
    pub country: String,
}

/// Errors from geolocation operations.
#[derive(Debug, Error)]
pub enum GeolocateError {
    /// The underlying HTTP fetch failed.
    #[error("{0}")]
    Fetch(#[from] country_atlas_http::FetchError),

    /// The position provider could not produce coordinates.
    #[error("Could not determine position: {message}")]
    Position {
        /// Description of why the position is unavailable.
        message: String,
    },

    /// The reverse geocoder refused the request.
    #[error("You have exceeded the request limit")]
    RateLimited,

    /// A required field was missing from an otherwise valid response.
    #[error("Malformed geocoding data: {message}")]
    MissingField {
        /// Description of what was missing.
        message: String,
    },
}
