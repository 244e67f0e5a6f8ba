#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Country data types.
//!
//! A [`Country`] is the reduced view of a REST Countries API record
//! that the rendering layer consumes. Records are immutable once
//! parsed; the API's nested response shape is flattened by the client
//! crate, not here.

use serde::{Deserialize, Serialize};

/// A country as consumed by the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Common English name (e.g. "Nigeria").
    pub common_name: String,
    /// Region label (e.g. "Africa").
    pub region: String,
    /// Population in millions.
    pub population_millions: f64,
    /// First listed language, if any.
    pub primary_language: Option<String>,
    /// Name of the first listed currency, if any.
    pub primary_currency_name: Option<String>,
    /// URL of the SVG flag image.
    pub flag_url: String,
    /// First listed capital city, if any.
    pub capital: Option<String>,
    /// ISO alpha-3 codes of bordering countries, in API order.
    /// Empty for island nations and other borderless countries.
    pub neighbour_codes: Vec<String>,
}

/// How a country should be styled when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountryStyle {
    /// The country that was looked up directly.
    Primary,
    /// A bordering country rendered after its primary.
    Neighbour,
}
