#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! REST Countries client and country-and-neighbour orchestration.
//!
//! The [`restcountries`] module wraps the two API endpoints and
//! flattens their response records into [`Country`] values. The
//! [`chain`] module sequences the primary and neighbour lookups and
//! reports through a [`view::CountryView`]. The [`capitals`] module is
//! the fixed-size parallel counterpart: several lookups at once,
//! all-or-first-failure.
//!
//! [`Country`]: country_atlas_countries_models::Country

pub mod capitals;
pub mod chain;
pub mod restcountries;
pub mod view;

use thiserror::Error;

/// Errors from country lookup operations.
#[derive(Debug, Error)]
pub enum CountryError {
    /// The underlying HTTP fetch failed.
    #[error("{0}")]
    Fetch(#[from] country_atlas_http::FetchError),

    /// The API returned an empty result array.
    #[error("No country found for '{query}'")]
    NotFound {
        /// The name or code that was looked up.
        query: String,
    },

    /// A required field was missing from an otherwise valid response.
    #[error("Malformed country data: {message}")]
    MissingField {
        /// Description of what was missing.
        message: String,
    },
}
