//! Fixed-size parallel lookup demonstration.
//!
//! Where the chain in [`crate::chain`] is strictly sequential, this
//! module fires one lookup per name concurrently and waits for all of
//! them, failing as soon as any single lookup fails.

use country_atlas_http::JsonFetch;
use futures::future::try_join_all;

use crate::{restcountries, CountryError};

/// Fetches several countries concurrently and returns their capital
/// cities in input order.
///
/// # Errors
///
/// Returns the first [`CountryError`] from any lookup, or a
/// missing-field error for a country with no capital recorded.
pub async fn fetch_capitals(
    fetcher: &dyn JsonFetch,
    base_url: &str,
    names: &[&str],
) -> Result<Vec<String>, CountryError> {
    log::info!("Fetching {} countries concurrently", names.len());

    let countries = try_join_all(
        names
            .iter()
            .map(|name| restcountries::by_name(fetcher, base_url, name)),
    )
    .await?;

    countries
        .into_iter()
        .map(|country| match country.capital {
            Some(capital) => Ok(capital),
            None => Err(CountryError::MissingField {
                message: format!("{} has no capital recorded", country.common_name),
            }),
        })
        .collect()
}
