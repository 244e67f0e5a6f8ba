//! "Where am I" orchestration.
//!
//! Position, then reverse geocode, then the country-and-neighbour
//! chain for whatever country the coordinates land in.

use country_atlas_countries::chain::fetch_country_and_neighbour;
use country_atlas_countries::view::CountryView;
use country_atlas_http::JsonFetch;

use crate::position::PositionProvider;
use crate::reverse::reverse_geocode;
use crate::{GeolocateError, Place};

/// Resolves the current position, reverse-geocodes it, and runs the
/// country-and-neighbour chain for the resulting country.
///
/// Failures before the chain hand-off render one error and reveal the
/// view; after the hand-off the chain does its own reporting and
/// revealing. Either way the view is revealed exactly once per
/// invocation.
pub async fn where_am_i(
    provider: &dyn PositionProvider,
    fetcher: &dyn JsonFetch,
    geocode_base_url: &str,
    countries_base_url: &str,
    view: &dyn CountryView,
) {
    let place = match locate(provider, fetcher, geocode_base_url).await {
        Ok(place) => place,
        Err(e) => {
            log::error!("Geolocation failed: {e}");
            view.render_error(&e.to_string());
            view.reveal();
            return;
        }
    };

    match &place.city {
        Some(city) => log::info!("You are in {city}, {}", place.country),
        None => log::info!("You are in {}", place.country),
    }

    fetch_country_and_neighbour(fetcher, countries_base_url, view, &place.country).await;
}

/// The fallible pre-chain steps: position, then reverse geocode.
async fn locate(
    provider: &dyn PositionProvider,
    fetcher: &dyn JsonFetch,
    geocode_base_url: &str,
) -> Result<Place, GeolocateError> {
    let position = provider.current_position().await?;
    log::debug!(
        "Position resolved to {:.4}, {:.4}",
        position.latitude,
        position.longitude
    );
    reverse_geocode(fetcher, geocode_base_url, position).await
}
