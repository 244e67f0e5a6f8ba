//! Rendering trait for country lookups.
//!
//! Defines a [`CountryView`] trait that decouples the orchestration
//! logic from any specific output backend (terminal cards, log-only
//! reporting, or silence). Implementations are provided upstream in
//! crates that choose a rendering strategy.

use country_atlas_countries_models::{Country, CountryStyle};

/// Output surface for country lookups.
///
/// Implementations must be `Send + Sync` so orchestrators can hold a
/// `&dyn CountryView` across await points.
pub trait CountryView: Send + Sync {
    /// Renders one country card. The style distinguishes the country
    /// that was looked up from its neighbour.
    fn render_country(&self, country: &Country, style: CountryStyle);

    /// Renders a failure message.
    fn render_error(&self, message: &str);

    /// Makes the output visible. Orchestrators call this exactly once
    /// per top-level invocation, on success and failure alike.
    fn reveal(&self);
}

/// A no-op implementation of [`CountryView`] that discards all output.
///
/// Useful for tests and headless runs that only care about side
/// effects such as logging.
pub struct NullView;

impl CountryView for NullView {
    fn render_country(&self, _country: &Country, _style: CountryStyle) {}
    fn render_error(&self, _message: &str) {}
    fn reveal(&self) {}
}
