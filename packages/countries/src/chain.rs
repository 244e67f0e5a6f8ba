//! The country-and-neighbour lookup chain.
//!
//! Strictly sequential: the neighbour request is only issued after the
//! primary record has been parsed and rendered. Failures anywhere in
//! the chain short-circuit to a single error report.

use country_atlas_countries_models::CountryStyle;
use country_atlas_http::JsonFetch;

use crate::{restcountries, view::CountryView, CountryError};

/// Fetches a country by name, renders it, then fetches and renders its
/// first listed neighbour.
///
/// A borderless country renders alone and succeeds. Any failure is
/// reported through `render_error` exactly once, and `reveal` fires
/// exactly once per invocation regardless of outcome.
pub async fn fetch_country_and_neighbour(
    fetcher: &dyn JsonFetch,
    base_url: &str,
    view: &dyn CountryView,
    name: &str,
) {
    if let Err(e) = run(fetcher, base_url, view, name).await {
        log::error!("Country chain failed for '{name}': {e}");
        view.render_error(&e.to_string());
    }
    view.reveal();
}

/// The fallible steps of the chain; every failure bubbles to the one
/// catch site in [`fetch_country_and_neighbour`].
async fn run(
    fetcher: &dyn JsonFetch,
    base_url: &str,
    view: &dyn CountryView,
    name: &str,
) -> Result<(), CountryError> {
    let country = restcountries::by_name(fetcher, base_url, name).await?;
    log::info!("Resolved '{name}' to {}", country.common_name);
    view.render_country(&country, CountryStyle::Primary);

    let Some(code) = country.neighbour_codes.first() else {
        log::debug!("{} has no neighbours", country.common_name);
        return Ok(());
    };

    let neighbour = restcountries::by_code(fetcher, base_url, code).await?;
    view.render_country(&neighbour, CountryStyle::Neighbour);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use country_atlas_countries_models::Country;
    use country_atlas_http::FetchError;

    use super::*;

    /// Serves canned JSON bodies keyed by URL; unknown URLs get a 404.
    struct ScriptedFetch {
        responses: BTreeMap<String, serde_json::Value>,
    }

    impl ScriptedFetch {
        fn new(responses: &[(&str, serde_json::Value)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(url, body)| ((*url).to_string(), body.clone()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl JsonFetch for ScriptedFetch {
        async fn fetch_json(
            &self,
            url: &str,
            error_message: &str,
        ) -> Result<serde_json::Value, FetchError> {
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    message: error_message.to_string(),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
        }
    }

    /// Records every view call for assertion.
    #[derive(Default)]
    struct RecordingView {
        rendered: Mutex<Vec<(String, CountryStyle)>>,
        errors: Mutex<Vec<String>>,
        reveals: AtomicUsize,
    }

    impl CountryView for RecordingView {
        fn render_country(&self, country: &Country, style: CountryStyle) {
            self.rendered
                .lock()
                .unwrap()
                .push((country.common_name.clone(), style));
        }

        fn render_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }

        fn reveal(&self) {
            self.reveals.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn record(name: &str, borders: &[&str]) -> serde_json::Value {
        serde_json::json!([{
            "name": { "common": name },
            "region": "Africa",
            "population": 1_000_000,
            "flags": { "svg": "https://flagcdn.com/x.svg" },
            "borders": borders
        }])
    }

    #[tokio::test]
    async fn renders_primary_then_neighbour() {
        let fetch = ScriptedFetch::new(&[
            ("https://api.test/name/nigeria", record("Nigeria", &["BEN"])),
            ("https://api.test/alpha/BEN", record("Benin", &["NGA"])),
        ]);
        let view = RecordingView::default();

        fetch_country_and_neighbour(&fetch, "https://api.test", &view, "nigeria").await;

        let rendered = view.rendered.lock().unwrap();
        assert_eq!(
            *rendered,
            vec![
                ("Nigeria".to_string(), CountryStyle::Primary),
                ("Benin".to_string(), CountryStyle::Neighbour),
            ]
        );
        assert!(view.errors.lock().unwrap().is_empty());
        assert_eq!(view.reveals.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn borderless_country_renders_alone() {
        let fetch = ScriptedFetch::new(&[(
            "https://api.test/name/madagascar",
            record("Madagascar", &[]),
        )]);
        let view = RecordingView::default();

        fetch_country_and_neighbour(&fetch, "https://api.test", &view, "madagascar").await;

        let rendered = view.rendered.lock().unwrap();
        assert_eq!(
            *rendered,
            vec![("Madagascar".to_string(), CountryStyle::Primary)]
        );
        assert!(view.errors.lock().unwrap().is_empty());
        assert_eq!(view.reveals.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn primary_failure_reports_once_and_renders_nothing() {
        let fetch = ScriptedFetch::new(&[]);
        let view = RecordingView::default();

        fetch_country_and_neighbour(&fetch, "https://api.test", &view, "atlantis").await;

        assert!(view.rendered.lock().unwrap().is_empty());
        let errors = view.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Country not found"));
        assert_eq!(view.reveals.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_result_array_is_reported_as_not_found() {
        let fetch = ScriptedFetch::new(&[("https://api.test/name/atlantis", serde_json::json!([]))]);
        let view = RecordingView::default();

        fetch_country_and_neighbour(&fetch, "https://api.test", &view, "atlantis").await;

        assert!(view.rendered.lock().unwrap().is_empty());
        let errors = view.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "No country found for 'atlantis'");
        assert_eq!(view.reveals.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn neighbour_failure_still_renders_primary() {
        // BEN is listed but the alpha lookup is not scripted, so the
        // second fetch 404s after the primary has rendered.
        let fetch = ScriptedFetch::new(&[(
            "https://api.test/name/nigeria",
            record("Nigeria", &["BEN"]),
        )]);
        let view = RecordingView::default();

        fetch_country_and_neighbour(&fetch, "https://api.test", &view, "nigeria").await;

        let rendered = view.rendered.lock().unwrap();
        assert_eq!(
            *rendered,
            vec![("Nigeria".to_string(), CountryStyle::Primary)]
        );
        assert_eq!(view.errors.lock().unwrap().len(), 1);
        assert_eq!(view.reveals.load(Ordering::SeqCst), 1);
    }
}
