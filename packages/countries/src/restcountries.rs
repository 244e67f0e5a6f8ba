//! REST Countries API client.
//!
//! Both endpoints return a JSON array of country records; consumers
//! take the first. An empty array is an explicit [`CountryError::NotFound`]
//! failure, never an unchecked index.
//!
//! See <https://restcountries.com/>

use country_atlas_countries_models::Country;
use country_atlas_http::JsonFetch;

use crate::CountryError;

/// Default public REST Countries instance.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Looks up a country by common name via `/name/{name}`.
///
/// # Errors
///
/// Returns [`CountryError`] if the fetch fails, no country matches, or
/// the first record is missing required fields.
pub async fn by_name(
    fetcher: &dyn JsonFetch,
    base_url: &str,
    name: &str,
) -> Result<Country, CountryError> {
    let url = format!("{base_url}/name/{name}");
    let body = fetcher.fetch_json(&url, "Country not found").await?;
    first_record(&body, name)
}

/// Looks up a country by ISO alpha code via `/alpha/{code}`.
///
/// # Errors
///
/// Returns [`CountryError`] if the fetch fails, no country matches, or
/// the first record is missing required fields.
pub async fn by_code(
    fetcher: &dyn JsonFetch,
    base_url: &str,
    code: &str,
) -> Result<Country, CountryError> {
    let url = format!("{base_url}/alpha/{code}");
    let body = fetcher.fetch_json(&url, "Country not found").await?;
    first_record(&body, code)
}

/// Takes the first record out of a REST Countries response array.
fn first_record(body: &serde_json::Value, query: &str) -> Result<Country, CountryError> {
    let records = body
        .as_array()
        .ok_or_else(|| CountryError::MissingField {
            message: "response is not an array".to_string(),
        })?;

    let Some(first) = records.first() else {
        return Err(CountryError::NotFound {
            query: query.to_string(),
        });
    };

    parse_country(first)
}

/// Flattens one REST Countries record into a [`Country`].
///
/// Name, region, population, and flag are required; languages,
/// currencies, capital, and borders are optional in the API and map to
/// `Option`/empty accordingly.
fn parse_country(record: &serde_json::Value) -> Result<Country, CountryError> {
    let common_name = record
        .pointer("/name/common")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| missing("name.common"))?
        .to_string();

    let region = record
        .get("region")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| missing("region"))?
        .to_string();

    let population = record
        .get("population")
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| missing("population"))?;

    let flag_url = record
        .pointer("/flags/svg")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| missing("flags.svg"))?
        .to_string();

    // Languages and currencies are keyed objects; the first value is
    // the one rendered.
    let primary_language = record
        .get("languages")
        .and_then(serde_json::Value::as_object)
        .and_then(|languages| languages.values().next())
        .and_then(serde_json::Value::as_str)
        .map(String::from);

    let primary_currency_name = record
        .get("currencies")
        .and_then(serde_json::Value::as_object)
        .and_then(|currencies| currencies.values().next())
        .and_then(|currency| currency.get("name"))
        .and_then(serde_json::Value::as_str)
        .map(String::from);

    let capital = record
        .get("capital")
        .and_then(serde_json::Value::as_array)
        .and_then(|capitals| capitals.first())
        .and_then(serde_json::Value::as_str)
        .map(String::from);

    let neighbour_codes = record
        .get("borders")
        .and_then(serde_json::Value::as_array)
        .map(|codes| {
            codes
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(Country {
        common_name,
        region,
        population_millions: population / 1_000_000.0,
        primary_language,
        primary_currency_name,
        flag_url,
        capital,
        neighbour_codes,
    })
}

fn missing(field: &str) -> CountryError {
    CountryError::MissingField {
        message: format!("record missing {field}"),
    }
}
