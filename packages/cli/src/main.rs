#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive terminal front end for country-atlas.
//!
//! Provides a unified entry point that lets users pick a flow: look up
//! a country and its neighbour, find the country they are currently
//! in, or compare three capitals fetched in parallel. Output goes
//! through [`terminal::TerminalView`]; log verbosity is controlled via
//! `RUST_LOG`.

mod terminal;

use country_atlas_countries::chain::fetch_country_and_neighbour;
use country_atlas_countries::view::CountryView as _;
use country_atlas_countries::{capitals, restcountries};
use country_atlas_geolocate::position::{self, IpLookupProvider};
use country_atlas_geolocate::{reverse, whereami};
use country_atlas_http::HttpJson;
use dialoguer::{Input, Select};

use crate::terminal::TerminalView;

/// Names used by the parallel capitals demonstration.
const CAPITAL_TRIO: [&str; 3] = ["nigeria", "togo", "usa"];

/// Top-level flow selection.
enum Tool {
    CountryAndNeighbour,
    WhereAmI,
    CompareCapitals,
}

impl Tool {
    const ALL: &[Self] = &[
        Self::CountryAndNeighbour,
        Self::WhereAmI,
        Self::CompareCapitals,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::CountryAndNeighbour => "Look up a country and its neighbour",
            Self::WhereAmI => "Where am I?",
            Self::CompareCapitals => "Compare three capitals",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let client = reqwest::Client::new();
    let fetcher = HttpJson::new(client.clone());
    let view = TerminalView;

    println!("Country Atlas");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    log::debug!("Selected flow: {}", labels[idx]);

    match Tool::ALL[idx] {
        Tool::CountryAndNeighbour => {
            let name: String = Input::new()
                .with_prompt("Country name")
                .interact_text()?;
            fetch_country_and_neighbour(
                &fetcher,
                restcountries::DEFAULT_BASE_URL,
                &view,
                name.trim(),
            )
            .await;
        }
        Tool::WhereAmI => {
            let provider = IpLookupProvider::new(client, position::DEFAULT_BASE_URL);
            whereami::where_am_i(
                &provider,
                &fetcher,
                reverse::DEFAULT_BASE_URL,
                restcountries::DEFAULT_BASE_URL,
                &view,
            )
            .await;
        }
        Tool::CompareCapitals => {
            match capitals::fetch_capitals(
                &fetcher,
                restcountries::DEFAULT_BASE_URL,
                &CAPITAL_TRIO,
            )
            .await
            {
                Ok(cities) => {
                    for (name, capital) in CAPITAL_TRIO.iter().zip(&cities) {
                        println!("{name}: {capital}");
                    }
                }
                Err(e) => view.render_error(&e.to_string()),
            }
            view.reveal();
        }
    }

    Ok(())
}
