//! Terminal rendering of country cards.

use console::style;
use country_atlas_countries::view::CountryView;
use country_atlas_countries_models::{Country, CountryStyle};

/// Renders country cards to stdout with `console` styling.
///
/// Neighbour cards are dimmed and prefixed so the pairing reads at a
/// glance in scrollback.
pub struct TerminalView;

impl CountryView for TerminalView {
    fn render_country(&self, country: &Country, card_style: CountryStyle) {
        let heading = match card_style {
            CountryStyle::Primary => style(&country.common_name).cyan().bold(),
            CountryStyle::Neighbour => style(&country.common_name).bold().dim(),
        };

        if card_style == CountryStyle::Neighbour {
            println!("{}", style("Neighbour:").dim());
        }
        println!("{heading} ({})", country.region);
        println!("  Population: {:.1}M", country.population_millions);
        if let Some(language) = &country.primary_language {
            println!("  Language:   {language}");
        }
        if let Some(currency) = &country.primary_currency_name {
            println!("  Currency:   {currency}");
        }
        println!("  Flag:       {}", country.flag_url);
        println!();
    }

    fn render_error(&self, message: &str) {
        eprintln!("{} {message}", style("Something went wrong:").red().bold());
    }

    fn reveal(&self) {
        // A terminal is always visible; nothing to restore here.
    }
}
