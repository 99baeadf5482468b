//! Output formatting for query results and network listings.
//!
//! Every renderer returns a `String` so the handlers decide where it goes and
//! tests can inspect it without capturing stdout.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use airtravel_lib::{AirportDefaults, Flight, FlightDefaults, FlightNetwork, QuerySummary};

use crate::terminal::ColorPalette;

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Serialize any result as pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

/// Render a query summary, with color swatches on edge lines when the
/// terminal supports them.
pub fn render_summary(
    summary: &QuerySummary,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Text => Ok(summary.render_text_with(|color| palette.swatch(color))),
    }
}

/// List airports ordered by code.
pub fn render_airports(
    network: &FlightNetwork,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        let airports: Vec<_> = network.airports().collect();
        return to_json(&airports);
    }

    let mut buffer = format!(
        "{}Airports ({}):{}\n",
        palette.heading,
        network.airport_count(),
        palette.reset
    );
    for airport in network.airports() {
        let _ = writeln!(buffer, "  {:<6}{}", airport.code, airport.display_name());
    }
    Ok(buffer)
}

#[derive(Serialize)]
struct FlightEntry<'a> {
    index: usize,
    #[serde(flatten)]
    flight: &'a Flight,
}

/// List flights grouped by origin, with each flight's index in its origin list.
pub fn render_flights(
    network: &FlightNetwork,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        let flights: Vec<_> = network
            .flights()
            .map(|(index, flight)| FlightEntry { index, flight })
            .collect();
        return to_json(&flights);
    }

    let mut buffer = format!(
        "{}Flights ({}):{}\n",
        palette.heading,
        network.flight_count(),
        palette.reset
    );
    for (index, flight) in network.flights() {
        let _ = write!(
            buffer,
            "  {} → {}  {}#{index}{}",
            flight.origin, flight.destination, palette.muted, palette.reset
        );
        if !flight.departure.is_empty() || !flight.arrival.is_empty() {
            let _ = write!(buffer, "  {}-{}", flight.departure, flight.arrival);
        }
        let _ = writeln!(
            buffer,
            "  Economy: ${:.2}  Business: ${:.2}",
            flight.economy, flight.business
        );
    }
    Ok(buffer)
}

#[derive(Serialize)]
struct Suggestions<'a> {
    airport: &'a AirportDefaults,
    flight: Option<&'a FlightDefaults>,
}

/// Render the next suggested airport and flight values.
pub fn render_suggestions(
    airport: &AirportDefaults,
    flight: Option<&FlightDefaults>,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&Suggestions { airport, flight });
    }

    let mut buffer = format!("Next airport: {} ({})\n", airport.code, airport.name);
    match flight {
        Some(flight) => {
            let _ = writeln!(
                buffer,
                "Next flight: {} → {}  {}-{}  Economy: ${:.2}  Business: ${:.2}",
                flight.origin,
                flight.destination,
                flight.departure,
                flight.arrival,
                flight.economy,
                flight.business
            );
        }
        None => buffer.push_str("Next flight: add at least two airports first\n"),
    }
    Ok(buffer)
}
