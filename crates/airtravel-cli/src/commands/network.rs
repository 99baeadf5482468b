//! Listing handlers for the `airports` and `flights` subcommands.

use anyhow::Result;

use airtravel_lib::FlightNetwork;

use crate::output::{render_airports, render_flights, OutputFormat};
use crate::terminal::ColorPalette;

/// Print every airport ordered by code.
pub fn handle_list_airports(network: &FlightNetwork, format: OutputFormat) -> Result<()> {
    print!("{}", render_airports(network, format, &ColorPalette::detect())?);
    Ok(())
}

/// Print every flight grouped by origin.
pub fn handle_list_flights(network: &FlightNetwork, format: OutputFormat) -> Result<()> {
    print!("{}", render_flights(network, format, &ColorPalette::detect())?);
    Ok(())
}
