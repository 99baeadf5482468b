//! Handler for the `suggest` subcommand.

use anyhow::Result;
use tracing::debug;

use airtravel_lib::{DefaultsGenerator, FlightNetwork};

use crate::output::{render_suggestions, OutputFormat};

/// Print the values a fresh entry form would be pre-filled with.
///
/// A network with fewer than two airports gets an airport suggestion only.
pub fn handle_suggest(network: &FlightNetwork, format: OutputFormat) -> Result<()> {
    let mut generator = DefaultsGenerator::new();
    let airport = generator.next_airport(network);
    let flight = match generator.next_flight(network) {
        Ok(flight) => Some(flight),
        Err(err) => {
            debug!(error = %err, "no flight suggestion");
            None
        }
    };

    print!("{}", render_suggestions(&airport, flight.as_ref(), format)?);
    Ok(())
}
