//! Pre-filled values for airport and flight entry forms.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{AirportCode, FlightNetwork};

/// Suggested values for a new airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportDefaults {
    pub code: AirportCode,
    pub name: String,
}

/// Suggested values for a new flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightDefaults {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure: String,
    pub arrival: String,
    pub economy: f64,
    pub business: f64,
}

/// Deterministic source of form defaults. Counters only ever advance.
#[derive(Debug, Clone, Default)]
pub struct DefaultsGenerator {
    airports_issued: u32,
    flights_issued: u32,
}

impl DefaultsGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next `A001`-style code not yet present in `network`.
    pub fn next_airport(&mut self, network: &FlightNetwork) -> AirportDefaults {
        loop {
            self.airports_issued += 1;
            let index = self.airports_issued;
            let code = format!("A{index:03}");
            if !network.contains_airport(&code) {
                return AirportDefaults {
                    code,
                    name: format!("Airport_{index}"),
                };
            }
        }
    }

    /// Next flight suggestion, rotating through the airports in code order.
    pub fn next_flight(&mut self, network: &FlightNetwork) -> Result<FlightDefaults> {
        let codes: Vec<&str> = network.airports().map(|a| a.code.as_str()).collect();
        if codes.len() < 2 {
            return Err(Error::invalid_parameter(
                "at least two airports are needed to suggest a flight",
            ));
        }

        self.flights_issued += 1;
        let index = self.flights_issued;
        let slot = index as usize;
        let origin = codes[(slot - 1) % codes.len()];
        let destination = codes[slot % codes.len()];
        let departure_hour = 8 + index % 12;

        Ok(FlightDefaults {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure: format!("{:02}:00", departure_hour),
            arrival: format!("{:02}:00", departure_hour + 1),
            economy: f64::from(100 + index * 10),
            business: f64::from(200 + index * 15),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_codes_skip_existing_entries() {
        let mut network = FlightNetwork::new();
        network.add_airport("A001").unwrap();
        let mut defaults = DefaultsGenerator::new();

        let first = defaults.next_airport(&network);
        assert_eq!(first.code, "A002");
        assert_eq!(first.name, "Airport_2");
    }

    #[test]
    fn flight_defaults_rotate_and_never_loop() {
        let mut network = FlightNetwork::new();
        for code in ["A", "B", "C"] {
            network.add_airport(code).unwrap();
        }
        let mut defaults = DefaultsGenerator::new();

        let first = defaults.next_flight(&network).unwrap();
        assert_eq!((first.origin.as_str(), first.destination.as_str()), ("A", "B"));
        assert_eq!(first.departure, "09:00");
        assert_eq!(first.arrival, "10:00");
        assert_eq!(first.economy, 110.0);
        assert_eq!(first.business, 215.0);

        let third = {
            defaults.next_flight(&network).unwrap();
            defaults.next_flight(&network).unwrap()
        };
        assert_eq!((third.origin.as_str(), third.destination.as_str()), ("C", "A"));
    }

    #[test]
    fn flight_defaults_need_two_airports() {
        let mut network = FlightNetwork::new();
        network.add_airport("A").unwrap();
        assert!(DefaultsGenerator::new().next_flight(&network).is_err());
    }
}
