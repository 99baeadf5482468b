use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Identifier for an airport within a [`FlightNetwork`].
pub type AirportCode = String;

/// Minimum similarity score for an existing code to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Number of suggestions attached to unknown-airport errors.
const MAX_SUGGESTIONS: usize = 3;

/// Seat class whose fare is summed during a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FareClass {
    #[default]
    Economy,
    Business,
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            FareClass::Economy => "economy",
            FareClass::Business => "business",
        };
        f.write_str(value)
    }
}

impl FromStr for FareClass {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(FareClass::Economy),
            "business" => Ok(FareClass::Business),
            other => Err(Error::invalid_parameter(format!(
                "unknown fare class '{other}'; expected economy or business"
            ))),
        }
    }
}

/// Airport node. Only the code takes part in identity and queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub code: AirportCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Airport {
    /// Name shown to users, falling back to the code.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

/// Directed, priced flight leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub origin: AirportCode,
    pub destination: AirportCode,
    /// Opaque departure label such as `"08:00"`.
    pub departure: String,
    /// Opaque arrival label such as `"09:00"`.
    pub arrival: String,
    pub economy: f64,
    pub business: f64,
}

impl Flight {
    /// Fare charged for the given seat class.
    pub fn fare(&self, class: FareClass) -> f64 {
        match class {
            FareClass::Economy => self.economy,
            FareClass::Business => self.business,
        }
    }
}

/// Airports plus their ordered outgoing flights.
///
/// The outgoing list of each origin keeps insertion order; queries rely on it
/// for enumeration order and tie-breaks.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: BTreeMap<AirportCode, Airport>,
    flights: BTreeMap<AirportCode, Vec<Flight>>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an airport identified by `code`. Returns the normalised code.
    pub fn add_airport(&mut self, code: &str) -> Result<AirportCode> {
        self.insert_airport(code, None)
    }

    /// Add an airport with a display name. Returns the normalised code.
    pub fn add_airport_named(&mut self, code: &str, name: impl Into<String>) -> Result<AirportCode> {
        self.insert_airport(code, Some(name.into()))
    }

    fn insert_airport(&mut self, code: &str, name: Option<String>) -> Result<AirportCode> {
        let code = normalize_code(code)?;
        if self.airports.contains_key(&code) {
            return Err(Error::DuplicateAirport { code });
        }

        debug!(airport = %code, "adding airport");
        self.airports.insert(
            code.clone(),
            Airport {
                code: code.clone(),
                name,
            },
        );
        Ok(code)
    }

    /// Remove an airport and every flight that departs from or arrives at it.
    ///
    /// Returns the number of flights removed alongside the airport.
    pub fn remove_airport(&mut self, code: &str) -> Result<usize> {
        let code = self.resolve(code)?;
        self.airports.remove(&code);

        let mut removed = self.flights.remove(&code).map_or(0, |legs| legs.len());
        self.flights.retain(|_, legs| {
            let before = legs.len();
            legs.retain(|flight| flight.destination != code);
            removed += before - legs.len();
            !legs.is_empty()
        });

        debug!(airport = %code, flights_removed = removed, "removed airport");
        Ok(removed)
    }

    /// Append a flight to the origin's outgoing list.
    pub fn add_flight(
        &mut self,
        origin: &str,
        destination: &str,
        departure: impl Into<String>,
        arrival: impl Into<String>,
        economy: f64,
        business: f64,
    ) -> Result<&Flight> {
        let origin = self.resolve(origin)?;
        let destination = self.resolve(destination)?;
        if origin == destination {
            return Err(Error::SelfLoopFlight { code: origin });
        }
        validate_fare("economy", economy)?;
        validate_fare("business", business)?;

        debug!(%origin, %destination, economy, business, "adding flight");
        let legs = self.flights.entry(origin.clone()).or_default();
        legs.push(Flight {
            origin,
            destination,
            departure: departure.into(),
            arrival: arrival.into(),
            economy,
            business,
        });
        Ok(&legs[legs.len() - 1])
    }

    /// Remove the flight at `index` within the origin's outgoing list.
    pub fn remove_flight(&mut self, origin: &str, index: usize) -> Result<Flight> {
        let origin = self.resolve(origin)?;
        let Some(legs) = self.flights.get_mut(&origin) else {
            return Err(Error::FlightNotFound { origin, index });
        };
        if index >= legs.len() {
            return Err(Error::FlightNotFound { origin, index });
        }

        let flight = legs.remove(index);
        if legs.is_empty() {
            self.flights.remove(&origin);
        }
        debug!(%origin, destination = %flight.destination, index, "removed flight");
        Ok(flight)
    }

    /// Outgoing flights for `code` in insertion order; empty when none exist.
    pub fn neighbors(&self, code: &str) -> &[Flight] {
        self.flights.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_airport(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    /// Airports ordered by code.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Every flight with its index in the origin's list, origins ordered by code.
    pub fn flights(&self) -> impl Iterator<Item = (usize, &Flight)> {
        self.flights
            .values()
            .flat_map(|legs| legs.iter().enumerate())
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn flight_count(&self) -> usize {
        self.flights.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Normalise `code` and confirm it names an airport in the network.
    pub fn resolve(&self, code: &str) -> Result<AirportCode> {
        let normalized = normalize_code(code)?;
        if self.airports.contains_key(&normalized) {
            Ok(normalized)
        } else {
            Err(Error::InvalidAirport {
                suggestions: self.similar_codes(&normalized, MAX_SUGGESTIONS),
                code: normalized,
            })
        }
    }

    /// Existing airport codes resembling `code`, best match first.
    pub fn similar_codes(&self, code: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .keys()
            .map(|candidate| (strsim::jaro_winkler(code, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

/// Trim and upper-case an airport code, rejecting empty codes.
pub fn normalize_code(code: &str) -> Result<AirportCode> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_parameter("airport code must not be empty"));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn validate_fare(label: &str, fare: f64) -> Result<()> {
    if fare.is_finite() && fare >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(format!(
            "{label} fare must be a non-negative number, got {fare}"
        )))
    }
}
