use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::network::{Airport, FlightNetwork};

/// Default filename for a network description.
const NETWORK_FILENAME: &str = "network.json";

/// Environment variable that points at a network description file.
pub const NETWORK_PATH_ENV: &str = "AIRTRAVEL_NETWORK";

/// Serializable snapshot of a [`FlightNetwork`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(default)]
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub flights: Vec<FlightRecord>,
}

/// Flight entry within a [`NetworkDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub departure: String,
    #[serde(default)]
    pub arrival: String,
    pub economy: f64,
    pub business: f64,
}

impl NetworkDocument {
    /// Capture the airports and flights of `network`, preserving flight order.
    pub fn from_network(network: &FlightNetwork) -> Self {
        Self {
            airports: network.airports().cloned().collect(),
            flights: network
                .flights()
                .map(|(_, flight)| FlightRecord {
                    origin: flight.origin.clone(),
                    destination: flight.destination.clone(),
                    departure: flight.departure.clone(),
                    arrival: flight.arrival.clone(),
                    economy: flight.economy,
                    business: flight.business,
                })
                .collect(),
        }
    }

    /// Build a network through the regular mutation operations so that every
    /// network invariant is checked against the document contents.
    pub fn into_network(self) -> Result<FlightNetwork> {
        let mut network = FlightNetwork::new();
        for airport in self.airports {
            match airport.name {
                Some(name) => network.add_airport_named(&airport.code, name)?,
                None => network.add_airport(&airport.code)?,
            };
        }
        for flight in self.flights {
            network.add_flight(
                &flight.origin,
                &flight.destination,
                flight.departure,
                flight.arrival,
                flight.economy,
                flight.business,
            )?;
        }
        Ok(network)
    }
}

/// Parse a network description from JSON text.
pub fn parse_network(json: &str) -> Result<FlightNetwork> {
    let document: NetworkDocument = serde_json::from_str(json)?;
    document.into_network()
}

/// Load a network description from `path`.
pub fn load_network(path: &Path) -> Result<FlightNetwork> {
    if !path.exists() {
        return Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading network description");
    let contents = fs::read_to_string(path)?;
    let network = parse_network(&contents)?;
    info!(
        airports = network.airport_count(),
        flights = network.flight_count(),
        "loaded network from {}",
        path.display()
    );
    Ok(network)
}

/// Serialize `network` as pretty-printed JSON.
pub fn network_to_json(network: &FlightNetwork) -> Result<String> {
    Ok(serde_json::to_string_pretty(&NetworkDocument::from_network(
        network,
    ))?)
}

/// Resolve the default network location using platform-specific project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "airtravel", "airtravel")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Pick the network file: explicit path, then `AIRTRAVEL_NETWORK`, then the
/// platform default.
pub fn resolve_network_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(value) = env::var_os(NETWORK_PATH_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    default_network_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/custom.json");
        assert_eq!(resolve_network_path(Some(path)).unwrap(), path);
    }

    #[test]
    fn default_path_ends_with_network_file() {
        if let Ok(path) = default_network_path() {
            assert!(path.ends_with(NETWORK_FILENAME));
        }
    }

    #[test]
    fn document_missing_optional_fields_parses() {
        let network = parse_network(
            r#"{"airports":[{"code":"a"},{"code":"b","name":"Bravo"}],
                "flights":[{"origin":"A","destination":"B","economy":1,"business":2}]}"#,
        )
        .unwrap();
        assert_eq!(network.airport_count(), 2);
        assert_eq!(network.airport("B").unwrap().display_name(), "Bravo");
        assert_eq!(network.neighbors("A")[0].departure, "");
    }
}
