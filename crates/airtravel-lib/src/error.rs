use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the AirTravel library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when adding an airport whose code is already present.
    #[error("airport {code} already exists")]
    DuplicateAirport { code: String },

    /// Raised when an operation references an airport absent from the network.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    InvalidAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a flight would depart from and arrive at the same airport.
    #[error("flight cannot depart from and arrive at {code}")]
    SelfLoopFlight { code: String },

    /// Raised for malformed query or mutation parameters.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Raised when removing a flight index that does not exist for an origin.
    #[error("no flight #{index} departs from {origin}")]
    FlightNotFound { origin: String, index: usize },

    /// Raised when the cheapest-route search grows its queue past a configured ceiling.
    #[error("route search exceeded the queue limit of {limit} entries")]
    SearchLimitExceeded { limit: usize },

    /// Raised when a palette entry is not a `#RRGGBB` color.
    #[error("invalid color '{value}'; expected #RRGGBB")]
    InvalidColor { value: String },

    /// Network description could not be located at the resolved path.
    #[error("network file not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default network file")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
