//! AirTravel library entry points.
//!
//! This crate owns the flight network model and the route queries that run
//! over it: cheapest fare, every route under a fare cap, and every route
//! within a flight-count budget. It also blends highlight colors for
//! renderers. Higher-level consumers (the CLI, embedding services) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

pub mod color;
pub mod dataset;
pub mod defaults;
pub mod error;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use color::{
    mix_colors, node_colors, parse_palette, DirectedEdge, EdgeColors, Rgb, DEFAULT_EDGE_COLOR,
    DEFAULT_PALETTE, FALLBACK_GRAY,
};
pub use dataset::{
    default_network_path, load_network, network_to_json, parse_network, resolve_network_path,
    FlightRecord, NetworkDocument, NETWORK_PATH_ENV,
};
pub use defaults::{AirportDefaults, DefaultsGenerator, FlightDefaults};
pub use error::{Error, Result};
pub use network::{Airport, AirportCode, FareClass, Flight, FlightNetwork};
pub use output::{format_route, QuerySummary};
pub use path::{
    enumerate_under_cost, enumerate_within_stops, find_cheapest, find_cheapest_with_limits,
    CostedRoute, LegDetail, PricedRoute, Route, SearchLimits,
};
pub use routing::{plan_route, RouteOutcome, RouteQuery, RouteRequest};
