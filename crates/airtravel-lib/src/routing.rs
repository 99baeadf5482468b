use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{FareClass, FlightNetwork};
use crate::path::{
    check_cost_cap, enumerate_under_cost, enumerate_within_stops, ensure_queryable,
    find_cheapest_with_limits, CostedRoute, PricedRoute, Route, SearchLimits,
};

/// The three supported route queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteQuery {
    /// Minimum-fare route for one fare class.
    Cheapest {
        fare_class: FareClass,
        #[serde(skip)]
        limits: SearchLimits,
    },
    /// Every simple route whose economy or business total stays within `max_cost`.
    UnderCost { max_cost: f64 },
    /// Every simple route using at most `max_stops` flights (edges, not layovers).
    WithinStops { max_stops: i64 },
}

impl RouteQuery {
    /// Short identifier used in logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            RouteQuery::Cheapest { .. } => "cheapest",
            RouteQuery::UnderCost { .. } => "under_cost",
            RouteQuery::WithinStops { .. } => "within_stops",
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            RouteQuery::Cheapest { .. } => Ok(()),
            RouteQuery::UnderCost { max_cost } => check_cost_cap(max_cost),
            RouteQuery::WithinStops { max_stops } => {
                if max_stops < 0 {
                    Err(Error::invalid_parameter(format!(
                        "maximum stops must be zero or greater, got {max_stops}"
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteQuery::Cheapest { fare_class, .. } => write!(f, "cheapest {fare_class} route"),
            RouteQuery::UnderCost { max_cost } => write!(f, "routes under ${max_cost:.2}"),
            RouteQuery::WithinStops { max_stops } => {
                write!(f, "routes with up to {max_stops} stops")
            }
        }
    }
}

/// Route query between two airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    pub source: String,
    pub dest: String,
    pub query: RouteQuery,
}

impl RouteRequest {
    pub fn cheapest(source: impl Into<String>, dest: impl Into<String>, fare_class: FareClass) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            query: RouteQuery::Cheapest {
                fare_class,
                limits: SearchLimits::default(),
            },
        }
    }

    pub fn under_cost(source: impl Into<String>, dest: impl Into<String>, max_cost: f64) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            query: RouteQuery::UnderCost { max_cost },
        }
    }

    pub fn within_stops(source: impl Into<String>, dest: impl Into<String>, max_stops: i64) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            query: RouteQuery::WithinStops { max_stops },
        }
    }

    /// Apply ceilings to a cheapest-route request; other queries ignore them.
    pub fn with_limits(mut self, new_limits: SearchLimits) -> Self {
        if let RouteQuery::Cheapest { limits, .. } = &mut self.query {
            *limits = new_limits;
        }
        self
    }
}

/// Result of a route query. Empty results are not errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "routes", rename_all = "snake_case")]
pub enum RouteOutcome {
    Cheapest(Option<PricedRoute>),
    UnderCost(Vec<CostedRoute>),
    WithinStops(Vec<Route>),
}

impl RouteOutcome {
    pub fn is_empty(&self) -> bool {
        match self {
            RouteOutcome::Cheapest(found) => found.is_none(),
            RouteOutcome::UnderCost(routes) => routes.is_empty(),
            RouteOutcome::WithinStops(routes) => routes.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RouteOutcome::Cheapest(found) => usize::from(found.is_some()),
            RouteOutcome::UnderCost(routes) => routes.len(),
            RouteOutcome::WithinStops(routes) => routes.len(),
        }
    }

    /// Routes in result order, ready for [`crate::color::mix_colors`].
    pub fn paths(&self) -> Vec<Route> {
        match self {
            RouteOutcome::Cheapest(found) => found.iter().map(|p| p.route.clone()).collect(),
            RouteOutcome::UnderCost(routes) => routes.iter().map(|r| r.route.clone()).collect(),
            RouteOutcome::WithinStops(routes) => routes.clone(),
        }
    }
}

/// Validate a request against the network and run the selected query.
pub fn plan_route(network: &FlightNetwork, request: &RouteRequest) -> Result<RouteOutcome> {
    ensure_queryable(network)?;
    request.query.validate()?;

    let (source, dest) = (request.source.as_str(), request.dest.as_str());
    debug!(query = request.query.label(), source, dest, "planning route");

    let outcome = match &request.query {
        RouteQuery::Cheapest { fare_class, limits } => RouteOutcome::Cheapest(
            find_cheapest_with_limits(network, source, dest, *fare_class, limits)?,
        ),
        RouteQuery::UnderCost { max_cost } => {
            RouteOutcome::UnderCost(enumerate_under_cost(network, source, dest, *max_cost)?)
        }
        RouteQuery::WithinStops { max_stops } => {
            let max_legs = usize::try_from(*max_stops)
                .map_err(|_| Error::invalid_parameter("maximum stops out of range"))?;
            RouteOutcome::WithinStops(enumerate_within_stops(network, source, dest, max_legs)?)
        }
    };

    debug!(query = request.query.label(), results = outcome.len(), "route query complete");
    Ok(outcome)
}
