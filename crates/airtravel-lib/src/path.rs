use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::network::{AirportCode, FareClass, FlightNetwork};

/// Ordered sequence of airports joined by flights.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Route {
    pub airports: Vec<AirportCode>,
}

impl Route {
    pub fn new(airports: Vec<AirportCode>) -> Self {
        Self { airports }
    }

    /// Number of flights taken, i.e. airports minus one.
    pub fn hop_count(&self) -> usize {
        self.airports.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.airports
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    pub fn source(&self) -> Option<&str> {
        self.airports.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.airports.last().map(String::as_str)
    }
}

/// Cheapest route together with its total fare.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedRoute {
    pub route: Route,
    pub fare_class: FareClass,
    pub total: f64,
}

/// Per-flight fares recorded while enumerating routes under a cost cap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegDetail {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub economy: f64,
    pub business: f64,
}

/// Route with both fare totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostedRoute {
    pub route: Route,
    pub legs: Vec<LegDetail>,
    pub economy_total: f64,
    pub business_total: f64,
}

/// Optional ceilings for the cheapest-route search. Both are unbounded by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchLimits {
    /// Paths holding this many flights are not extended further.
    pub max_legs: Option<usize>,
    /// Fail with [`Error::SearchLimitExceeded`] instead of growing the queue past this size.
    pub max_queue_len: Option<usize>,
}

/// Reject networks too small to route over.
pub(crate) fn ensure_queryable(network: &FlightNetwork) -> Result<()> {
    if network.airport_count() < 2 {
        return Err(Error::invalid_parameter(format!(
            "route queries need at least two airports, network has {}",
            network.airport_count()
        )));
    }
    Ok(())
}

/// Reject negative or NaN fare caps.
pub(crate) fn check_cost_cap(cap: f64) -> Result<()> {
    if cap.is_nan() || cap < 0.0 {
        return Err(Error::invalid_parameter(format!(
            "maximum cost must be zero or greater, got {cap}"
        )));
    }
    Ok(())
}

fn resolve_endpoints(
    network: &FlightNetwork,
    source: &str,
    dest: &str,
) -> Result<(AirportCode, AirportCode)> {
    Ok((network.resolve(source)?, network.resolve(dest)?))
}

/// Find the minimum-fare route from `source` to `dest` for `fare_class`.
///
/// Codes are matched case-insensitively. Returns `Ok(None)` when no route
/// exists and `InvalidAirport` when either endpoint is unknown.
pub fn find_cheapest(
    network: &FlightNetwork,
    source: &str,
    dest: &str,
    fare_class: FareClass,
) -> Result<Option<PricedRoute>> {
    find_cheapest_with_limits(network, source, dest, fare_class, &SearchLimits::default())
}

/// Priority search whose queue entries carry the full path so far.
///
/// A destination entry is recorded but never expanded, while the queue keeps
/// draining so other entries reaching the destination are still compared.
/// Equal fares are dequeued in discovery order.
///
/// With `max_legs` set, best costs are kept per airport and flight count, and
/// an entry is pruned only when a path with no more flights reached the same
/// airport at most as cheaply. The result is then the cheapest route using at
/// most `max_legs` flights.
pub fn find_cheapest_with_limits(
    network: &FlightNetwork,
    source: &str,
    dest: &str,
    fare_class: FareClass,
    limits: &SearchLimits,
) -> Result<Option<PricedRoute>> {
    ensure_queryable(network)?;
    let (source, dest) = resolve_endpoints(network, source, dest)?;

    let layer = |legs: usize| if limits.max_legs.is_some() { legs } else { 0 };
    // Indexed by layer; unlimited searches only use layer 0.
    let mut best_costs: HashMap<&str, Vec<f64>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;
    let mut best: Option<(Vec<AirportCode>, f64)> = None;
    let mut popped = 0usize;

    best_costs.insert(source.as_str(), vec![0.0]);
    queue.push(PathEntry::new(0.0, sequence, vec![source.clone()]));

    while let Some(entry) = queue.pop() {
        popped += 1;
        let cost = entry.cost.0;
        let legs = entry.path.len().saturating_sub(1);
        let current = entry.current();

        let known = best_costs
            .get(current)
            .and_then(|costs| costs.get(layer(legs)))
            .copied()
            .unwrap_or(f64::INFINITY);
        if cost > known {
            continue;
        }

        if current == dest.as_str() {
            let improves = best
                .as_ref()
                .map_or(true, |(_, best_cost)| cost < *best_cost);
            if improves {
                best = Some((entry.path, cost));
            }
            continue;
        }

        if limits.max_legs.is_some_and(|max| legs >= max) {
            continue;
        }

        let next_layer = layer(legs + 1);
        for flight in network.neighbors(current) {
            let next = flight.destination.as_str();
            let next_cost = cost + flight.fare(fare_class);
            let dominated = best_costs.get(next).is_some_and(|costs| {
                costs
                    .iter()
                    .take(next_layer + 1)
                    .any(|&known| known <= next_cost)
            });
            if dominated {
                continue;
            }

            if let Some(limit) = limits.max_queue_len {
                if queue.len() >= limit {
                    warn!(limit, "cheapest-route queue limit reached");
                    return Err(Error::SearchLimitExceeded { limit });
                }
            }

            let costs = best_costs.entry(next).or_default();
            if costs.len() <= next_layer {
                costs.resize(next_layer + 1, f64::INFINITY);
            }
            costs[next_layer] = next_cost;

            let mut path = entry.path.clone();
            path.push(flight.destination.clone());
            sequence += 1;
            queue.push(PathEntry::new(next_cost, sequence, path));
        }
    }

    debug!(popped, found = best.is_some(), %fare_class, "cheapest-route search finished");

    Ok(best.map(|(airports, total)| PricedRoute {
        route: Route::new(airports),
        fare_class,
        total,
    }))
}

/// Enumerate every simple route whose economy or business total stays within `cap`.
///
/// A flight is taken when at least one running total stays at or under the
/// cap, so a route may exceed the cap in the other class. Results are sorted
/// by economy total, keeping discovery order for ties. A negative or NaN cap
/// is `InvalidParameter`.
pub fn enumerate_under_cost(
    network: &FlightNetwork,
    source: &str,
    dest: &str,
    cap: f64,
) -> Result<Vec<CostedRoute>> {
    ensure_queryable(network)?;
    check_cost_cap(cap)?;
    let (source, dest) = resolve_endpoints(network, source, dest)?;

    let mut search = CostSearch {
        network,
        dest: &dest,
        cap,
        visited: HashSet::from([source.as_str()]),
        trail: vec![source.clone()],
        legs: Vec::new(),
        found: Vec::new(),
    };
    search.visit(&source, 0.0, 0.0);

    let mut found = search.found;
    found.sort_by(|a, b| a.economy_total.total_cmp(&b.economy_total));
    debug!(routes = found.len(), cap, "cost-capped enumeration finished");
    Ok(found)
}

struct CostSearch<'a> {
    network: &'a FlightNetwork,
    dest: &'a str,
    cap: f64,
    visited: HashSet<&'a str>,
    trail: Vec<AirportCode>,
    legs: Vec<LegDetail>,
    found: Vec<CostedRoute>,
}

impl<'a> CostSearch<'a> {
    fn visit(&mut self, current: &'a str, economy: f64, business: f64) {
        if current == self.dest {
            self.found.push(CostedRoute {
                route: Route::new(self.trail.clone()),
                legs: self.legs.clone(),
                economy_total: economy,
                business_total: business,
            });
            return;
        }

        let network = self.network;
        for flight in network.neighbors(current) {
            let next = flight.destination.as_str();
            let next_economy = economy + flight.economy;
            let next_business = business + flight.business;
            if self.visited.contains(next)
                || (next_economy > self.cap && next_business > self.cap)
            {
                continue;
            }

            self.visited.insert(next);
            self.trail.push(flight.destination.clone());
            self.legs.push(LegDetail {
                origin: flight.origin.clone(),
                destination: flight.destination.clone(),
                economy: flight.economy,
                business: flight.business,
            });

            self.visit(next, next_economy, next_business);

            self.legs.pop();
            self.trail.pop();
            self.visited.remove(next);
        }
    }
}

/// Enumerate every simple route using at most `max_legs` flights.
///
/// The bound counts flights (edges), so a direct flight uses one. Reaching
/// `dest` records the route and the search keeps extending it while budget
/// remains. Results are sorted by hop count.
pub fn enumerate_within_stops(
    network: &FlightNetwork,
    source: &str,
    dest: &str,
    max_legs: usize,
) -> Result<Vec<Route>> {
    ensure_queryable(network)?;
    let (source, dest) = resolve_endpoints(network, source, dest)?;

    let mut queue: VecDeque<Vec<AirportCode>> = VecDeque::from([vec![source]]);
    let mut routes = Vec::new();

    while let Some(path) = queue.pop_front() {
        let legs = path.len().saturating_sub(1);
        if legs > max_legs {
            continue;
        }

        let Some(current) = path.last() else {
            continue;
        };
        if *current == dest {
            routes.push(Route::new(path.clone()));
        }

        if legs < max_legs {
            for flight in network.neighbors(current) {
                if !path.contains(&flight.destination) {
                    let mut extended = path.clone();
                    extended.push(flight.destination.clone());
                    queue.push_back(extended);
                }
            }
        }
    }

    routes.sort_by_key(Route::hop_count);
    debug!(routes = routes.len(), max_legs, "stop-bounded enumeration finished");
    Ok(routes)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct PathEntry {
    cost: FloatOrd,
    sequence: u64,
    path: Vec<AirportCode>,
}

impl PathEntry {
    fn new(cost: f64, sequence: u64, path: Vec<AirportCode>) -> Self {
        Self {
            cost: FloatOrd(cost),
            sequence,
            path,
        }
    }

    fn current(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }
}

impl Ord for PathEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // discovery order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for PathEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
