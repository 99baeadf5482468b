use std::fmt::Write;

use serde::Serialize;

use crate::color::{EdgeColors, Rgb};
use crate::path::Route;
use crate::routing::{RouteOutcome, RouteQuery, RouteRequest};

/// Structured representation of a query result that callers can serialise or
/// print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySummary {
    pub source: String,
    pub dest: String,
    pub query: RouteQuery,
    pub outcome: RouteOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_colors: Option<EdgeColors>,
}

impl QuerySummary {
    pub fn new(request: &RouteRequest, outcome: RouteOutcome) -> Self {
        Self {
            source: request.source.clone(),
            dest: request.dest.clone(),
            query: request.query.clone(),
            outcome,
            edge_colors: None,
        }
    }

    pub fn with_edge_colors(mut self, colors: EdgeColors) -> Self {
        self.edge_colors = Some(colors);
        self
    }

    /// Plain-text rendering, one line per route or leg.
    pub fn render_text(&self) -> String {
        self.render_text_with(|_| String::new())
    }

    /// Like [`render_text`](Self::render_text), with `swatch(color)` written
    /// before each edge in the edge color block.
    pub fn render_text_with<F>(&self, swatch: F) -> String
    where
        F: Fn(Rgb) -> String,
    {
        let mut buffer = String::new();
        let (from, to, query) = (&self.source, &self.dest, &self.query);

        match &self.outcome {
            RouteOutcome::Cheapest(Some(priced)) => {
                let _ = writeln!(
                    buffer,
                    "Cheapest {} route from {from} to {to}:",
                    priced.fare_class
                );
                let _ = writeln!(buffer, "Path: {}", format_route(&priced.route));
                let _ = writeln!(buffer, "Total Cost: ${:.2}", priced.total);
            }
            RouteOutcome::UnderCost(routes) if !routes.is_empty() => {
                let _ = writeln!(buffer, "{} from {from} to {to}:", capitalized(query));
                for (index, costed) in routes.iter().enumerate() {
                    let _ = writeln!(
                        buffer,
                        "Route {} - Economy: ${:.2}, Business: ${:.2}",
                        index + 1,
                        costed.economy_total,
                        costed.business_total
                    );
                    for leg in &costed.legs {
                        let _ = writeln!(
                            buffer,
                            "  • {} → {}  (Economy: ${:.2}, Business: ${:.2})",
                            leg.origin, leg.destination, leg.economy, leg.business
                        );
                    }
                }
            }
            RouteOutcome::WithinStops(routes) if !routes.is_empty() => {
                let _ = writeln!(buffer, "{} from {from} to {to}:", capitalized(query));
                for (index, route) in routes.iter().enumerate() {
                    let _ = writeln!(buffer, "Route {}: {}", index + 1, format_route(route));
                }
            }
            RouteOutcome::Cheapest(None)
            | RouteOutcome::UnderCost(_)
            | RouteOutcome::WithinStops(_) => {
                let _ = writeln!(buffer, "No {query} from {from} to {to}.");
            }
        }

        if let Some(colors) = self.edge_colors.as_ref().filter(|c| !c.is_empty()) {
            let _ = writeln!(buffer, "Edge colors:");
            for (edge, color) in colors.iter() {
                let _ = writeln!(
                    buffer,
                    "  {}{} → {}  {}",
                    swatch(*color),
                    edge.from,
                    edge.to,
                    color
                );
            }
        }

        buffer
    }
}

fn capitalized(query: &RouteQuery) -> String {
    let text = query.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}

/// Join route airports with arrows, e.g. `A → B → C`.
pub fn format_route(route: &Route) -> String {
    route.airports.join(" → ")
}
