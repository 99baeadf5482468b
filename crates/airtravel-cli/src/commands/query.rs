//! Handlers for the route query subcommands.

use anyhow::{Context, Result};
use tracing::info;

use airtravel_lib::{mix_colors, plan_route, FlightNetwork, QuerySummary, Rgb, RouteRequest};

use crate::output::{render_summary, OutputFormat};
use crate::terminal::ColorPalette;

/// Presentation settings shared by the query subcommands.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub format: OutputFormat,
    /// Highlight colors assigned to result routes in order.
    pub highlight: Vec<Rgb>,
    /// Append blended edge colors to the output.
    pub show_colors: bool,
    pub style: ColorPalette,
}

/// Run a query and build the summary, mixing edge colors when requested.
pub fn run_query(
    network: &FlightNetwork,
    request: &RouteRequest,
    options: &QueryOptions,
) -> Result<QuerySummary> {
    let outcome = plan_route(network, request)
        .with_context(|| format!("failed to find {}", request.query))?;
    info!(
        query = request.query.label(),
        routes = outcome.len(),
        "query complete"
    );

    let summary = QuerySummary::new(request, outcome);
    if !options.show_colors {
        return Ok(summary);
    }

    let colors = mix_colors(&summary.outcome.paths(), &options.highlight)
        .context("failed to mix route colors")?;
    Ok(summary.with_edge_colors(colors))
}

/// Handle `cheapest`, `under-cost` and `within-stops`.
///
/// An empty result is reported in the output and is not an error.
pub fn handle_query(
    network: &FlightNetwork,
    request: &RouteRequest,
    options: &QueryOptions,
) -> Result<()> {
    let summary = run_query(network, request, options)?;
    print!("{}", render_summary(&summary, options.format, &options.style)?);
    Ok(())
}
