use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airtravel_lib::{
    load_network, parse_palette, resolve_network_path, FareClass, FlightNetwork, RouteRequest,
    SearchLimits, DEFAULT_PALETTE,
};
use airtravel_cli::commands::network::{handle_list_airports, handle_list_flights};
use airtravel_cli::commands::query::{handle_query, QueryOptions};
use airtravel_cli::commands::suggest::handle_suggest;
use airtravel_cli::output::OutputFormat;
use airtravel_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight network route queries")]
struct Cli {
    /// Network JSON file. Falls back to AIRTRAVEL_NETWORK, then the platform data directory.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Highlight colors for result routes, e.g. `#FF0000,#00FF00`.
    #[arg(long, value_delimiter = ',', global = true)]
    palette: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List airports ordered by code.
    Airports,
    /// List flights grouped by origin.
    Flights,
    /// Find the cheapest route for one fare class.
    Cheapest {
        #[command(flatten)]
        endpoints: Endpoints,
        /// Fare class to minimise.
        #[arg(long = "class", default_value = "economy")]
        class: FareClass,
        /// Only consider routes with at most this many flights.
        #[arg(long)]
        max_legs: Option<usize>,
        /// Abort the search when its queue grows past this many entries.
        #[arg(long)]
        max_queue: Option<usize>,
    },
    /// List every route whose economy or business total stays within a cap.
    UnderCost {
        #[command(flatten)]
        endpoints: Endpoints,
        /// Fare cap applied to either class.
        #[arg(long, allow_negative_numbers = true)]
        max_cost: f64,
    },
    /// List every route using at most the given number of flights.
    WithinStops {
        #[command(flatten)]
        endpoints: Endpoints,
        /// Maximum number of flights (edges) per route.
        #[arg(long, allow_negative_numbers = true)]
        max_stops: i64,
    },
    /// Show the next suggested airport and flight values.
    Suggest,
}

#[derive(Args, Debug)]
struct Endpoints {
    /// Departure airport code.
    #[arg(long = "from")]
    from: String,
    /// Arrival airport code.
    #[arg(long = "to")]
    to: String,
    /// Append blended highlight colors for every edge in the result.
    #[arg(long)]
    colors: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network = open_network(cli.network.as_deref())?;

    match cli.command {
        Command::Airports => handle_list_airports(&network, cli.format),
        Command::Flights => handle_list_flights(&network, cli.format),
        Command::Suggest => handle_suggest(&network, cli.format),
        Command::Cheapest {
            endpoints,
            class,
            max_legs,
            max_queue,
        } => {
            let options = query_options(&cli.palette, cli.format, endpoints.colors)?;
            let request = RouteRequest::cheapest(
                display_code(&endpoints.from),
                display_code(&endpoints.to),
                class,
            )
            .with_limits(SearchLimits {
                max_legs,
                max_queue_len: max_queue,
            });
            handle_query(&network, &request, &options)
        }
        Command::UnderCost {
            endpoints,
            max_cost,
        } => {
            let options = query_options(&cli.palette, cli.format, endpoints.colors)?;
            let request = RouteRequest::under_cost(
                display_code(&endpoints.from),
                display_code(&endpoints.to),
                max_cost,
            );
            handle_query(&network, &request, &options)
        }
        Command::WithinStops {
            endpoints,
            max_stops,
        } => {
            let options = query_options(&cli.palette, cli.format, endpoints.colors)?;
            let request = RouteRequest::within_stops(
                display_code(&endpoints.from),
                display_code(&endpoints.to),
                max_stops,
            );
            handle_query(&network, &request, &options)
        }
    }
}

fn open_network(explicit: Option<&Path>) -> Result<FlightNetwork> {
    let path = resolve_network_path(explicit).context("failed to locate the network file")?;
    load_network(&path).with_context(|| format!("failed to load network from {}", path.display()))
}

fn query_options(palette: &[String], format: OutputFormat, show_colors: bool) -> Result<QueryOptions> {
    let highlight = if palette.is_empty() {
        DEFAULT_PALETTE.to_vec()
    } else {
        parse_palette(palette).context("failed to parse --palette")?
    };

    Ok(QueryOptions {
        format,
        highlight,
        show_colors,
        style: ColorPalette::detect(),
    })
}

/// Codes are matched case-insensitively; echo them back upper-cased.
fn display_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
