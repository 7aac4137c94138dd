//! CLI entry point for the GTFS name normalizer.
//!
//! Provides subcommands for normalizing an extracted GTFS static feed
//! into presentation-ready records and for listing the routes the
//! agency profile keeps.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gtfs_name_normalizer::agency::{AgencyNormalizer, CentralFraserValley};
use gtfs_name_normalizer::feed::{read_feed, read_routes};
use gtfs_name_normalizer::normalize::{normalize_feed, resolve_route_id};
use gtfs_name_normalizer::output::write_normalized;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gtfs_name_normalizer")]
#[command(about = "Normalizes GTFS feed names for display", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a GTFS static feed directory
    Normalize {
        /// Directory containing routes.txt, trips.txt, stops.txt
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write normalized CSVs and the run summary to
        #[arg(short, long, default_value = "normalized")]
        output: PathBuf,
    },
    /// List the routes the agency profile keeps, with resolved ids and colors
    Routes {
        /// Directory containing routes.txt
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/gtfs_name_normalizer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gtfs_name_normalizer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let agency = CentralFraserValley;

    match cli.command {
        Commands::Normalize { input, output } => {
            info!(agency = agency.agency_name(), input = %input.display(), "Normalizing feed");

            let feed = read_feed(&input)?;
            let normalized = normalize_feed(&agency, &feed)?;
            write_normalized(&output, &normalized)?;

            info!(
                routes_kept = normalized.summary.routes_kept,
                routes_excluded = normalized.summary.routes_excluded,
                trips = normalized.summary.trips,
                stops = normalized.summary.stops,
                directions = normalized.summary.directions,
                "Normalization complete"
            );
        }
        Commands::Routes { input } => {
            let routes = read_routes(&input)?;

            let mut kept = 0usize;
            let mut excluded = 0usize;

            for route in &routes {
                if agency.should_exclude(route) {
                    excluded += 1;
                    debug!(
                        route_id = %route.route_id,
                        short_name = %route.route_short_name,
                        "Route excluded"
                    );
                    continue;
                }
                kept += 1;

                let color = match route.color() {
                    Some(feed_color) => feed_color.to_string(),
                    None if route.numeric_short_name().is_some() => agency.route_color(route)?,
                    None => agency.agency_color().to_string(),
                };

                info!(
                    route_id = %agency.clean_route_id(&route.route_id),
                    resolved_id = resolve_route_id(&agency, route),
                    short_name = %route.route_short_name,
                    long_name = %agency.clean_route_long_name(&route.route_long_name),
                    color = %color,
                    "Route"
                );
            }

            info!(total = routes.len(), kept, excluded, "Route list summary");
        }
    }

    Ok(())
}
