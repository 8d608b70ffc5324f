//! Command line front end for the dashboard pipeline.
//!
//! Reads backend response bodies from files or stdin and prints the records
//! the dashboard would render, as JSON on stdout. Logging goes to stderr and
//! is controlled with `RUST_LOG`.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use aqi_dashboard::{
    parse_current, parse_forecast, CurrentView, DashboardError, DashboardView, ForecastView,
};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "aqi_dashboard", about = "PM2.5 to AQI dashboard records")]
struct Cli {
    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a `/current` response body
    Current {
        /// Read the body from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Classify a forecast response body
    Forecast {
        /// Read the body from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Build the full dashboard from a current and a forecast body
    Dashboard {
        #[arg(long)]
        current: PathBuf,
        #[arg(long)]
        forecast: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Current { input } => {
            let payload = parse_current(&read_body(input.as_deref())?)?;
            render(&CurrentView::build(&payload)?, cli.pretty)?
        }
        Commands::Forecast { input } => {
            let readings = parse_forecast(&read_body(input.as_deref())?)?;
            render(&ForecastView::build(&readings), cli.pretty)?
        }
        Commands::Dashboard { current, forecast } => {
            let current = parse_current(&read_body(Some(&current))?)?;
            let forecast = parse_forecast(&read_body(Some(&forecast))?)?;
            render(&DashboardView::build(&current, &forecast)?, cli.pretty)?
        }
    };

    println!("{output}");
    Ok(())
}

/// Reads a whole response body from `path`, or from stdin when there is none.
fn read_body(path: Option<&Path>) -> Result<String, DashboardError> {
    let body = match path {
        Some(path) => {
            log::debug!("reading {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            log::debug!("reading stdin");
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };
    Ok(body)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, DashboardError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
