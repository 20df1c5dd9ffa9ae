// ABOUTME: Trailcast CLI - terminal weather dashboard for runners and cyclists
// ABOUTME: Parses arguments, sets up logging, and dispatches show/search/watch/prefs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors
//!
//! Usage:
//! ```bash
//! # One-shot dashboard for a place
//! trailcast show --location "Lyon"
//!
//! # Cycling advisories in imperial units for explicit coordinates
//! trailcast --activity cycling --units imperial show --lat 45.76 --lon 4.84
//!
//! # Find a place
//! trailcast search "Springfield" --limit 10
//!
//! # Refresh every 5 minutes until Ctrl-C
//! trailcast watch --location "Lyon" --interval 5
//!
//! # Save defaults
//! trailcast prefs set --location "Lyon" --activity cycling
//! ```

mod commands;

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use trailcast::constants::limits;
use trailcast::formatters::OutputFormat;
use trailcast::logging;
use trailcast::models::{Activity, UnitSystem};
use tracing::error;

#[derive(Parser)]
#[command(
    name = "trailcast",
    version,
    about = "Weather dashboard with outdoor safety advisories",
    long_about = "Shows current conditions and a 12-hour outlook from Open-Meteo, each slot rated ideal, caution, or not recommended for running or cycling."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (text or json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Display units (metric or imperial)
    #[arg(long, global = true)]
    units: Option<UnitSystem>,

    /// Activity to rate conditions for (running or cycling)
    #[arg(long, global = true)]
    activity: Option<Activity>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Where to fetch weather for
#[derive(Args, Clone, Default)]
struct LocationArgs {
    /// Place name; the first geocoding match is used
    #[arg(long, short = 'l', conflicts_with_all = ["lat", "lon"])]
    location: Option<String>,

    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the dashboard once
    Show {
        #[command(flatten)]
        target: LocationArgs,
    },

    /// Search for places by name
    Search {
        /// Place name
        query: String,

        /// Maximum number of matches
        #[arg(long, default_value_t = limits::DEFAULT_SEARCH_RESULTS)]
        limit: u8,
    },

    /// Refresh the dashboard periodically until Ctrl-C
    Watch {
        #[command(flatten)]
        target: LocationArgs,

        /// Refresh interval in minutes (1 to 1440)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Manage saved preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PrefsCommand {
    /// Print saved preferences and the file they live in
    Show,

    /// Update saved preferences
    Set {
        #[command(flatten)]
        target: LocationArgs,

        /// Refresh interval in minutes for watch mode (1 to 1440)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Delete saved preferences
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_from_env(cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(
                code = %e.code,
                kind = e.code.description(),
                error = %e,
                "Command failed"
            );
            eprintln!("error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}
