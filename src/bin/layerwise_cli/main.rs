// ABOUTME: Layerwise CLI - command-line harness over the outfit engine
// ABOUTME: Onboards profiles, recommends outfits from a gear closet, and applies comfort feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors
//!
//! Usage:
//! ```bash
//! # Create a profile for someone who runs cold
//! layerwise-cli onboard --sensitivity 25 > profile.json
//!
//! # Recommend an outfit for a 45 minute run at 2°C feels-like with 15 km/h wind
//! layerwise-cli recommend --catalog closet.json --profile profile.json \
//!     --feels-like 2 --wind 15 --activity run --duration 45
//!
//! # Same in imperial units
//! layerwise-cli recommend --catalog closet.json --feels-like 36 --wind 9 --imperial
//!
//! # Apply post-run feedback and keep the updated profile
//! layerwise-cli feedback --profile profile.json --rating Legs=too_cold \
//!     --rating "Head & Hands=perfect" > profile-next.json
//! ```
//!
//! Results are printed to stdout as JSON. `onboard` and `feedback` print a bare
//! profile that `--profile` reads back; the sensitivity band, guidance, overall
//! verdict and logs go to stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use layerwise::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "layerwise-cli",
    about = "Layerwise outfit engine CLI",
    long_about = "Command-line harness for weather-aware workout outfit recommendations and comfort feedback."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create a thermal profile from the onboarding sensitivity slider
    Onboard {
        /// Slider value: 0 runs cold, 50 neutral, 100 runs hot
        #[arg(long, default_value = "50")]
        sensitivity: f64,
    },

    /// Recommend an outfit for the given weather and activity
    Recommend {
        /// Path to the gear catalog JSON
        #[arg(long)]
        catalog: PathBuf,

        /// Path to a thermal profile JSON (neutral profile if omitted)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Feels-like temperature (Celsius, or Fahrenheit with --imperial)
        #[arg(long, allow_hyphen_values = true)]
        feels_like: f64,

        /// Wind speed (km/h, or mph with --imperial)
        #[arg(long, default_value = "0")]
        wind: f64,

        /// Relative humidity percent
        #[arg(long)]
        humidity: Option<f64>,

        /// Precipitation chance percent
        #[arg(long)]
        precip: Option<f64>,

        /// Activity: run or cycle
        #[arg(long, default_value = "run")]
        activity: String,

        /// Planned duration in minutes
        #[arg(long, default_value = "45")]
        duration: f64,

        /// Interpret temperature as Fahrenheit and wind as mph
        #[arg(long)]
        imperial: bool,
    },

    /// Apply post-activity comfort ratings to a profile
    Feedback {
        /// Path to the thermal profile JSON
        #[arg(long)]
        profile: PathBuf,

        /// Zone rating as LABEL=RATING (too_cold, perfect, too_hot); repeatable
        #[arg(long = "rating", required = true)]
        ratings: Vec<String>,

        /// Learning rate override (configured default if omitted)
        #[arg(long)]
        alpha: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env().with_level(log_level).init()?;
    debug!("Layerwise CLI");

    let output = match cli.command {
        Command::Onboard { sensitivity } => commands::onboard::run(sensitivity)?,
        Command::Recommend {
            catalog,
            profile,
            feels_like,
            wind,
            humidity,
            precip,
            activity,
            duration,
            imperial,
        } => commands::recommend::run(&commands::recommend::RecommendArgs {
            catalog,
            profile,
            feels_like,
            wind,
            humidity,
            precip,
            activity,
            duration,
            imperial,
        })?,
        Command::Feedback {
            profile,
            ratings,
            alpha,
        } => commands::feedback::run(&profile, &ratings, alpha)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
