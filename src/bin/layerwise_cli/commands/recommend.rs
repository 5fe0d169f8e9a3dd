// ABOUTME: Recommend command for layerwise-cli
// ABOUTME: Loads a gear closet and profile, converts imperial input, and prints the outfit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use super::{load_profile, read_file};
use anyhow::Result;
use layerwise::constants::units::{fahrenheit_to_celsius, mph_to_kmh};
use layerwise::models::{ActivityContext, GearCatalog, ThermalProfile, WeatherSnapshot};
use layerwise::recommend;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Parsed arguments for the recommend command
pub struct RecommendArgs {
    pub catalog: PathBuf,
    pub profile: Option<PathBuf>,
    pub feels_like: f64,
    pub wind: f64,
    pub humidity: Option<f64>,
    pub precip: Option<f64>,
    pub activity: String,
    pub duration: f64,
    pub imperial: bool,
}

/// Build the weather snapshot in metric units
fn weather(args: &RecommendArgs) -> Result<WeatherSnapshot> {
    let (feels_like_c, wind_kmh) = if args.imperial {
        (fahrenheit_to_celsius(args.feels_like), mph_to_kmh(args.wind))
    } else {
        (args.feels_like, args.wind)
    };

    let mut snapshot = WeatherSnapshot::new(feels_like_c, wind_kmh)?;
    if let Some(humidity) = args.humidity {
        snapshot = snapshot.with_humidity(humidity)?;
    }
    if let Some(precip) = args.precip {
        snapshot = snapshot.with_precipitation(precip)?;
    }
    Ok(snapshot)
}

/// Recommend an outfit and serialize it
pub fn run(args: &RecommendArgs) -> Result<Value> {
    let catalog = GearCatalog::from_json(&read_file(&args.catalog)?)?;
    let profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => ThermalProfile::default(),
    };
    let weather = weather(args)?;
    let activity = ActivityContext::parse(&args.activity, args.duration)?;

    info!(
        feels_like_c = weather.feels_like_c(),
        wind_kmh = weather.wind_kmh(),
        items = catalog.len(),
        "recommending outfit"
    );
    let outfit = recommend(&weather, &activity, &profile, &catalog)?;
    Ok(serde_json::to_value(&outfit)?)
}
