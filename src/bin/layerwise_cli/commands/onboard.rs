// ABOUTME: Onboard command for layerwise-cli
// ABOUTME: Seeds a thermal profile from the sensitivity slider; guidance goes to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use anyhow::Result;
use layerwise::{onboard_profile, EngineConfig};
use serde_json::Value;

/// Create a profile and report its sensitivity band
///
/// Only the profile is returned so that stdout can be saved and passed back
/// with `--profile`.
pub fn run(sensitivity: f64) -> Result<Value> {
    let profile = onboard_profile(sensitivity, &EngineConfig::global().onboarding)?;
    let band = profile.band();
    eprintln!("Sensitivity band: {}", serde_json::to_value(band)?);
    eprintln!("{}", band.guidance());
    Ok(serde_json::to_value(&profile)?)
}
