// ABOUTME: Command modules for layerwise-cli
// ABOUTME: Onboarding, outfit recommendation, and feedback commands plus shared file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

pub mod feedback;
pub mod onboard;
pub mod recommend;

use anyhow::{Context, Result};
use layerwise::models::ThermalProfile;
use std::fs;
use std::path::Path;

/// Read a file into a string with the path in the error
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Load and validate a stored thermal profile
pub fn load_profile(path: &Path) -> Result<ThermalProfile> {
    let profile: ThermalProfile = serde_json::from_str(&read_file(path)?)
        .with_context(|| format!("invalid profile JSON in {}", path.display()))?;
    profile.validate()?;
    Ok(profile)
}
