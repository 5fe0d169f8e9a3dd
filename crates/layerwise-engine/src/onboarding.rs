// ABOUTME: Thermal profile creation from the onboarding sensitivity slider
// ABOUTME: Seeds every zone delta from the slider using the configured scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use crate::config::OnboardingConfig;
use layerwise_core::errors::EngineResult;
use layerwise_core::models::ThermalProfile;
use tracing::info;

/// Create a profile for a new user
///
/// # Errors
///
/// Returns `InvalidProfileData` if the slider value is outside 0-100.
pub fn onboard_profile(
    base_sensitivity: f64,
    config: &OnboardingConfig,
) -> EngineResult<ThermalProfile> {
    let profile = ThermalProfile::seeded(base_sensitivity, config.seed_scale)?;
    info!(band = ?profile.band(), "thermal profile created");
    Ok(profile)
}
