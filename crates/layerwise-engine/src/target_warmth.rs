// ABOUTME: Target warmth calculation per body zone from weather, activity, and thermal profile
// ABOUTME: Feels-like curve, zone exposure, wind chill, metabolic heat offset, and learned delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! Target warmth calculator
//!
//! `target = clamp(base(feels_like) * exposure(zone) + wind(zone) - heat(activity) + delta(zone), 0, 12)`
//!
//! Pure and deterministic: identical inputs always produce the same value.

use crate::config::{ActivityHeatConfig, EngineConfig, WarmthCurveConfig, WindConfig};
use layerwise_core::constants::thermal::warmth_scale::{MAX_WARMTH, MIN_WARMTH};
use layerwise_core::errors::EngineResult;
use layerwise_core::models::{ActivityContext, BodyZone, ThermalProfile, WeatherSnapshot};
use serde::Serialize;

/// Each term of a zone's target warmth
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmthBreakdown {
    /// Zone the breakdown is for
    pub zone: BodyZone,
    /// Base warmth from the feels-like curve
    pub base: f64,
    /// Base scaled by zone exposure
    pub zoned: f64,
    /// Wind chill contribution
    pub wind_adjustment: f64,
    /// Metabolic heat subtracted for the activity
    pub heat_offset: f64,
    /// Learned sensitivity delta
    pub sensitivity_delta: f64,
    /// Final clamped target
    pub target: f64,
}

/// Computes per-zone target warmth against a configuration
#[derive(Debug, Clone, Copy)]
pub struct TargetWarmthCalculator<'c> {
    config: &'c EngineConfig,
}

impl Default for TargetWarmthCalculator<'static> {
    fn default() -> Self {
        Self::new(EngineConfig::global())
    }
}

impl<'c> TargetWarmthCalculator<'c> {
    /// Create a calculator over the given configuration
    #[must_use]
    pub const fn new(config: &'c EngineConfig) -> Self {
        Self { config }
    }

    /// Target warmth for one zone
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileData` if the profile fails validation.
    pub fn target_warmth(
        &self,
        zone: BodyZone,
        weather: &WeatherSnapshot,
        activity: &ActivityContext,
        profile: &ThermalProfile,
    ) -> EngineResult<f64> {
        profile.validate()?;
        Ok(self.breakdown(zone, weather, activity, profile).target)
    }

    /// Every term of the target for one zone
    ///
    /// The profile must already be validated.
    #[must_use]
    pub fn breakdown(
        &self,
        zone: BodyZone,
        weather: &WeatherSnapshot,
        activity: &ActivityContext,
        profile: &ThermalProfile,
    ) -> WarmthBreakdown {
        let base = base_warmth_for_feels_like(weather.feels_like_c(), &self.config.warmth_curve);
        let zoned = base * self.config.zone_exposure.multiplier(zone);
        let wind_adjustment = wind_adjustment(zone, weather.wind_kmh(), &self.config.wind);
        let heat_offset = heat_offset(activity, &self.config.activity_heat);
        let sensitivity_delta = profile.sensitivity_delta(zone);
        let target = (zoned + wind_adjustment - heat_offset + sensitivity_delta)
            .clamp(MIN_WARMTH, MAX_WARMTH);

        WarmthBreakdown {
            zone,
            base,
            zoned,
            wind_adjustment,
            heat_offset,
            sensitivity_delta,
            target,
        }
    }
}

/// Base warmth for an apparent temperature
///
/// Linear between the cold, freezing and warm anchors; beyond the outer anchors
/// the nearest segment is extended. The result is clamped to the warmth scale.
#[must_use]
pub fn base_warmth_for_feels_like(feels_like_c: f64, curve: &WarmthCurveConfig) -> f64 {
    let raw = if feels_like_c >= curve.freezing_anchor_celsius {
        interpolate(
            (curve.freezing_anchor_celsius, curve.freezing_anchor_warmth),
            (curve.warm_anchor_celsius, curve.warm_anchor_warmth),
            feels_like_c,
        )
    } else {
        interpolate(
            (curve.cold_anchor_celsius, curve.cold_anchor_warmth),
            (curve.freezing_anchor_celsius, curve.freezing_anchor_warmth),
            feels_like_c,
        )
    };
    raw.clamp(MIN_WARMTH, MAX_WARMTH)
}

/// Wind chill contribution for a zone, capped and weighted by exposure
#[must_use]
pub fn wind_adjustment(zone: BodyZone, wind_kmh: f64, wind: &WindConfig) -> f64 {
    let full = (wind_kmh / 10.0 * wind.warmth_per_10_kmh).min(wind.max_adjustment);
    full * wind.zone_weight(zone)
}

/// Metabolic heat offset, ramping in over the configured minutes then flat
#[must_use]
pub fn heat_offset(activity: &ActivityContext, heat: &ActivityHeatConfig) -> f64 {
    let ramp = (activity.duration_minutes() / heat.ramp_minutes).min(1.0);
    heat.offset(activity.activity()) * ramp
}

fn interpolate((x0, y0): (f64, f64), (x1, y1): (f64, f64), x: f64) -> f64 {
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_curve_hits_anchors_exactly() {
        let curve = WarmthCurveConfig::default();
        assert_eq!(base_warmth_for_feels_like(20.0, &curve), 1.0);
        assert_eq!(base_warmth_for_feels_like(0.0, &curve), 6.0);
        assert_eq!(base_warmth_for_feels_like(-10.0, &curve), 10.0);
    }

    #[test]
    fn test_curve_extrapolates_then_clamps() {
        let curve = WarmthCurveConfig::default();
        // 0.25 per degree above freezing
        assert_eq!(base_warmth_for_feels_like(24.0, &curve), 0.0);
        assert_eq!(base_warmth_for_feels_like(40.0, &curve), 0.0);
        // 0.4 per degree below freezing
        assert!((base_warmth_for_feels_like(-15.0, &curve) - 12.0).abs() < 1e-9);
        assert_eq!(base_warmth_for_feels_like(-30.0, &curve), 12.0);
    }

    #[test]
    fn test_interpolate_midpoint() {
        assert!((interpolate((0.0, 6.0), (20.0, 1.0), 10.0) - 3.5).abs() < 1e-12);
    }
}
