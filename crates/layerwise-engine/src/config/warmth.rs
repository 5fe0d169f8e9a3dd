// ABOUTME: Target warmth configuration: feels-like curve, zone exposure, wind, and activity heat
// ABOUTME: Defaults come from the thermal constants table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use layerwise_core::constants::thermal::{activity_heat, warmth_curve, wind, zone_exposure};
use layerwise_core::models::{Activity, BodyZone};
use serde::{Deserialize, Serialize};

/// Piecewise-linear feels-like to base warmth curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmthCurveConfig {
    /// Warm anchor temperature (°C)
    pub warm_anchor_celsius: f64,
    /// Base warmth at the warm anchor
    pub warm_anchor_warmth: f64,
    /// Freezing anchor temperature (°C)
    pub freezing_anchor_celsius: f64,
    /// Base warmth at the freezing anchor
    pub freezing_anchor_warmth: f64,
    /// Cold anchor temperature (°C)
    pub cold_anchor_celsius: f64,
    /// Base warmth at the cold anchor
    pub cold_anchor_warmth: f64,
}

impl Default for WarmthCurveConfig {
    fn default() -> Self {
        Self {
            warm_anchor_celsius: warmth_curve::WARM_ANCHOR_CELSIUS,
            warm_anchor_warmth: warmth_curve::WARM_ANCHOR_WARMTH,
            freezing_anchor_celsius: warmth_curve::FREEZING_ANCHOR_CELSIUS,
            freezing_anchor_warmth: warmth_curve::FREEZING_ANCHOR_WARMTH,
            cold_anchor_celsius: warmth_curve::COLD_ANCHOR_CELSIUS,
            cold_anchor_warmth: warmth_curve::COLD_ANCHOR_WARMTH,
        }
    }
}

/// Relative insulation need per zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneExposureConfig {
    /// Head multiplier
    pub head: f64,
    /// Torso multiplier
    pub torso: f64,
    /// Legs multiplier
    pub legs: f64,
    /// Feet multiplier
    pub feet: f64,
    /// Hands multiplier
    pub hands: f64,
}

impl Default for ZoneExposureConfig {
    fn default() -> Self {
        Self {
            head: zone_exposure::HEAD,
            torso: zone_exposure::TORSO,
            legs: zone_exposure::LEGS,
            feet: zone_exposure::FEET,
            hands: zone_exposure::HANDS,
        }
    }
}

impl ZoneExposureConfig {
    /// Multiplier for a zone
    #[must_use]
    pub const fn multiplier(&self, zone: BodyZone) -> f64 {
        match zone {
            BodyZone::Head => self.head,
            BodyZone::Torso => self.torso,
            BodyZone::Legs => self.legs,
            BodyZone::Feet => self.feet,
            BodyZone::Hands => self.hands,
        }
    }
}

/// Wind chill adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindConfig {
    /// Warmth added per 10 km/h
    pub warmth_per_10_kmh: f64,
    /// Cap on the adjustment
    pub max_adjustment: f64,
    /// Share of the adjustment applied to Legs and Feet
    pub limb_weight: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            warmth_per_10_kmh: wind::WARMTH_PER_10_KMH,
            max_adjustment: wind::MAX_ADJUSTMENT,
            limb_weight: wind::LIMB_WEIGHT,
        }
    }
}

impl WindConfig {
    /// Share of the wind adjustment a zone receives
    #[must_use]
    pub const fn zone_weight(&self, zone: BodyZone) -> f64 {
        match zone {
            BodyZone::Legs | BodyZone::Feet => self.limb_weight,
            BodyZone::Head | BodyZone::Torso | BodyZone::Hands => 1.0,
        }
    }
}

/// Metabolic heat offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityHeatConfig {
    /// Running offset at full ramp
    pub run_offset: f64,
    /// Cycling offset at full ramp
    pub cycle_offset: f64,
    /// Minutes for the offset to ramp in
    pub ramp_minutes: f64,
}

impl Default for ActivityHeatConfig {
    fn default() -> Self {
        Self {
            run_offset: activity_heat::RUN_OFFSET,
            cycle_offset: activity_heat::CYCLE_OFFSET,
            ramp_minutes: activity_heat::RAMP_MINUTES,
        }
    }
}

impl ActivityHeatConfig {
    /// Full-ramp offset for an activity
    #[must_use]
    pub const fn offset(&self, activity: Activity) -> f64 {
        match activity {
            Activity::Run => self.run_offset,
            Activity::Cycle => self.cycle_offset,
        }
    }
}
