// ABOUTME: Thermal model constants for target warmth computation and profile learning
// ABOUTME: Warmth scale bounds, feels-like anchors, zone multipliers, wind, heat offsets, feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! Thermal model constants
//!
//! Default values for every tunable in the outfit engine. The engine configuration
//! starts from these and may override them from the environment.
//!
//! These numbers are a reconstruction of intended product behaviour and have not
//! been validated against field data.

/// The continuous warmth scale that gear ratings and targets share
pub mod warmth_scale {
    /// Lower bound of the target warmth scale
    pub const MIN_WARMTH: f64 = 0.0;

    /// Upper bound of the target warmth scale
    pub const MAX_WARMTH: f64 = 12.0;

    /// Lowest legal gear warmth rating
    pub const MIN_GEAR_RATING: u8 = 1;

    /// Highest legal gear warmth rating
    pub const MAX_GEAR_RATING: u8 = 10;
}

/// Piecewise-linear feels-like to base warmth curve
///
/// Linear between anchors, extrapolated beyond them along the outer segments.
pub mod warmth_curve {
    /// Warm anchor temperature (°C)
    pub const WARM_ANCHOR_CELSIUS: f64 = 20.0;
    /// Base warmth at the warm anchor
    pub const WARM_ANCHOR_WARMTH: f64 = 1.0;

    /// Freezing anchor temperature (°C)
    pub const FREEZING_ANCHOR_CELSIUS: f64 = 0.0;
    /// Base warmth at the freezing anchor
    pub const FREEZING_ANCHOR_WARMTH: f64 = 6.0;

    /// Cold anchor temperature (°C)
    pub const COLD_ANCHOR_CELSIUS: f64 = -10.0;
    /// Base warmth at the cold anchor
    pub const COLD_ANCHOR_WARMTH: f64 = 10.0;
}

/// Relative insulation need per body zone
pub mod zone_exposure {
    /// Torso multiplier
    pub const TORSO: f64 = 1.0;
    /// Legs multiplier
    pub const LEGS: f64 = 0.8;
    /// Feet multiplier
    pub const FEET: f64 = 0.75;
    /// Hands multiplier
    pub const HANDS: f64 = 0.7;
    /// Head multiplier
    pub const HEAD: f64 = 0.6;
}

/// Wind chill adjustment
pub mod wind {
    /// Warmth added per 10 km/h of wind
    pub const WARMTH_PER_10_KMH: f64 = 0.3;

    /// Cap on the wind adjustment
    pub const MAX_ADJUSTMENT: f64 = 2.0;

    /// Weight applied to the wind adjustment on Legs and Feet
    pub const LIMB_WEIGHT: f64 = 0.5;
}

/// Metabolic heat offsets per activity
pub mod activity_heat {
    /// Running heat offset at full ramp
    pub const RUN_OFFSET: f64 = 1.5;

    /// Cycling heat offset at full ramp
    pub const CYCLE_OFFSET: f64 = 0.5;

    /// Minutes over which the heat offset ramps in linearly
    pub const RAMP_MINUTES: f64 = 20.0;
}

/// Feedback-driven profile learning
pub mod feedback {
    /// Default nudge applied per rating
    pub const DEFAULT_ALPHA: f64 = 0.2;

    /// Sensitivity deltas stay within `[-DELTA_BOUND, DELTA_BOUND]`
    pub const DELTA_BOUND: f64 = 3.0;
}

/// Onboarding slider seeding
pub mod onboarding {
    /// Slider midpoint (neither cold nor hot)
    pub const NEUTRAL_SENSITIVITY: f64 = 50.0;

    /// Lowest slider value
    pub const MIN_SENSITIVITY: f64 = 0.0;

    /// Highest slider value
    pub const MAX_SENSITIVITY: f64 = 100.0;

    /// Delta produced at either end of the slider
    pub const SEED_SCALE: f64 = 1.5;

    /// Below this the user is classified as running cold
    pub const RUNS_COLD_BELOW: f64 = 40.0;

    /// Above this the user is classified as running hot
    pub const RUNS_HOT_ABOVE: f64 = 60.0;
}

/// Display-only thresholds for rationale and advisories
pub mod advisory {
    /// Wind above which exposed zones mention wind in their rationale (km/h)
    pub const WIND_RATIONALE_KMH: f64 = 15.0;

    /// Wind at or above which a strong-wind advisory is raised (km/h)
    pub const STRONG_WIND_KMH: f64 = 30.0;

    /// Precipitation chance at or above which rain is flagged (%)
    pub const RAIN_LIKELY_PCT: f64 = 50.0;

    /// Humidity at or above which high humidity is flagged (%)
    pub const HIGH_HUMIDITY_PCT: f64 = 80.0;

    /// Target warmth at or above which Head/Hands mention extremity protection
    pub const EXTREMITY_PROTECTION_TARGET: f64 = 2.0;
}
