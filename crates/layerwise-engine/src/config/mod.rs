// ABOUTME: Engine configuration for target warmth, wind, activity heat, and profile learning
// ABOUTME: Loads defaults, applies environment overrides, and validates before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! Engine Configuration Module
//!
//! Provides validated configuration for every tunable in the outfit engine.
//!
//! # Module Structure
//!
//! - `warmth` - feels-like curve, zone exposure, wind and activity heat
//! - `learning` - feedback learning rate and onboarding seed scale
//! - `error` - configuration error type
//!
//! Configuration is environment-only: `EngineConfig::load()` starts from the
//! thermal constants and applies `LAYERWISE_*` overrides.

/// Configuration error type
pub mod error;
/// Feedback learning rate and onboarding seed settings
pub mod learning;
/// Warmth curve, zone exposure, wind and activity heat settings
pub mod warmth;

pub use error::ConfigError;
pub use learning::{FeedbackConfig, OnboardingConfig};
pub use warmth::{ActivityHeatConfig, WarmthCurveConfig, WindConfig, ZoneExposureConfig};

use layerwise_core::constants::thermal::feedback::DELTA_BOUND;
use layerwise_core::models::BodyZone;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Feels-like to base warmth curve
    pub warmth_curve: WarmthCurveConfig,
    /// Per-zone exposure multipliers
    pub zone_exposure: ZoneExposureConfig,
    /// Wind chill adjustment
    pub wind: WindConfig,
    /// Metabolic heat offsets
    pub activity_heat: ActivityHeatConfig,
    /// Feedback learning
    pub feedback: FeedbackConfig,
    /// Onboarding seed
    pub onboarding: OnboardingConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_warmth_curve()?;

        if BodyZone::ALL
            .into_iter()
            .any(|zone| !Self::is_positive(self.zone_exposure.multiplier(zone)))
        {
            return Err(ConfigError::ValueOutOfRange(
                "zone exposure multipliers must be positive",
            ));
        }

        let wind = &self.wind;
        if !Self::is_non_negative(wind.warmth_per_10_kmh)
            || !Self::is_non_negative(wind.max_adjustment)
        {
            return Err(ConfigError::ValueOutOfRange(
                "wind adjustment settings must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&wind.limb_weight) {
            return Err(ConfigError::ValueOutOfRange(
                "wind limb weight must be within 0-1",
            ));
        }

        let heat = &self.activity_heat;
        if !Self::is_non_negative(heat.run_offset) || !Self::is_non_negative(heat.cycle_offset) {
            return Err(ConfigError::ValueOutOfRange(
                "activity heat offsets must be non-negative",
            ));
        }
        if !Self::is_positive(heat.ramp_minutes) {
            return Err(ConfigError::ValueOutOfRange(
                "activity heat ramp must be positive",
            ));
        }

        if !(Self::is_positive(self.feedback.alpha) && self.feedback.alpha <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "feedback alpha must be within (0, 1]",
            ));
        }

        if !(0.0..=DELTA_BOUND).contains(&self.onboarding.seed_scale) {
            return Err(ConfigError::ValueOutOfRange(
                "onboarding seed scale must be within the delta bound",
            ));
        }

        Ok(())
    }

    fn validate_warmth_curve(&self) -> Result<(), ConfigError> {
        let curve = &self.warmth_curve;
        let values = [
            curve.cold_anchor_celsius,
            curve.cold_anchor_warmth,
            curve.freezing_anchor_celsius,
            curve.freezing_anchor_warmth,
            curve.warm_anchor_celsius,
            curve.warm_anchor_warmth,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "warmth curve anchors must be finite",
            ));
        }
        if curve.cold_anchor_celsius >= curve.freezing_anchor_celsius
            || curve.freezing_anchor_celsius >= curve.warm_anchor_celsius
        {
            return Err(ConfigError::InvalidRange(
                "warmth curve anchor temperatures must be strictly ascending",
            ));
        }
        // Colder must never mean less warmth
        if curve.cold_anchor_warmth < curve.freezing_anchor_warmth
            || curve.freezing_anchor_warmth < curve.warm_anchor_warmth
        {
            return Err(ConfigError::InvalidRange(
                "warmth curve must not decrease as temperature falls",
            ));
        }
        Ok(())
    }

    fn is_positive(value: f64) -> bool {
        value.is_finite() && value > 0.0
    }

    fn is_non_negative(value: f64) -> bool {
        value.is_finite() && value >= 0.0
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Warmth curve overrides
        Self::apply_env_var(
            "LAYERWISE_WARM_ANCHOR_CELSIUS",
            &mut self.warmth_curve.warm_anchor_celsius,
        )?;
        Self::apply_env_var(
            "LAYERWISE_COLD_ANCHOR_CELSIUS",
            &mut self.warmth_curve.cold_anchor_celsius,
        )?;

        // Wind overrides
        Self::apply_env_var(
            "LAYERWISE_WIND_PER_10_KMH",
            &mut self.wind.warmth_per_10_kmh,
        )?;
        Self::apply_env_var(
            "LAYERWISE_WIND_MAX_ADJUSTMENT",
            &mut self.wind.max_adjustment,
        )?;
        Self::apply_env_var("LAYERWISE_WIND_LIMB_WEIGHT", &mut self.wind.limb_weight)?;

        // Activity heat overrides
        Self::apply_env_var(
            "LAYERWISE_RUN_HEAT_OFFSET",
            &mut self.activity_heat.run_offset,
        )?;
        Self::apply_env_var(
            "LAYERWISE_CYCLE_HEAT_OFFSET",
            &mut self.activity_heat.cycle_offset,
        )?;
        Self::apply_env_var(
            "LAYERWISE_HEAT_RAMP_MINUTES",
            &mut self.activity_heat.ramp_minutes,
        )?;

        // Learning overrides
        Self::apply_env_var("LAYERWISE_FEEDBACK_ALPHA", &mut self.feedback.alpha)?;
        Self::apply_env_var(
            "LAYERWISE_ONBOARDING_SEED_SCALE",
            &mut self.onboarding.seed_scale,
        )?;

        Ok(self)
    }
}
