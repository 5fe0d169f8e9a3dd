// ABOUTME: Tests for engine configuration defaults, environment overrides, and validation
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{run, weather};
use layerwise::config::ConfigError;
use layerwise::models::{Activity, BodyZone, ThermalProfile};
use layerwise::{onboard_profile, EngineConfig, TargetWarmthCalculator};
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: [&str; 10] = [
    "LAYERWISE_WARM_ANCHOR_CELSIUS",
    "LAYERWISE_COLD_ANCHOR_CELSIUS",
    "LAYERWISE_WIND_PER_10_KMH",
    "LAYERWISE_WIND_MAX_ADJUSTMENT",
    "LAYERWISE_WIND_LIMB_WEIGHT",
    "LAYERWISE_RUN_HEAT_OFFSET",
    "LAYERWISE_CYCLE_HEAT_OFFSET",
    "LAYERWISE_HEAT_RAMP_MINUTES",
    "LAYERWISE_FEEDBACK_ALPHA",
    "LAYERWISE_ONBOARDING_SEED_SCALE",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = EngineConfig::default();
    config.validate().unwrap();

    assert_eq!(config.warmth_curve.freezing_anchor_warmth, 6.0);
    assert_eq!(config.zone_exposure.multiplier(BodyZone::Torso), 1.0);
    assert_eq!(config.zone_exposure.multiplier(BodyZone::Head), 0.6);
    assert_eq!(config.wind.zone_weight(BodyZone::Legs), 0.5);
    assert_eq!(config.wind.zone_weight(BodyZone::Hands), 1.0);
    assert_eq!(config.activity_heat.offset(Activity::Run), 1.5);
    assert_eq!(config.activity_heat.offset(Activity::Cycle), 0.5);
    assert_eq!(config.feedback.alpha, 0.2);
    assert_eq!(config.onboarding.seed_scale, 1.5);
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    assert_eq!(EngineConfig::load().unwrap(), EngineConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var("LAYERWISE_FEEDBACK_ALPHA", "0.35");
    env::set_var("LAYERWISE_CYCLE_HEAT_OFFSET", "0.8");
    env::set_var("LAYERWISE_WIND_LIMB_WEIGHT", "0.25");

    let config = EngineConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert_eq!(config.feedback.alpha, 0.35);
    assert_eq!(config.activity_heat.cycle_offset, 0.8);
    assert_eq!(config.wind.limb_weight, 0.25);
    assert_eq!(config.activity_heat.run_offset, 1.5);
}

#[test]
#[serial]
fn test_unparseable_override_is_an_error() {
    clear_overrides();
    env::set_var("LAYERWISE_HEAT_RAMP_MINUTES", "twenty");

    let result = EngineConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_an_env_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_overrides();
    env::set_var("LAYERWISE_RUN_HEAT_OFFSET", OsStr::from_bytes(&[0x31, 0xff]));

    let result = EngineConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::EnvVar(_))));
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_overrides();
    env::set_var("LAYERWISE_FEEDBACK_ALPHA", "1.5");
    let alpha = EngineConfig::load();

    env::set_var("LAYERWISE_FEEDBACK_ALPHA", "0.2");
    env::set_var("LAYERWISE_COLD_ANCHOR_CELSIUS", "5");
    let curve = EngineConfig::load();
    clear_overrides();

    assert!(matches!(alpha, Err(ConfigError::ValueOutOfRange(_))));
    assert!(matches!(curve, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validation_rejects_inconsistent_settings() {
    let mut rising_curve = EngineConfig::default();
    rising_curve.warmth_curve.cold_anchor_warmth = 4.0;
    assert!(matches!(
        rising_curve.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let mut zero_exposure = EngineConfig::default();
    zero_exposure.zone_exposure.feet = 0.0;
    assert!(zero_exposure.validate().is_err());

    let mut negative_wind = EngineConfig::default();
    negative_wind.wind.warmth_per_10_kmh = -0.1;
    assert!(negative_wind.validate().is_err());

    let mut no_ramp = EngineConfig::default();
    no_ramp.activity_heat.ramp_minutes = 0.0;
    assert!(no_ramp.validate().is_err());

    let mut big_seed = EngineConfig::default();
    big_seed.onboarding.seed_scale = 3.5;
    assert!(big_seed.validate().is_err());
}

#[test]
fn test_custom_config_changes_targets() {
    let defaults = EngineConfig::default();
    let mut no_heat = EngineConfig::default();
    no_heat.activity_heat.run_offset = 0.0;

    let profile = ThermalProfile::default();
    let conditions = weather(4.0, 18.0);
    let with_heat = TargetWarmthCalculator::new(&defaults)
        .target_warmth(BodyZone::Torso, &conditions, &run(90.0), &profile)
        .unwrap();
    let without_heat = TargetWarmthCalculator::new(&no_heat)
        .target_warmth(BodyZone::Torso, &conditions, &run(90.0), &profile)
        .unwrap();

    assert!((without_heat - with_heat - 1.5).abs() < 1e-9);
}

#[test]
fn test_onboarding_uses_configured_seed_scale() {
    let mut config = EngineConfig::default();
    config.onboarding.seed_scale = 3.0;

    let profile = onboard_profile(0.0, &config.onboarding).unwrap();
    assert_eq!(profile.sensitivity_delta(BodyZone::Feet), 3.0);

    let neutral = onboard_profile(50.0, &config.onboarding).unwrap();
    assert_eq!(neutral, ThermalProfile::default());
}
