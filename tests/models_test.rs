// ABOUTME: Integration tests for the data model and its validating conversions
// ABOUTME: Covers gear records, catalogs, activities, weather, profiles, zones, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{approx_eq, prototype_closet, PROTOTYPE_CLOSET_JSON};
use layerwise::constants::units::{fahrenheit_to_celsius, mph_to_kmh};
use layerwise::errors::{EngineError, ErrorCode};
use layerwise::models::{
    Activity, ActivityContext, BodyZone, GearCatalog, GearItem, GearSlot, LayerType,
    SensitivityBand, ThermalProfile, WeatherSnapshot,
};
use std::collections::BTreeSet;

fn single(json: &str) -> Result<GearCatalog, EngineError> {
    GearCatalog::from_json(&format!("[{json}]"))
}

// ============================================================================
// Gear
// ============================================================================

#[test]
fn test_prototype_closet_loads() {
    let closet = prototype_closet();
    assert_eq!(closet.len(), 18);

    let fleece = closet.get("t4").unwrap();
    assert_eq!(fleece.name(), "Fleece Midlayer");
    assert_eq!(fleece.slot(), GearSlot::Torso(LayerType::Mid));
    assert_eq!(fleece.zone(), BodyZone::Torso);
    assert_eq!(fleece.warmth_rating(), 7);
    assert_eq!(fleece.brand(), Some("Arc'teryx"));
    assert_eq!(fleece.color(), Some("Black"));

    let shorts = closet.get("l3").unwrap();
    assert!(shorts.supports(Activity::Run));
    assert!(!shorts.supports(Activity::Cycle));
    assert_eq!(shorts.layer(), None);
}

#[test]
fn test_catalog_preserves_order_and_filters() {
    let closet = prototype_closet();
    let order: Vec<&str> = closet.iter().take(3).map(GearItem::id).collect();
    assert_eq!(order, ["h1", "h2", "h3"]);

    let cycling_legs: Vec<&str> = closet
        .eligible(BodyZone::Legs, Activity::Cycle)
        .map(GearItem::id)
        .collect();
    assert_eq!(cycling_legs, ["l1", "l2"]);
}

#[test]
fn test_missing_sports_means_every_activity() {
    let catalog =
        single(r#"{"id": "x", "name": "Socks", "category": "Feet", "warmthRating": 3}"#).unwrap();
    let socks = catalog.get("x").unwrap();
    assert!(Activity::ALL.into_iter().all(|activity| socks.supports(activity)));
}

#[test]
fn test_torso_record_requires_layer_type() {
    let result =
        single(r#"{"id": "t9", "name": "Mystery Top", "category": "Torso", "warmthRating": 4}"#);
    assert!(matches!(result, Err(EngineError::InvalidGearData { .. })));
}

#[test]
fn test_layer_type_ignored_off_torso() {
    let catalog = single(
        r#"{"id": "h9", "name": "Beanie", "category": "Head", "layerType": "Outer", "warmthRating": 7}"#,
    )
    .unwrap();
    let beanie = catalog.get("h9").unwrap();
    assert_eq!(beanie.slot(), GearSlot::Head);
    assert_eq!(beanie.layer(), None);
}

#[test]
fn test_warmth_rating_outside_scale_is_rejected() {
    for rating in ["0", "11", "-3", "300"] {
        let result = single(&format!(
            r#"{{"id": "f9", "name": "Socks", "category": "Feet", "warmthRating": {rating}}}"#
        ));
        assert!(
            matches!(result, Err(EngineError::InvalidGearData { .. })),
            "rating {rating}"
        );
    }

    let direct = GearItem::new("f9", "Socks", GearSlot::Feet, 0, BTreeSet::new());
    assert_eq!(
        direct,
        Err(EngineError::InvalidGearData {
            item_id: "f9".into(),
            reason: "warmth rating 0 is outside 1-10".into(),
        })
    );
}

#[test]
fn test_unknown_category_is_rejected() {
    let result =
        single(r#"{"id": "z1", "name": "Knee Pads", "category": "Knees", "warmthRating": 2}"#);
    assert!(matches!(result, Err(EngineError::InvalidGearData { .. })));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let item = GearItem::new(
        "dup",
        "Gloves",
        GearSlot::Hands,
        4,
        Activity::ALL.into_iter().collect(),
    )
    .unwrap();
    let result = GearCatalog::new(vec![item.clone(), item]);
    assert!(matches!(
        result,
        Err(EngineError::InvalidGearData { ref item_id, .. }) if item_id == "dup"
    ));
}

#[test]
fn test_blank_id_is_rejected() {
    let result = GearItem::new("  ", "Gloves", GearSlot::Hands, 4, BTreeSet::new());
    assert!(matches!(result, Err(EngineError::InvalidGearData { .. })));
}

#[test]
fn test_catalog_json_round_trip() {
    let closet = prototype_closet();
    let json = serde_json::to_string(&closet).unwrap();
    let reparsed = GearCatalog::from_json(&json).unwrap();
    assert_eq!(reparsed, closet);

    let original: serde_json::Value = serde_json::from_str(PROTOTYPE_CLOSET_JSON).unwrap();
    let written: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(written[3]["layerType"], original[3]["layerType"]);
    assert!(written[0].get("layerType").is_none());
}

#[test]
fn test_with_details_sets_display_fields() {
    let item = GearItem::new("g1", "Gloves", GearSlot::Hands, 4, BTreeSet::new())
        .unwrap()
        .with_details(Some("Nike".into()), None);
    assert_eq!(item.brand(), Some("Nike"));
    assert_eq!(item.color(), None);
    assert!(!item.supports(Activity::Run));
}

// ============================================================================
// Activity and weather
// ============================================================================

#[test]
fn test_activity_parsing() {
    assert_eq!("run".parse::<Activity>().unwrap(), Activity::Run);
    assert_eq!(" Cycling ".parse::<Activity>().unwrap(), Activity::Cycle);
    assert_eq!(
        "swim".parse::<Activity>(),
        Err(EngineError::InvalidActivity {
            value: "swim".into()
        })
    );
    assert!(matches!(
        ActivityContext::parse("hike", 30.0),
        Err(EngineError::InvalidActivity { .. })
    ));
}

#[test]
fn test_duration_must_be_positive() {
    for minutes in [0.0, -15.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                ActivityContext::new(Activity::Run, minutes),
                Err(EngineError::InvalidDuration { .. })
            ),
            "{minutes}"
        );
    }
    let context = ActivityContext::parse("cycle", 120.0).unwrap();
    assert_eq!(context.activity(), Activity::Cycle);
    assert_eq!(context.duration_minutes(), 120.0);
}

#[test]
fn test_activity_context_wire_form_is_validated() {
    let context: ActivityContext =
        serde_json::from_str(r#"{"activity": "Run", "durationMinutes": 45}"#).unwrap();
    assert_eq!(context.activity(), Activity::Run);

    let invalid = serde_json::from_str::<ActivityContext>(
        r#"{"activity": "run", "durationMinutes": 0}"#,
    );
    assert!(invalid.is_err());
}

#[test]
fn test_weather_validation() {
    assert!(matches!(
        WeatherSnapshot::new(f64::NAN, 5.0),
        Err(EngineError::InvalidWeatherData { .. })
    ));
    assert!(matches!(
        WeatherSnapshot::new(5.0, -1.0),
        Err(EngineError::InvalidWeatherData { .. })
    ));
    assert!(matches!(
        WeatherSnapshot::new(5.0, 1.0).unwrap().with_humidity(101.0),
        Err(EngineError::InvalidWeatherData { .. })
    ));
    assert!(matches!(
        WeatherSnapshot::new(5.0, 1.0).unwrap().with_precipitation(-1.0),
        Err(EngineError::InvalidWeatherData { .. })
    ));

    let snapshot: WeatherSnapshot =
        serde_json::from_str(r#"{"feelsLikeC": -4.5, "windKmh": 22}"#).unwrap();
    assert_eq!(snapshot.feels_like_c(), -4.5);
    assert_eq!(snapshot.wind_kmh(), 22.0);
    assert_eq!(snapshot.humidity_pct(), 0.0);
    assert_eq!(snapshot.precip_pct(), 0.0);
}

#[test]
fn test_imperial_conversions() {
    assert!(approx_eq(fahrenheit_to_celsius(32.0), 0.0));
    assert!(approx_eq(fahrenheit_to_celsius(212.0), 100.0));
    assert!(approx_eq(fahrenheit_to_celsius(-40.0), -40.0));
    assert!(approx_eq(mph_to_kmh(10.0), 16.093_44));
}

// ============================================================================
// Zones and profiles
// ============================================================================

#[test]
fn test_zone_labels() {
    assert_eq!("LEGS".parse::<BodyZone>().unwrap(), BodyZone::Legs);
    assert_eq!(
        BodyZone::resolve_label(" Head & Hands ").unwrap(),
        [BodyZone::Head, BodyZone::Hands]
    );
    assert_eq!(BodyZone::resolve_label("feet").unwrap(), [BodyZone::Feet]);
    assert_eq!(
        BodyZone::resolve_label("Neck"),
        Err(EngineError::UnknownZone {
            zone: "Neck".into()
        })
    );
    assert!(matches!(
        "elbow".parse::<BodyZone>(),
        Err(EngineError::UnknownZone { .. })
    ));
}

#[test]
fn test_onboarding_seeds_every_zone() {
    let cold = ThermalProfile::onboard(0.0).unwrap();
    let neutral = ThermalProfile::onboard(50.0).unwrap();
    let hot = ThermalProfile::onboard(100.0).unwrap();

    for zone in BodyZone::ALL {
        assert_eq!(cold.sensitivity_delta(zone), 1.5);
        assert_eq!(neutral.sensitivity_delta(zone), 0.0);
        assert_eq!(hot.sensitivity_delta(zone), -1.5);
    }
    assert_eq!(cold.zone_deltas().count(), 5);
    assert_eq!(neutral, ThermalProfile::default());
}

#[test]
fn test_onboarding_rejects_out_of_range_slider() {
    for base in [-1.0, 100.5, f64::NAN] {
        assert!(
            matches!(
                ThermalProfile::onboard(base),
                Err(EngineError::InvalidProfileData { .. })
            ),
            "{base}"
        );
    }
}

#[test]
fn test_sensitivity_bands() {
    assert_eq!(SensitivityBand::from_base(10.0), SensitivityBand::RunsCold);
    assert_eq!(SensitivityBand::from_base(40.0), SensitivityBand::Neutral);
    assert_eq!(SensitivityBand::from_base(60.0), SensitivityBand::Neutral);
    assert_eq!(SensitivityBand::from_base(85.0), SensitivityBand::RunsHot);
    assert_eq!(
        ThermalProfile::onboard(20.0).unwrap().band().guidance(),
        "We'll suggest slightly warmer layers."
    );
}

#[test]
fn test_missing_zone_reads_as_zero() {
    let profile: ThermalProfile =
        serde_json::from_str(r#"{"baseSensitivity": 42, "zoneDeltas": {"Torso": 0.8}}"#).unwrap();
    profile.validate().unwrap();
    assert_eq!(profile.sensitivity_delta(BodyZone::Torso), 0.8);
    assert_eq!(profile.sensitivity_delta(BodyZone::Feet), 0.0);

    let bare: ThermalProfile = serde_json::from_str(r#"{"baseSensitivity": 50}"#).unwrap();
    assert_eq!(bare.zone_deltas().count(), 0);
    assert_eq!(bare.sensitivity_delta(BodyZone::Hands), 0.0);
}

#[test]
fn test_with_delta_enforces_bound() {
    let profile = ThermalProfile::default();
    assert!(profile.with_delta(BodyZone::Legs, 3.0).is_ok());
    assert!(profile.with_delta(BodyZone::Legs, -3.0).is_ok());
    assert!(matches!(
        profile.with_delta(BodyZone::Legs, 3.01),
        Err(EngineError::InvalidProfileData { .. })
    ));
    assert!(matches!(
        profile.with_delta(BodyZone::Legs, f64::NAN),
        Err(EngineError::InvalidProfileData { .. })
    ));
}

// ============================================================================
// Error codes
// ============================================================================

#[test]
fn test_error_codes_are_stable() {
    let cases = [
        (
            EngineError::InvalidActivity {
                value: "swim".into(),
            },
            ErrorCode::InvalidActivity,
            3000,
        ),
        (
            EngineError::InvalidDuration { minutes: 0.0 },
            ErrorCode::InvalidDuration,
            3001,
        ),
        (EngineError::gear("x", "bad"), ErrorCode::InvalidGearData, 3100),
        (EngineError::profile("bad"), ErrorCode::InvalidProfileData, 3101),
        (EngineError::weather("bad"), ErrorCode::InvalidWeatherData, 3102),
        (
            EngineError::UnknownZone {
                zone: "Neck".into(),
            },
            ErrorCode::UnknownZone,
            3200,
        ),
        (
            EngineError::InvalidFeedbackWeight { alpha: 0.0 },
            ErrorCode::InvalidFeedbackWeight,
            3201,
        ),
    ];

    for (error, code, number) in cases {
        assert_eq!(error.code(), code);
        assert_eq!(code.as_u16(), number);
        assert!(!error.to_string().is_empty());
    }
}

#[test]
fn test_error_messages_name_the_input() {
    let error = EngineError::UnknownZone {
        zone: "Elbows".into(),
    };
    assert_eq!(error.to_string(), "Unknown zone 'Elbows'");

    let gear = EngineError::gear("t9", "torso item has no layer type");
    assert_eq!(
        gear.to_string(),
        "Invalid gear data for item 't9': torso item has no layer type"
    );
}
