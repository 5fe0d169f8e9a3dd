// ABOUTME: Display-only explanations for zone selections and weather advisories
// ABOUTME: Derived from the same inputs as scoring but never fed back into it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use layerwise_core::constants::thermal::advisory::{
    EXTREMITY_PROTECTION_TARGET, HIGH_HUMIDITY_PCT, RAIN_LIKELY_PCT, STRONG_WIND_KMH,
    WIND_RATIONALE_KMH,
};
use layerwise_core::models::{
    BodyZone, GearItem, LayerType, SelectionReason, WeatherAdvisory, WeatherSnapshot,
};

/// Reasons to show next to a zone's selection
#[must_use]
pub fn zone_reasons(
    zone: BodyZone,
    items: &[&GearItem],
    target_warmth: f64,
    weather: &WeatherSnapshot,
) -> Vec<SelectionReason> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut reasons = vec![SelectionReason::FeelsLike {
        celsius: weather.feels_like_c(),
    }];

    let fully_exposed = matches!(zone, BodyZone::Head | BodyZone::Torso | BodyZone::Hands);
    if fully_exposed && weather.wind_kmh() > WIND_RATIONALE_KMH {
        reasons.push(SelectionReason::WindExposure {
            wind_kmh: weather.wind_kmh(),
        });
    }

    if matches!(zone, BodyZone::Head | BodyZone::Hands)
        && target_warmth >= EXTREMITY_PROTECTION_TARGET
    {
        reasons.push(SelectionReason::ExtremityProtection);
    }

    if items.iter().any(|item| item.layer() == Some(LayerType::Base)) {
        reasons.push(SelectionReason::NextToSkin);
    }

    reasons
}

/// Flags for conditions the outfit cannot express through warmth alone
#[must_use]
pub fn weather_advisories(weather: &WeatherSnapshot) -> Vec<WeatherAdvisory> {
    let mut advisories = Vec::new();
    if weather.precip_pct() >= RAIN_LIKELY_PCT {
        advisories.push(WeatherAdvisory::RainLikely);
    }
    if weather.humidity_pct() >= HIGH_HUMIDITY_PCT {
        advisories.push(WeatherAdvisory::HighHumidity);
    }
    if weather.wind_kmh() >= STRONG_WIND_KMH {
        advisories.push(WeatherAdvisory::StrongWind);
    }
    advisories
}
