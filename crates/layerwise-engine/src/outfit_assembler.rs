// ABOUTME: Outfit assembly across all body zones into one recommendation
// ABOUTME: Sole entry point for recommendations; zones are scored and selected independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! Outfit assembler
//!
//! For every zone: compute the target warmth, select gear against it, attach the
//! display rationale. There is no coupling between zones.

use crate::config::EngineConfig;
use crate::rationale::{weather_advisories, zone_reasons};
use crate::target_warmth::TargetWarmthCalculator;
use crate::zone_selector::select_for_zone;
use layerwise_core::errors::EngineResult;
use layerwise_core::models::{
    ActivityContext, BodyZone, GearCatalog, OutfitRecommendation, ThermalProfile,
    WeatherSnapshot, ZoneRecommendation,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Builds outfit recommendations against a configuration
#[derive(Debug, Clone, Copy)]
pub struct OutfitAssembler<'c> {
    calculator: TargetWarmthCalculator<'c>,
}

impl Default for OutfitAssembler<'static> {
    fn default() -> Self {
        Self::new(EngineConfig::global())
    }
}

impl<'c> OutfitAssembler<'c> {
    /// Create an assembler over the given configuration
    #[must_use]
    pub const fn new(config: &'c EngineConfig) -> Self {
        Self {
            calculator: TargetWarmthCalculator::new(config),
        }
    }

    /// Recommend gear for every zone
    ///
    /// Zones without eligible gear are returned as coverage gaps rather than
    /// failing the call.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileData` if the profile fails validation.
    pub fn recommend<'a>(
        &self,
        weather: &WeatherSnapshot,
        activity: &ActivityContext,
        profile: &ThermalProfile,
        catalog: &'a GearCatalog,
    ) -> EngineResult<OutfitRecommendation<'a>> {
        profile.validate()?;

        let zones: BTreeMap<BodyZone, ZoneRecommendation<'a>> = BodyZone::ALL
            .into_iter()
            .map(|zone| {
                let breakdown = self.calculator.breakdown(zone, weather, activity, profile);
                debug!(?breakdown, "target warmth");
                let target = breakdown.target;
                let selection = select_for_zone(zone, target, activity.activity(), catalog);
                let entry = if selection.coverage_gap {
                    ZoneRecommendation::gap(zone, target)
                } else {
                    ZoneRecommendation {
                        zone,
                        reasons: zone_reasons(zone, &selection.items, target, weather),
                        items: selection.items,
                        coverage_gap: false,
                        target_warmth: target,
                    }
                };
                (zone, entry)
            })
            .collect();

        let recommendation = OutfitRecommendation {
            activity: activity.activity(),
            zones,
            advisories: weather_advisories(weather),
        };

        info!(
            activity = %activity.activity(),
            catalog_size = catalog.len(),
            items = recommendation.item_ids().len(),
            gaps = recommendation.coverage_gaps().count(),
            "outfit recommended"
        );
        Ok(recommendation)
    }
}

/// Recommend gear for every zone using the global configuration
///
/// # Errors
///
/// Returns `InvalidProfileData` if the profile fails validation.
pub fn recommend<'a>(
    weather: &WeatherSnapshot,
    activity: &ActivityContext,
    profile: &ThermalProfile,
    catalog: &'a GearCatalog,
) -> EngineResult<OutfitRecommendation<'a>> {
    OutfitAssembler::default().recommend(weather, activity, profile, catalog)
}
