// ABOUTME: Outfit recommendation output: per-zone gear selections and coverage gaps
// ABOUTME: Borrows items from the catalog and carries display-only rationale and advisories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use super::{Activity, BodyZone, GearItem};
use serde::Serialize;
use std::collections::BTreeMap;

/// Why an item was chosen for a zone (display only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionReason {
    /// The apparent temperature set the baseline
    FeelsLike {
        /// Feels-like temperature in Celsius
        celsius: f64,
    },
    /// Wind raised the need on an exposed zone
    WindExposure {
        /// Wind speed in km/h
        wind_kmh: f64,
    },
    /// Head or hands need protection at this target
    ExtremityProtection,
    /// Torso base layer sits next to skin and is always worn
    NextToSkin,
}

/// Condition worth flagging that does not affect scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherAdvisory {
    /// Precipitation chance is high
    RainLikely,
    /// Relative humidity is high
    HighHumidity,
    /// Wind is strong
    StrongWind,
}

/// Selection for a single zone
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecommendation<'a> {
    /// Zone this entry dresses
    pub zone: BodyZone,
    /// Chosen items; torso items are ordered Base, Mid, Outer
    pub items: Vec<&'a GearItem>,
    /// No eligible item exists for this zone
    pub coverage_gap: bool,
    /// Warmth the selection was matched against
    pub target_warmth: f64,
    /// Display-only explanation
    pub reasons: Vec<SelectionReason>,
}

impl<'a> ZoneRecommendation<'a> {
    /// Entry for a zone with no eligible gear
    #[must_use]
    pub const fn gap(zone: BodyZone, target_warmth: f64) -> Self {
        Self {
            zone,
            items: Vec::new(),
            coverage_gap: true,
            target_warmth,
            reasons: Vec::new(),
        }
    }

    /// Sum of the selected items' warmth ratings
    #[must_use]
    pub fn total_warmth(&self) -> u32 {
        self.items
            .iter()
            .map(|item| u32::from(item.warmth_rating()))
            .sum()
    }
}

/// Complete outfit for one activity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation<'a> {
    /// Activity the outfit was built for
    pub activity: Activity,
    /// One entry per zone
    pub zones: BTreeMap<BodyZone, ZoneRecommendation<'a>>,
    /// Display-only weather flags
    pub advisories: Vec<WeatherAdvisory>,
}

impl<'a> OutfitRecommendation<'a> {
    /// Entry for a zone
    #[must_use]
    pub fn zone(&self, zone: BodyZone) -> Option<&ZoneRecommendation<'a>> {
        self.zones.get(&zone)
    }

    /// Items chosen for a zone; empty for gaps
    #[must_use]
    pub fn items(&self, zone: BodyZone) -> &[&'a GearItem] {
        match self.zones.get(&zone) {
            Some(entry) => &entry.items,
            None => &[],
        }
    }

    /// Whether a zone has no eligible gear
    #[must_use]
    pub fn is_gap(&self, zone: BodyZone) -> bool {
        self.zones.get(&zone).is_some_and(|entry| entry.coverage_gap)
    }

    /// Zones with no eligible gear, in zone order
    pub fn coverage_gaps(&self) -> impl Iterator<Item = BodyZone> + '_ {
        self.zones
            .values()
            .filter(|entry| entry.coverage_gap)
            .map(|entry| entry.zone)
    }

    /// Every selected item id, in zone then layer order
    #[must_use]
    pub fn item_ids(&self) -> Vec<&'a str> {
        self.zones
            .values()
            .flat_map(|entry| entry.items.iter().map(|item| item.id()))
            .collect()
    }
}
