// ABOUTME: Gear item model with a closed category/layer sum type
// ABOUTME: Converts loosely-typed closet records into validated fixed-shape items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use super::{Activity, BodyZone};
use crate::constants::thermal::warmth_scale::{MAX_GEAR_RATING, MIN_GEAR_RATING};
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Torso sub-classification; ordering is next-to-skin first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LayerType {
    /// Next-to-skin layer
    Base,
    /// Insulating layer
    Mid,
    /// Shell layer
    Outer,
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Base => "Base",
            Self::Mid => "Mid",
            Self::Outer => "Outer",
        })
    }
}

/// Where an item is worn; only torso items carry a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearSlot {
    /// Head
    Head,
    /// Torso, in the given layer
    Torso(LayerType),
    /// Legs
    Legs,
    /// Feet
    Feet,
    /// Hands
    Hands,
}

impl GearSlot {
    /// Zone this slot belongs to
    #[must_use]
    pub const fn zone(self) -> BodyZone {
        match self {
            Self::Head => BodyZone::Head,
            Self::Torso(_) => BodyZone::Torso,
            Self::Legs => BodyZone::Legs,
            Self::Feet => BodyZone::Feet,
            Self::Hands => BodyZone::Hands,
        }
    }

    /// Layer, for torso slots
    #[must_use]
    pub const fn layer(self) -> Option<LayerType> {
        match self {
            Self::Torso(layer) => Some(layer),
            _ => None,
        }
    }

    fn from_parts(zone: BodyZone, layer: Option<LayerType>) -> Option<Self> {
        match (zone, layer) {
            (BodyZone::Torso, Some(layer)) => Some(Self::Torso(layer)),
            (BodyZone::Torso, None) => None,
            (BodyZone::Head, _) => Some(Self::Head),
            (BodyZone::Legs, _) => Some(Self::Legs),
            (BodyZone::Feet, _) => Some(Self::Feet),
            (BodyZone::Hands, _) => Some(Self::Hands),
        }
    }
}

/// A piece of clothing from the user's closet
///
/// Construction validates the warmth rating, so every `GearItem` in the engine
/// satisfies `1 <= warmth_rating <= 10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GearRecord", into = "GearRecord")]
pub struct GearItem {
    id: String,
    name: String,
    slot: GearSlot,
    warmth_rating: u8,
    sports: BTreeSet<Activity>,
    brand: Option<String>,
    color: Option<String>,
}

/// Closet record as stored by the gear catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearRecord {
    /// Stable item id
    pub id: String,
    /// Display name
    pub name: String,
    /// Body zone
    pub category: BodyZone,
    /// Torso layer; ignored for other categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_type: Option<LayerType>,
    /// Warmth rating, expected within 1-10
    pub warmth_rating: i64,
    /// Activities the item suits; absent means every activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sports: Option<Vec<Activity>>,
    /// Brand, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Colour, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TryFrom<GearRecord> for GearItem {
    type Error = EngineError;

    fn try_from(record: GearRecord) -> Result<Self, Self::Error> {
        if record.category != BodyZone::Torso && record.layer_type.is_some() {
            debug!(
                item_id = %record.id,
                category = %record.category,
                "ignoring layer type on non-torso item"
            );
        }
        let slot = GearSlot::from_parts(record.category, record.layer_type)
            .ok_or_else(|| EngineError::gear(&record.id, "torso item has no layer type"))?;
        let rating = u8::try_from(record.warmth_rating).map_err(|_| {
            EngineError::gear(
                &record.id,
                format!("warmth rating {} is outside 1-10", record.warmth_rating),
            )
        })?;
        let sports = record
            .sports
            .map_or_else(|| Activity::ALL.into_iter().collect(), |list| list.into_iter().collect());

        let mut item = Self::new(record.id, record.name, slot, rating, sports)?;
        item.brand = record.brand;
        item.color = record.color;
        Ok(item)
    }
}

impl From<GearItem> for GearRecord {
    fn from(item: GearItem) -> Self {
        Self {
            category: item.slot.zone(),
            layer_type: item.slot.layer(),
            warmth_rating: i64::from(item.warmth_rating),
            sports: Some(item.sports.into_iter().collect()),
            id: item.id,
            name: item.name,
            brand: item.brand,
            color: item.color,
        }
    }
}

impl GearItem {
    /// Create a validated gear item
    ///
    /// # Errors
    ///
    /// Returns `InvalidGearData` if the id is blank or the warmth rating is outside 1-10.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slot: GearSlot,
        warmth_rating: u8,
        sports: BTreeSet<Activity>,
    ) -> EngineResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EngineError::gear(id, "item id is blank"));
        }
        if !(MIN_GEAR_RATING..=MAX_GEAR_RATING).contains(&warmth_rating) {
            return Err(EngineError::gear(
                id,
                format!("warmth rating {warmth_rating} is outside 1-10"),
            ));
        }
        Ok(Self {
            id,
            name: name.into(),
            slot,
            warmth_rating,
            sports,
            brand: None,
            color: None,
        })
    }

    /// Attach display-only brand and colour
    #[must_use]
    pub fn with_details(mut self, brand: Option<String>, color: Option<String>) -> Self {
        self.brand = brand;
        self.color = color;
        self
    }

    /// Stable id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category and layer
    #[must_use]
    pub const fn slot(&self) -> GearSlot {
        self.slot
    }

    /// Zone the item is worn on
    #[must_use]
    pub const fn zone(&self) -> BodyZone {
        self.slot.zone()
    }

    /// Torso layer, if any
    #[must_use]
    pub const fn layer(&self) -> Option<LayerType> {
        self.slot.layer()
    }

    /// Warmth rating in 1-10
    #[must_use]
    pub const fn warmth_rating(&self) -> u8 {
        self.warmth_rating
    }

    /// Activities the item suits
    #[must_use]
    pub const fn sports(&self) -> &BTreeSet<Activity> {
        &self.sports
    }

    /// Whether the item may be worn for the activity
    #[must_use]
    pub fn supports(&self, activity: Activity) -> bool {
        self.sports.contains(&activity)
    }

    /// Brand
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Colour
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}
