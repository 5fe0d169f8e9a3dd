// ABOUTME: Read-only ordered gear catalog supplied by the closet owner
// ABOUTME: Enforces unique ids and answers per-zone, per-activity eligibility queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use super::{Activity, BodyZone, GearItem};
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::slice;

/// Ordered collection of gear items with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GearItem>", into = "Vec<GearItem>")]
pub struct GearCatalog {
    items: Vec<GearItem>,
}

impl GearCatalog {
    /// Build a catalog, rejecting duplicate ids
    ///
    /// # Errors
    ///
    /// Returns `InvalidGearData` naming the first repeated id.
    pub fn new(items: Vec<GearItem>) -> EngineResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(EngineError::gear(item.id(), "duplicate item id in catalog"));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog from the closet's JSON array form
    ///
    /// # Errors
    ///
    /// Returns `InvalidGearData` if the JSON is malformed or any record fails validation.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::gear("<catalog>", e.to_string()))
    }

    /// Items in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &GearItem> {
        self.items.iter()
    }

    /// Items worn on `zone` that suit `activity`, in catalog order
    pub fn eligible(&self, zone: BodyZone, activity: Activity) -> impl Iterator<Item = &GearItem> {
        self.items
            .iter()
            .filter(move |item| item.zone() == zone && item.supports(activity))
    }

    /// Look up an item by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GearItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<GearItem>> for GearCatalog {
    type Error = EngineError;

    fn try_from(items: Vec<GearItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<GearCatalog> for Vec<GearItem> {
    fn from(catalog: GearCatalog) -> Self {
        catalog.items
    }
}

impl<'a> IntoIterator for &'a GearCatalog {
    type Item = &'a GearItem;
    type IntoIter = slice::Iter<'a, GearItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
