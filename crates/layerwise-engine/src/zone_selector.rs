// ABOUTME: Per-zone gear selection matching catalog warmth ratings to a target warmth
// ABOUTME: Single nearest item for most zones, best Base/Mid/Outer combination for the torso
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! Zone selector
//!
//! Eligibility is `category == zone` and `sports` containing the activity. Ties
//! are broken deterministically so the same catalog always yields the same
//! selection regardless of catalog order.
//!
//! The torso search enumerates one Base with an optional Mid and an optional
//! Outer. A Base layer is mandatory: with no eligible Base item the torso is a
//! coverage gap even if Mid or Outer items exist.

use layerwise_core::models::{Activity, BodyZone, GearCatalog, GearItem, LayerType};
use std::cmp::Ordering;
use std::iter;
use tracing::debug;

/// Outcome of selecting gear for one zone
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSelection<'a> {
    /// Chosen items; torso items ordered Base, Mid, Outer
    pub items: Vec<&'a GearItem>,
    /// No eligible item exists
    pub coverage_gap: bool,
}

impl<'a> ZoneSelection<'a> {
    const fn gap() -> Self {
        Self {
            items: Vec::new(),
            coverage_gap: true,
        }
    }

    fn of(items: Vec<&'a GearItem>) -> Self {
        Self {
            items,
            coverage_gap: false,
        }
    }
}

/// Choose gear for `zone` whose warmth best matches `target`
#[must_use]
pub fn select_for_zone(
    zone: BodyZone,
    target: f64,
    activity: Activity,
    catalog: &GearCatalog,
) -> ZoneSelection<'_> {
    let eligible: Vec<&GearItem> = catalog.eligible(zone, activity).collect();
    let selection = if zone == BodyZone::Torso {
        select_torso(&eligible, target)
    } else {
        select_single(&eligible, target)
    };

    debug!(
        zone = %zone,
        target,
        eligible = eligible.len(),
        coverage_gap = selection.coverage_gap,
        items = ?selection.items.iter().map(|item| item.id()).collect::<Vec<_>>(),
        "zone selection"
    );
    selection
}

fn select_single<'a>(eligible: &[&'a GearItem], target: f64) -> ZoneSelection<'a> {
    eligible
        .iter()
        .copied()
        .min_by(|a, b| {
            distance(u32::from(a.warmth_rating()), target)
                .total_cmp(&distance(u32::from(b.warmth_rating()), target))
                .then_with(|| a.id().cmp(b.id()))
        })
        .map_or_else(ZoneSelection::gap, |item| ZoneSelection::of(vec![item]))
}

/// A candidate torso outfit
#[derive(Debug, Clone)]
struct TorsoCombination<'a> {
    layers: Vec<&'a GearItem>,
    score: f64,
    id_key: String,
}

impl<'a> TorsoCombination<'a> {
    fn new(layers: Vec<&'a GearItem>, target: f64) -> Self {
        let total: u32 = layers
            .iter()
            .map(|item| u32::from(item.warmth_rating()))
            .sum();
        let id_key = layers.iter().map(|item| item.id()).collect();
        Self {
            layers,
            score: distance(total, target),
            id_key,
        }
    }

    /// Best score, then fewest layers, then ascending concatenated ids
    fn rank(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.layers.len().cmp(&other.layers.len()))
            .then_with(|| self.id_key.cmp(&other.id_key))
            .then_with(|| {
                self.layers
                    .iter()
                    .map(|item| item.id())
                    .cmp(other.layers.iter().map(|item| item.id()))
            })
    }
}

fn select_torso<'a>(eligible: &[&'a GearItem], target: f64) -> ZoneSelection<'a> {
    let of_layer = |layer: LayerType| -> Vec<&'a GearItem> {
        eligible
            .iter()
            .copied()
            .filter(|item| item.layer() == Some(layer))
            .collect()
    };
    let bases = of_layer(LayerType::Base);
    if bases.is_empty() {
        return ZoneSelection::gap();
    }
    let mids = optional_slot(of_layer(LayerType::Mid));
    let outers = optional_slot(of_layer(LayerType::Outer));

    let mut best: Option<TorsoCombination<'a>> = None;
    for &base in &bases {
        for &mid in &mids {
            for &outer in &outers {
                let layers: Vec<&GearItem> =
                    [Some(base), mid, outer].into_iter().flatten().collect();
                let candidate = TorsoCombination::new(layers, target);
                let better = match &best {
                    None => true,
                    Some(current) => candidate.rank(current) == Ordering::Less,
                };
                if better {
                    best = Some(candidate);
                }
            }
        }
    }

    best.map_or_else(ZoneSelection::gap, |combination| {
        ZoneSelection::of(combination.layers)
    })
}

/// The empty choice followed by every item
fn optional_slot(items: Vec<&GearItem>) -> Vec<Option<&GearItem>> {
    iter::once(None)
        .chain(items.into_iter().map(Some))
        .collect()
}

fn distance(total_warmth: u32, target: f64) -> f64 {
    (f64::from(total_warmth) - target).abs()
}
