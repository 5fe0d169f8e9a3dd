// ABOUTME: Thermal profile holding per-zone sensitivity deltas learned from feedback
// ABOUTME: Seeded from the onboarding sensitivity slider and validated before every use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use super::BodyZone;
use crate::constants::thermal::feedback::DELTA_BOUND;
use crate::constants::thermal::onboarding::{
    MAX_SENSITIVITY, MIN_SENSITIVITY, NEUTRAL_SENSITIVITY, RUNS_COLD_BELOW, RUNS_HOT_ABOVE,
    SEED_SCALE,
};
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the user described themselves at onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityBand {
    /// Feels the cold more than most
    RunsCold,
    /// Average
    Neutral,
    /// Overheats easily
    RunsHot,
}

impl SensitivityBand {
    /// Classify a slider value (0 = runs cold, 100 = runs hot)
    #[must_use]
    pub fn from_base(base_sensitivity: f64) -> Self {
        if base_sensitivity < RUNS_COLD_BELOW {
            Self::RunsCold
        } else if base_sensitivity > RUNS_HOT_ABOVE {
            Self::RunsHot
        } else {
            Self::Neutral
        }
    }

    /// Guidance shown next to the slider
    #[must_use]
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::RunsCold => "We'll suggest slightly warmer layers.",
            Self::Neutral => "We'll suggest standard layering.",
            Self::RunsHot => "We'll suggest lighter, breathable gear.",
        }
    }
}

/// Per-zone sensitivity adjustments, owned by the caller's profile store
///
/// The engine never mutates a profile in place: updates return a new value.
/// Profiles arrive from storage, so [`ThermalProfile::validate`] is run before
/// any value is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalProfile {
    base_sensitivity: f64,
    #[serde(default)]
    zone_deltas: BTreeMap<BodyZone, f64>,
}

impl Default for ThermalProfile {
    fn default() -> Self {
        Self {
            base_sensitivity: NEUTRAL_SENSITIVITY,
            zone_deltas: BodyZone::ALL.into_iter().map(|zone| (zone, 0.0)).collect(),
        }
    }
}

impl ThermalProfile {
    /// Create a profile from the onboarding slider using the default seed scale
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileData` if the slider value is outside 0-100.
    pub fn onboard(base_sensitivity: f64) -> EngineResult<Self> {
        Self::seeded(base_sensitivity, SEED_SCALE)
    }

    /// Create a profile whose every zone starts at the slider-derived delta
    ///
    /// `seed = (50 - base) / 50 * seed_scale`: users who run cold start with a
    /// positive delta (warmer suggestions), users who run hot with a negative one.
    /// The slider reads 0 = runs cold, and a positive delta means "dress warmer"
    /// just as a `TooCold` rating raises it, so the seed is measured from 50 down.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileData` if the slider value is outside 0-100 or the
    /// resulting seed falls outside the delta bounds.
    pub fn seeded(base_sensitivity: f64, seed_scale: f64) -> EngineResult<Self> {
        Self::check_base(base_sensitivity)?;
        let seed = (NEUTRAL_SENSITIVITY - base_sensitivity) / NEUTRAL_SENSITIVITY * seed_scale;
        Self::check_delta(BodyZone::Torso, seed)?;
        Ok(Self {
            base_sensitivity,
            zone_deltas: BodyZone::ALL.into_iter().map(|zone| (zone, seed)).collect(),
        })
    }

    /// Check every stored value against the data model
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileData` for a slider value outside 0-100 or a delta
    /// that is non-finite or outside `[-3, 3]`.
    pub fn validate(&self) -> EngineResult<()> {
        Self::check_base(self.base_sensitivity)?;
        for (&zone, &delta) in &self.zone_deltas {
            Self::check_delta(zone, delta)?;
        }
        Ok(())
    }

    fn check_base(base_sensitivity: f64) -> EngineResult<()> {
        if (MIN_SENSITIVITY..=MAX_SENSITIVITY).contains(&base_sensitivity) {
            Ok(())
        } else {
            Err(EngineError::profile(format!(
                "base sensitivity {base_sensitivity} is outside 0-100"
            )))
        }
    }

    fn check_delta(zone: BodyZone, delta: f64) -> EngineResult<()> {
        if (-DELTA_BOUND..=DELTA_BOUND).contains(&delta) {
            Ok(())
        } else {
            Err(EngineError::profile(format!(
                "{zone} sensitivity delta {delta} is outside [-{DELTA_BOUND}, {DELTA_BOUND}]"
            )))
        }
    }

    /// Onboarding slider value (0 = runs cold, 100 = runs hot)
    #[must_use]
    pub const fn base_sensitivity(&self) -> f64 {
        self.base_sensitivity
    }

    /// Onboarding classification
    #[must_use]
    pub fn band(&self) -> SensitivityBand {
        SensitivityBand::from_base(self.base_sensitivity)
    }

    /// Learned adjustment for a zone; zones never written read as zero
    #[must_use]
    pub fn sensitivity_delta(&self, zone: BodyZone) -> f64 {
        self.zone_deltas.get(&zone).copied().unwrap_or(0.0)
    }

    /// All stored deltas in zone order
    pub fn zone_deltas(&self) -> impl Iterator<Item = (BodyZone, f64)> + '_ {
        self.zone_deltas.iter().map(|(&zone, &delta)| (zone, delta))
    }

    /// Copy of this profile with one zone's delta replaced
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileData` if the delta is non-finite or outside `[-3, 3]`.
    pub fn with_delta(&self, zone: BodyZone, delta: f64) -> EngineResult<Self> {
        Self::check_delta(zone, delta)?;
        let mut next = self.clone();
        next.zone_deltas.insert(zone, delta);
        Ok(next)
    }
}
