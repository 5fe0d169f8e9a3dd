// ABOUTME: Body zone enumeration scored independently by the outfit engine
// ABOUTME: Parses canonical zone names and the grouped labels used by feedback capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five body regions the engine dresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyZone {
    /// Hats, beanies, headbands
    Head,
    /// Base, mid and outer layers
    Torso,
    /// Shorts, tights, pants
    Legs,
    /// Socks
    Feet,
    /// Gloves, mittens
    Hands,
}

/// Feedback label that rates head and hands together
const HEAD_AND_HANDS_LABEL: &str = "head & hands";

impl BodyZone {
    /// Every zone, in recommendation order
    pub const ALL: [Self; 5] = [Self::Head, Self::Torso, Self::Legs, Self::Feet, Self::Hands];

    /// Canonical display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Torso => "Torso",
            Self::Legs => "Legs",
            Self::Feet => "Feet",
            Self::Hands => "Hands",
        }
    }

    /// Resolve a feedback label to the zones it covers
    ///
    /// Accepts the canonical zone names (case-insensitive) and the grouped
    /// `"Head & Hands"` label the feedback screen uses.
    ///
    /// # Errors
    ///
    /// Returns `UnknownZone` when the label names no zone.
    pub fn resolve_label(label: &str) -> EngineResult<Vec<Self>> {
        let normalized = label.trim().to_lowercase();
        if normalized == HEAD_AND_HANDS_LABEL || normalized == "head and hands" {
            return Ok(vec![Self::Head, Self::Hands]);
        }
        normalized
            .parse()
            .map(|zone| vec![zone])
            .map_err(|_| EngineError::UnknownZone {
                zone: label.to_owned(),
            })
    }
}

impl FromStr for BodyZone {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "head" => Ok(Self::Head),
            "torso" => Ok(Self::Torso),
            "legs" => Ok(Self::Legs),
            "feet" => Ok(Self::Feet),
            "hands" => Ok(Self::Hands),
            _ => Err(EngineError::UnknownZone { zone: s.to_owned() }),
        }
    }
}

impl fmt::Display for BodyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
