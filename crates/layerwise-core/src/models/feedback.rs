// ABOUTME: Post-activity comfort ratings submitted per body zone as one batch
// ABOUTME: Labels are kept as captured; zone resolution happens when feedback is applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// How a zone felt during the activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortRating {
    /// Wanted more insulation
    #[serde(alias = "cold")]
    TooCold,
    /// Just right
    Perfect,
    /// Wanted less insulation
    #[serde(alias = "hot")]
    TooHot,
}

impl ComfortRating {
    /// Direction to move the zone's sensitivity delta
    #[must_use]
    pub const fn signal(self) -> f64 {
        match self {
            Self::TooCold => 1.0,
            Self::Perfect => 0.0,
            Self::TooHot => -1.0,
        }
    }
}

/// Summary badge for a completed activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallComfort {
    /// Every rated zone was comfortable
    Perfect,
    /// More zones ran hot than cold
    RanHot,
    /// More zones ran cold than hot
    RanCold,
    /// As many hot zones as cold ones
    Mixed,
}

/// Zone label to rating, submitted atomically after an activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackRecord {
    ratings: BTreeMap<String, ComfortRating>,
}

impl FeedbackRecord {
    /// Empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rating for a label
    #[must_use]
    pub fn rate(mut self, label: impl Into<String>, rating: ComfortRating) -> Self {
        self.ratings.insert(label.into(), rating);
        self
    }

    /// Ratings in label order
    pub fn ratings(&self) -> impl Iterator<Item = (&str, ComfortRating)> {
        self.ratings
            .iter()
            .map(|(label, &rating)| (label.as_str(), rating))
    }

    /// Number of rated labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Whether nothing was rated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Summarise the batch for display
    #[must_use]
    pub fn overall(&self) -> OverallComfort {
        let (cold, hot) = self
            .ratings
            .values()
            .fold((0_usize, 0_usize), |(cold, hot), rating| match rating {
                ComfortRating::TooCold => (cold + 1, hot),
                ComfortRating::TooHot => (cold, hot + 1),
                ComfortRating::Perfect => (cold, hot),
            });
        match cold.cmp(&hot) {
            _ if cold == 0 && hot == 0 => OverallComfort::Perfect,
            Ordering::Greater => OverallComfort::RanCold,
            Ordering::Less => OverallComfort::RanHot,
            Ordering::Equal => OverallComfort::Mixed,
        }
    }
}

impl<L: Into<String>> FromIterator<(L, ComfortRating)> for FeedbackRecord {
    fn from_iter<T: IntoIterator<Item = (L, ComfortRating)>>(iter: T) -> Self {
        Self {
            ratings: iter
                .into_iter()
                .map(|(label, rating)| (label.into(), rating))
                .collect(),
        }
    }
}
