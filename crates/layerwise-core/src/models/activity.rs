// ABOUTME: Activity type and per-session activity context for outfit recommendations
// ABOUTME: Validates activity names and positive durations at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outdoor activity the outfit is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum Activity {
    /// Running
    Run,
    /// Cycling
    Cycle,
}

impl Activity {
    /// Every supported activity
    pub const ALL: [Self; 2] = [Self::Run, Self::Cycle];

    /// Canonical name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "Run",
            Self::Cycle => "Cycle",
        }
    }
}

impl FromStr for Activity {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "run" | "running" => Ok(Self::Run),
            "cycle" | "cycling" | "ride" => Ok(Self::Cycle),
            _ => Err(EngineError::InvalidActivity {
                value: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Activity {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user is about to do and for how long
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ActivityContextRecord")]
pub struct ActivityContext {
    activity: Activity,
    duration_minutes: f64,
}

/// Unvalidated wire form of [`ActivityContext`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityContextRecord {
    activity: Activity,
    duration_minutes: f64,
}

impl TryFrom<ActivityContextRecord> for ActivityContext {
    type Error = EngineError;

    fn try_from(record: ActivityContextRecord) -> Result<Self, Self::Error> {
        Self::new(record.activity, record.duration_minutes)
    }
}

impl ActivityContext {
    /// Create a validated activity context
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` when the duration is not a positive finite number.
    pub fn new(activity: Activity, duration_minutes: f64) -> EngineResult<Self> {
        if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
            return Err(EngineError::InvalidDuration {
                minutes: duration_minutes,
            });
        }
        Ok(Self {
            activity,
            duration_minutes,
        })
    }

    /// Parse the activity name and validate the duration
    ///
    /// # Errors
    ///
    /// Returns `InvalidActivity` for an unsupported activity name and
    /// `InvalidDuration` for a non-positive duration.
    pub fn parse(activity: &str, duration_minutes: f64) -> EngineResult<Self> {
        Self::new(activity.parse()?, duration_minutes)
    }

    /// The activity
    #[must_use]
    pub const fn activity(&self) -> Activity {
        self.activity
    }

    /// Planned duration in minutes
    #[must_use]
    pub const fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }
}
