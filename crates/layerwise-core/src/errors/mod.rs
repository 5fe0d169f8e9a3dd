// ABOUTME: Unified error handling for the outfit engine with stable error codes
// ABOUTME: Defines ErrorCode families and re-exports the EngineError type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! # Unified Error Handling System
//!
//! Every engine failure is a rejected call. Nothing here is retryable and no
//! engine state can be left half-updated, so errors carry enough context for the
//! caller to report them and nothing more.

mod engine;

pub use engine::EngineError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result alias for fallible engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Standard error codes reported alongside engine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Activity context (3000-3099)
    /// Activity value outside the supported set
    InvalidActivity = 3000,
    /// Non-positive or non-finite duration
    InvalidDuration = 3001,

    // Input data integrity (3100-3199)
    /// Gear record violates the data model
    InvalidGearData = 3100,
    /// Thermal profile violates the data model
    InvalidProfileData = 3101,
    /// Weather snapshot violates the data model
    InvalidWeatherData = 3102,

    // Feedback (3200-3299)
    /// Feedback label does not name a body zone
    UnknownZone = 3200,
    /// Learning rate is not a positive finite number
    InvalidFeedbackWeight = 3201,
}

impl ErrorCode {
    /// Numeric code for logs and wire payloads
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Short human-readable description of the code family
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidActivity => "Unsupported activity",
            Self::InvalidDuration => "Activity duration must be positive",
            Self::InvalidGearData => "Gear data failed validation",
            Self::InvalidProfileData => "Thermal profile failed validation",
            Self::InvalidWeatherData => "Weather snapshot failed validation",
            Self::UnknownZone => "Unknown body zone",
            Self::InvalidFeedbackWeight => "Feedback weight must be positive",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_u16())
    }
}
