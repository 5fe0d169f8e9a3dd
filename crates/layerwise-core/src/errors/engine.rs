// ABOUTME: Engine error enum covering invalid inputs to recommendation and feedback calls
// ABOUTME: Each variant maps to a stable ErrorCode for callers that report errors on the wire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use super::ErrorCode;
use thiserror::Error;

/// Errors returned by engine operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Activity is not one of the supported activities
    #[error("Invalid activity '{value}': expected run or cycle")]
    InvalidActivity {
        /// Raw value supplied by the caller
        value: String,
    },

    /// Duration is not a positive number of minutes
    #[error("Invalid duration {minutes} minutes: must be greater than zero")]
    InvalidDuration {
        /// Duration supplied by the caller
        minutes: f64,
    },

    /// A gear record violates the data model
    #[error("Invalid gear data for item '{item_id}': {reason}")]
    InvalidGearData {
        /// Id of the offending item
        item_id: String,
        /// What is wrong with it
        reason: String,
    },

    /// The thermal profile violates the data model
    #[error("Invalid profile data: {reason}")]
    InvalidProfileData {
        /// What is wrong with it
        reason: String,
    },

    /// The weather snapshot violates the data model
    #[error("Invalid weather data: {reason}")]
    InvalidWeatherData {
        /// What is wrong with it
        reason: String,
    },

    /// Feedback referenced a zone outside the canonical set
    #[error("Unknown zone '{zone}'")]
    UnknownZone {
        /// Label supplied by the caller
        zone: String,
    },

    /// Feedback learning rate is not usable
    #[error("Invalid feedback weight {alpha}: must be a positive finite number")]
    InvalidFeedbackWeight {
        /// Learning rate supplied by the caller
        alpha: f64,
    },
}

impl EngineError {
    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidActivity { .. } => ErrorCode::InvalidActivity,
            Self::InvalidDuration { .. } => ErrorCode::InvalidDuration,
            Self::InvalidGearData { .. } => ErrorCode::InvalidGearData,
            Self::InvalidProfileData { .. } => ErrorCode::InvalidProfileData,
            Self::InvalidWeatherData { .. } => ErrorCode::InvalidWeatherData,
            Self::UnknownZone { .. } => ErrorCode::UnknownZone,
            Self::InvalidFeedbackWeight { .. } => ErrorCode::InvalidFeedbackWeight,
        }
    }

    /// Build an `InvalidGearData` error
    pub fn gear(item_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGearData {
            item_id: item_id.into(),
            reason: reason.into(),
        }
    }

    /// Build an `InvalidProfileData` error
    pub fn profile(reason: impl Into<String>) -> Self {
        Self::InvalidProfileData {
            reason: reason.into(),
        }
    }

    /// Build an `InvalidWeatherData` error
    pub fn weather(reason: impl Into<String>) -> Self {
        Self::InvalidWeatherData {
            reason: reason.into(),
        }
    }
}
