// ABOUTME: Profile learning configuration for feedback updates and onboarding seeds
// ABOUTME: Holds the feedback learning rate and the slider seed scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use layerwise_core::constants::thermal::{feedback, onboarding};
use serde::{Deserialize, Serialize};

/// Feedback update settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Delta change per non-perfect rating
    pub alpha: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            alpha: feedback::DEFAULT_ALPHA,
        }
    }
}

/// Onboarding seed settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    /// Delta produced at either end of the sensitivity slider
    pub seed_scale: f64,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            seed_scale: onboarding::SEED_SCALE,
        }
    }
}
