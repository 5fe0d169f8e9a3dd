// ABOUTME: Feedback-driven thermal profile updates from post-activity comfort ratings
// ABOUTME: Nudges each rated zone's delta by alpha toward the reported direction, clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! Feedback adapter
//!
//! `new_delta = clamp(delta + alpha * signal, -3, 3)` where `signal` is `+1` for
//! too cold, `-1` for too hot and `0` for perfect. Repeated consistent ratings
//! walk the delta toward the bound a step at a time.
//!
//! The batch is atomic: every label is resolved before any zone is touched, so
//! an unknown label rejects the whole record. Zones absent from the record keep
//! their delta. Ratings that resolve to the same zone are all applied; callers
//! coalesce duplicates before submitting.

use crate::config::{EngineConfig, FeedbackConfig};
use layerwise_core::constants::thermal::feedback::DELTA_BOUND;
use layerwise_core::errors::{EngineError, EngineResult};
use layerwise_core::models::{BodyZone, ComfortRating, FeedbackRecord, ThermalProfile};
use tracing::{debug, info};

/// Applies comfort feedback to thermal profiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackAdapter {
    alpha: f64,
}

impl Default for FeedbackAdapter {
    fn default() -> Self {
        Self {
            alpha: EngineConfig::global().feedback.alpha,
        }
    }
}

impl FeedbackAdapter {
    /// Create an adapter with a learning rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidFeedbackWeight` if `alpha` is not a positive finite number.
    pub fn new(alpha: f64) -> EngineResult<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(EngineError::InvalidFeedbackWeight { alpha });
        }
        Ok(Self { alpha })
    }

    /// Create an adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidFeedbackWeight` if the configured alpha is unusable.
    pub fn from_config(config: &FeedbackConfig) -> EngineResult<Self> {
        Self::new(config.alpha)
    }

    /// Learning rate
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Return the profile updated by one feedback batch
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfileData` if the input profile fails validation and
    /// `UnknownZone` if any label names no zone. The input is never modified.
    pub fn apply(
        &self,
        profile: &ThermalProfile,
        feedback: &FeedbackRecord,
    ) -> EngineResult<ThermalProfile> {
        profile.validate()?;
        let updates = resolve(feedback)?;

        let mut next = profile.clone();
        for (zone, rating) in updates {
            let current = next.sensitivity_delta(zone);
            let delta = self
                .alpha
                .mul_add(rating.signal(), current)
                .clamp(-DELTA_BOUND, DELTA_BOUND);
            debug!(zone = %zone, ?rating, current, delta, "sensitivity delta updated");
            next = next.with_delta(zone, delta)?;
        }

        info!(
            ratings = feedback.len(),
            overall = ?feedback.overall(),
            "feedback applied to thermal profile"
        );
        Ok(next)
    }
}

/// Resolve every label up front so one bad label rejects the batch
fn resolve(feedback: &FeedbackRecord) -> EngineResult<Vec<(BodyZone, ComfortRating)>> {
    let mut updates = Vec::with_capacity(feedback.len());
    for (label, rating) in feedback.ratings() {
        for zone in BodyZone::resolve_label(label)? {
            updates.push((zone, rating));
        }
    }
    Ok(updates)
}

/// Apply one feedback batch with an explicit learning rate
///
/// # Errors
///
/// Returns `InvalidFeedbackWeight`, `InvalidProfileData` or `UnknownZone`.
pub fn apply_feedback(
    profile: &ThermalProfile,
    feedback: &FeedbackRecord,
    alpha: f64,
) -> EngineResult<ThermalProfile> {
    FeedbackAdapter::new(alpha)?.apply(profile, feedback)
}
