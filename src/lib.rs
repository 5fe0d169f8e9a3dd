// ABOUTME: Main library entry point for Layerwise weather-aware outfit recommendations
// ABOUTME: Re-exports the core data model and engine, and provides logging setup for binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

#![deny(unsafe_code)]

//! # Layerwise
//!
//! Recommends what to wear for an outdoor run or ride from the current weather,
//! the activity, a personal thermal profile and the user's gear closet, then
//! refines the profile from post-activity comfort feedback.
//!
//! ## Quick Start
//!
//! ```rust
//! use layerwise::models::{ActivityContext, Activity, GearCatalog, ThermalProfile, WeatherSnapshot};
//! use layerwise::{apply_feedback, recommend};
//! use layerwise::models::{BodyZone, ComfortRating, FeedbackRecord};
//!
//! # fn main() -> Result<(), layerwise::errors::EngineError> {
//! let catalog = GearCatalog::from_json(r#"[
//!     {"id": "t3", "name": "Tech T-Shirt", "category": "Torso", "layerType": "Base", "warmthRating": 2},
//!     {"id": "l3", "name": "Running Shorts", "category": "Legs", "warmthRating": 1}
//! ]"#)?;
//! let weather = WeatherSnapshot::new(18.0, 5.0)?;
//! let activity = ActivityContext::new(Activity::Run, 45.0)?;
//! let profile = ThermalProfile::default();
//!
//! let outfit = recommend(&weather, &activity, &profile, &catalog)?;
//! assert_eq!(outfit.item_ids(), vec!["t3", "l3"]);
//! assert!(outfit.is_gap(BodyZone::Feet));
//!
//! let feedback = FeedbackRecord::new().rate("Legs", ComfortRating::TooCold);
//! let updated = apply_feedback(&profile, &feedback, 0.2)?;
//! assert!(updated.sensitivity_delta(BodyZone::Legs) > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `layerwise-core`: data model, errors, thermal constants
//! - `layerwise-engine`: target warmth, zone selection, outfit assembly, feedback
//! - this crate: unified re-exports, logging, and the `layerwise-cli` binary

/// Structured logging setup for binaries
pub mod logging;

pub use layerwise_core::{constants, errors, models};
pub use layerwise_engine::{
    apply_feedback, config, feedback_adapter, onboard_profile, onboarding, outfit_assembler,
    rationale, recommend, select_for_zone, target_warmth, zone_selector, EngineConfig,
    FeedbackAdapter, OutfitAssembler, TargetWarmthCalculator,
};
