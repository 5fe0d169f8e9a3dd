// ABOUTME: Core data models for the outfit engine
// ABOUTME: Re-exports zones, gear, catalog, weather, activity, profile, feedback and outfit types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! # Data Models
//!
//! Fixed-shape types for everything that crosses the engine boundary. Inputs
//! coming from storage or capture flows are validated when they are built or
//! deserialized, so the engine only ever sees well-formed gear, weather and
//! activity values. Profiles are the exception: they are re-validated at every
//! call because they are the engine's one piece of durable state.

mod activity;
mod catalog;
mod feedback;
mod gear;
mod outfit;
mod profile;
mod weather;
mod zone;

pub use activity::{Activity, ActivityContext};
pub use catalog::GearCatalog;
pub use feedback::{ComfortRating, FeedbackRecord, OverallComfort};
pub use gear::{GearItem, GearRecord, GearSlot, LayerType};
pub use outfit::{OutfitRecommendation, SelectionReason, WeatherAdvisory, ZoneRecommendation};
pub use profile::{SensitivityBand, ThermalProfile};
pub use weather::WeatherSnapshot;
pub use zone::BodyZone;
