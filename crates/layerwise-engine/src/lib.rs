// ABOUTME: Outfit scoring and personalization engine for weather-aware workout clothing
// ABOUTME: Target warmth, zone selection, outfit assembly, and feedback-driven profile learning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

#![deny(unsafe_code)]

//! # Layerwise Engine
//!
//! Turns a weather snapshot, an activity, a thermal profile and a gear catalog
//! into a per-zone outfit, and turns post-activity comfort ratings into an
//! updated thermal profile.
//!
//! Every operation is a pure, synchronous function of its inputs. The engine
//! holds no mutable state: profiles are passed in by value and returned
//! transformed, and persisting them is the caller's job.
//!
//! ## Modules
//!
//! - **config**: validated tunables with environment overrides
//! - **`target_warmth`**: desired warmth per zone
//! - **`zone_selector`**: gear choice per zone against a target
//! - **`outfit_assembler`**: the `recommend` entry point
//! - **`feedback_adapter`**: the `apply_feedback` update rule
//! - **onboarding**: profile seeding from the sensitivity slider
//! - **rationale**: display-only reasons and weather advisories

/// Engine configuration
pub mod config;

/// Feedback-driven profile updates
pub mod feedback_adapter;

/// Profile creation at onboarding
pub mod onboarding;

/// Outfit assembly across zones
pub mod outfit_assembler;

/// Display-only selection reasons and advisories
pub mod rationale;

/// Per-zone target warmth
pub mod target_warmth;

/// Per-zone gear selection
pub mod zone_selector;

pub use config::{ConfigError, EngineConfig};
pub use feedback_adapter::{apply_feedback, FeedbackAdapter};
pub use onboarding::onboard_profile;
pub use outfit_assembler::{recommend, OutfitAssembler};
pub use target_warmth::{TargetWarmthCalculator, WarmthBreakdown};
pub use zone_selector::{select_for_zone, ZoneSelection};
