// ABOUTME: Core types and constants for the Layerwise outfit engine
// ABOUTME: Foundation crate with the data model, error handling, and thermal constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

#![deny(unsafe_code)]

//! # Layerwise Core
//!
//! Foundation crate providing the shared data model for the Layerwise outfit
//! engine. It changes rarely, so the engine crate can iterate on scoring logic
//! without recompiling the model.
//!
//! ## Modules
//!
//! - **errors**: `EngineError`, `ErrorCode` and the `EngineResult` alias
//! - **constants**: thermal model defaults and unit conversions
//! - **models**: gear, catalog, weather, activity, profile, feedback and outfit types

/// Unified error handling with stable error codes
pub mod errors;

/// Thermal model defaults and unit conversions
pub mod constants;

/// Core data models
pub mod models;
