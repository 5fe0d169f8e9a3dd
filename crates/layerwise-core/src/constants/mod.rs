// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the warmth scale, weather curves, and profile learning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Thermal model constants (warmth curve, zone exposure, wind, activity heat, learning)
pub mod thermal;
/// Unit conversion constants for the presentation boundary
pub mod units;
