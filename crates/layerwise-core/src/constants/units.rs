// ABOUTME: Unit conversion constants used when imperial input enters the engine boundary
// ABOUTME: The engine itself works in Celsius and km/h only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

/// Kilometres per mile
pub const KM_PER_MILE: f64 = 1.609_344;

/// Fahrenheit degrees per Celsius degree
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;

/// Fahrenheit value of 0°C
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

/// Convert a Fahrenheit temperature to Celsius
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_FREEZING_POINT) / FAHRENHEIT_PER_CELSIUS
}

/// Convert a speed in miles per hour to km/h
#[must_use]
pub fn mph_to_kmh(mph: f64) -> f64 {
    mph * KM_PER_MILE
}
