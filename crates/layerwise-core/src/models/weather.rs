// ABOUTME: Weather snapshot consumed by the outfit engine
// ABOUTME: Feels-like temperature and wind drive scoring; humidity and precipitation are advisory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Current conditions at the start of an activity, in metric units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WeatherRecord")]
pub struct WeatherSnapshot {
    feels_like_c: f64,
    wind_kmh: f64,
    humidity_pct: f64,
    precip_pct: f64,
}

/// Unvalidated wire form of [`WeatherSnapshot`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeatherRecord {
    feels_like_c: f64,
    wind_kmh: f64,
    #[serde(default)]
    humidity_pct: f64,
    #[serde(default)]
    precip_pct: f64,
}

impl TryFrom<WeatherRecord> for WeatherSnapshot {
    type Error = EngineError;

    fn try_from(record: WeatherRecord) -> Result<Self, Self::Error> {
        Self::new(record.feels_like_c, record.wind_kmh)?
            .with_humidity(record.humidity_pct)?
            .with_precipitation(record.precip_pct)
    }
}

impl WeatherSnapshot {
    /// Create a snapshot from the two scoring inputs
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeatherData` if the temperature is not finite or the wind
    /// speed is negative or not finite.
    pub fn new(feels_like_c: f64, wind_kmh: f64) -> EngineResult<Self> {
        if !feels_like_c.is_finite() {
            return Err(EngineError::weather(format!(
                "feels-like temperature {feels_like_c} is not finite"
            )));
        }
        if !wind_kmh.is_finite() || wind_kmh < 0.0 {
            return Err(EngineError::weather(format!(
                "wind speed {wind_kmh} km/h must be a non-negative number"
            )));
        }
        Ok(Self {
            feels_like_c,
            wind_kmh,
            humidity_pct: 0.0,
            precip_pct: 0.0,
        })
    }

    /// Attach relative humidity (advisory only)
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeatherData` if the value is outside 0-100.
    pub fn with_humidity(mut self, humidity_pct: f64) -> EngineResult<Self> {
        self.humidity_pct = Self::percentage("humidity", humidity_pct)?;
        Ok(self)
    }

    /// Attach precipitation chance (advisory only)
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeatherData` if the value is outside 0-100.
    pub fn with_precipitation(mut self, precip_pct: f64) -> EngineResult<Self> {
        self.precip_pct = Self::percentage("precipitation", precip_pct)?;
        Ok(self)
    }

    fn percentage(field: &str, value: f64) -> EngineResult<f64> {
        if (0.0..=100.0).contains(&value) {
            Ok(value)
        } else {
            Err(EngineError::weather(format!(
                "{field} {value}% is outside 0-100"
            )))
        }
    }

    /// Apparent temperature in Celsius
    #[must_use]
    pub const fn feels_like_c(&self) -> f64 {
        self.feels_like_c
    }

    /// Wind speed in km/h
    #[must_use]
    pub const fn wind_kmh(&self) -> f64 {
        self.wind_kmh
    }

    /// Relative humidity percentage
    #[must_use]
    pub const fn humidity_pct(&self) -> f64 {
        self.humidity_pct
    }

    /// Chance of precipitation percentage
    #[must_use]
    pub const fn precip_pct(&self) -> f64 {
        self.precip_pct
    }
}
