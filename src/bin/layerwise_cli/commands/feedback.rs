// ABOUTME: Feedback command for layerwise-cli
// ABOUTME: Parses LABEL=RATING pairs and prints the updated thermal profile; verdict goes to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors

use super::load_profile;
use anyhow::{anyhow, Context, Result};
use layerwise::models::{ComfortRating, FeedbackRecord};
use layerwise::{EngineConfig, FeedbackAdapter};
use serde_json::Value;
use std::path::Path;

fn parse_rating(pair: &str) -> Result<(String, ComfortRating)> {
    let (label, rating) = pair
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("rating must be LABEL=RATING, got '{pair}'"))?;
    let rating: ComfortRating =
        serde_json::from_value(Value::String(rating.trim().to_lowercase()))
            .with_context(|| format!("unknown rating '{rating}'"))?;
    Ok((label.trim().to_owned(), rating))
}

/// Apply the ratings and return the new profile
///
/// The overall verdict is written to stderr so stdout stays a loadable profile.
pub fn run(profile_path: &Path, pairs: &[String], alpha: Option<f64>) -> Result<Value> {
    let profile = load_profile(profile_path)?;
    let feedback = pairs
        .iter()
        .map(|pair| parse_rating(pair))
        .collect::<Result<FeedbackRecord>>()?;

    let adapter = match alpha {
        Some(alpha) => FeedbackAdapter::new(alpha)?,
        None => FeedbackAdapter::from_config(&EngineConfig::global().feedback)?,
    };
    let updated = adapter.apply(&profile, &feedback)?;

    eprintln!("Overall comfort: {}", serde_json::to_value(feedback.overall())?);
    Ok(serde_json::to_value(&updated)?)
}
