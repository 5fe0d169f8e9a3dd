// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Provides the prototype gear closet, weather and activity builders, and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Layerwise Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test fixtures for `layerwise`

use layerwise::models::{Activity, ActivityContext, GearCatalog, WeatherSnapshot};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// The seed closet, in catalog order
pub const PROTOTYPE_CLOSET_JSON: &str = r#"[
    {"id": "h1", "name": "Baseball Hat", "category": "Head", "warmthRating": 2, "sports": ["run"], "brand": "Nike", "color": "Black"},
    {"id": "h2", "name": "Beanie", "category": "Head", "warmthRating": 7, "sports": ["run", "cycle"], "brand": "North Face", "color": "Grey"},
    {"id": "h3", "name": "Buff/Headband", "category": "Head", "warmthRating": 4, "sports": ["run", "cycle"], "brand": "Buff", "color": "Blue"},
    {"id": "t1", "name": "Merino Wool Long Sleeve", "category": "Torso", "layerType": "Base", "warmthRating": 6, "sports": ["run", "cycle"], "brand": "Smartwool", "color": "Navy"},
    {"id": "t2", "name": "Lightweight Windbreaker", "category": "Torso", "layerType": "Outer", "warmthRating": 4, "sports": ["run", "cycle"], "brand": "Patagonia", "color": "Orange"},
    {"id": "t3", "name": "Tech T-Shirt", "category": "Torso", "layerType": "Base", "warmthRating": 2, "sports": ["run", "cycle"], "brand": "Adidas", "color": "White"},
    {"id": "t4", "name": "Fleece Midlayer", "category": "Torso", "layerType": "Mid", "warmthRating": 7, "sports": ["run", "cycle"], "brand": "Arc'teryx", "color": "Black"},
    {"id": "t5", "name": "Insulated Vest", "category": "Torso", "layerType": "Mid", "warmthRating": 6, "sports": ["run", "cycle"], "brand": "North Face", "color": "Red"},
    {"id": "t6", "name": "Rain Shell", "category": "Torso", "layerType": "Outer", "warmthRating": 5, "sports": ["run", "cycle"], "brand": "Gore-Tex", "color": "Yellow"},
    {"id": "l1", "name": "Thermal Tights", "category": "Legs", "warmthRating": 8, "sports": ["run", "cycle"], "brand": "Under Armour", "color": "Black"},
    {"id": "l2", "name": "3/4 Length Tights", "category": "Legs", "warmthRating": 5, "sports": ["run", "cycle"], "brand": "Nike", "color": "Grey"},
    {"id": "l3", "name": "Running Shorts", "category": "Legs", "warmthRating": 1, "sports": ["run"], "brand": "Lululemon", "color": "Blue"},
    {"id": "l4", "name": "Track Pants", "category": "Legs", "warmthRating": 6, "sports": ["run"], "brand": "Adidas", "color": "Black"},
    {"id": "f1", "name": "Ankle Socks", "category": "Feet", "warmthRating": 2, "sports": ["run", "cycle"], "brand": "Balega", "color": "White"},
    {"id": "f2", "name": "Wool Socks", "category": "Feet", "warmthRating": 7, "sports": ["run", "cycle"], "brand": "Darn Tough", "color": "Green"},
    {"id": "f3", "name": "Compression Socks", "category": "Feet", "warmthRating": 3, "sports": ["run", "cycle"], "brand": "CEP", "color": "Black"},
    {"id": "ha1", "name": "Light Gloves", "category": "Hands", "warmthRating": 4, "sports": ["run", "cycle"], "brand": "Nike", "color": "Black"},
    {"id": "ha2", "name": "Heavy Mittens", "category": "Hands", "warmthRating": 9, "sports": ["run", "cycle"], "brand": "Black Diamond", "color": "Grey"}
]"#;

/// The seed closet as a catalog
pub fn prototype_closet() -> GearCatalog {
    GearCatalog::from_json(PROTOTYPE_CLOSET_JSON).expect("prototype closet parses")
}

/// A catalog from a JSON array literal
pub fn catalog(json: &str) -> GearCatalog {
    GearCatalog::from_json(json).expect("test catalog parses")
}

/// Weather with only the scoring inputs set
pub fn weather(feels_like_c: f64, wind_kmh: f64) -> WeatherSnapshot {
    WeatherSnapshot::new(feels_like_c, wind_kmh).expect("valid weather")
}

/// A run of the given length
pub fn run(duration_minutes: f64) -> ActivityContext {
    ActivityContext::new(Activity::Run, duration_minutes).expect("valid run")
}

/// A ride of the given length
pub fn ride(duration_minutes: f64) -> ActivityContext {
    ActivityContext::new(Activity::Cycle, duration_minutes).expect("valid ride")
}

/// Float comparison with a tolerance suited to the warmth scale
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
