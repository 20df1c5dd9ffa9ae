// ABOUTME: Rule-table thresholds for the outdoor safety evaluator
// ABOUTME: Temperature, wind, precipitation, air-quality, and classification cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Literal thresholds of the safety rule table.
//!
//! Every interval is inclusive on the lower bound of the better band, so a
//! value sitting exactly on a threshold gets the lower sub-score.

/// Running thresholds
pub mod running {
    /// Lower bound of the ideal temperature band (°C, inclusive)
    pub const IDEAL_TEMP_MIN_C: f64 = 7.0;
    /// Upper bound of the ideal temperature band (°C, inclusive)
    pub const IDEAL_TEMP_MAX_C: f64 = 18.0;
    /// Lower bound of the cool band (°C, inclusive)
    pub const COOL_TEMP_MIN_C: f64 = -5.0;
    /// Upper bound of the warm band (°C, inclusive)
    pub const WARM_TEMP_MAX_C: f64 = 26.0;
    /// Calm wind limit (km/h, inclusive)
    pub const CALM_WIND_MAX_KMH: f64 = 25.0;
    /// Breezy wind limit (km/h, inclusive)
    pub const BREEZY_WIND_MAX_KMH: f64 = 39.0;
}

/// Cycling thresholds
pub mod cycling {
    /// Lower bound of the ideal temperature band (°C, inclusive)
    pub const IDEAL_TEMP_MIN_C: f64 = 10.0;
    /// Upper bound of the ideal temperature band (°C, inclusive)
    pub const IDEAL_TEMP_MAX_C: f64 = 24.0;
    /// Lower bound of the cool band (°C, inclusive)
    pub const COOL_TEMP_MIN_C: f64 = 0.0;
    /// Upper bound of the warm band (°C, inclusive)
    pub const WARM_TEMP_MAX_C: f64 = 30.0;
    /// Calm wind limit (km/h, inclusive)
    pub const CALM_WIND_MAX_KMH: f64 = 20.0;
    /// Breezy wind limit (km/h, inclusive)
    pub const BREEZY_WIND_MAX_KMH: f64 = 32.0;
}

/// Precipitation thresholds, shared by all activities
pub mod precipitation {
    /// Amount at or above which precipitation scores 2 (mm)
    pub const HEAVY_MM: f64 = 3.0;
    /// Amount at or above which precipitation scores 1 (mm)
    pub const LIGHT_MM: f64 = 1.0;
    /// Probability at or above which precipitation scores 1 (%)
    pub const LIKELY_PROBABILITY: f64 = 50.0;
}

/// US AQI thresholds
pub mod air_quality {
    /// Good air limit (inclusive)
    pub const GOOD_MAX: u32 = 50;
    /// Moderate air limit (inclusive)
    pub const MODERATE_MAX: u32 = 100;
}

/// Total-score classification
pub mod classification {
    /// Highest total still rated ideal
    pub const IDEAL_MAX_SCORE: u8 = 2;
    /// Highest total still rated caution
    pub const CAUTION_MAX_SCORE: u8 = 4;
}

/// Largest value any single factor can contribute
pub const MAX_FACTOR_SCORE: u8 = 2;

/// Largest possible total (four factors at their maximum)
pub const MAX_TOTAL_SCORE: u8 = 4 * MAX_FACTOR_SCORE;
