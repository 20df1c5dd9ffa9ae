// ABOUTME: Evaluator input (Reading) and output (AdvisoryLevel) types
// ABOUTME: One weather/air-quality data point and the three-level advisory derived from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use super::Activity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One point-in-time (or hourly-forecast) set of values used as evaluator input
///
/// Values must already be normalized to Celsius, km/h and millimetres.
/// No range validation happens here: negative precipitation and similar
/// oddities are passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Activity the reading is evaluated for
    pub activity: Activity,
    /// Air temperature in degrees Celsius
    pub temperature_celsius: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Precipitation amount in millimetres over the current/next hour
    pub precipitation_mm: f64,
    /// Precipitation probability (0-100)
    pub precipitation_probability: f64,
    /// US AQI, absent when no air-quality data could be obtained
    pub air_quality_index: Option<u32>,
}

impl Reading {
    /// Reading without air-quality data
    #[must_use]
    pub const fn new(
        activity: Activity,
        temperature_celsius: f64,
        wind_speed_kmh: f64,
        precipitation_mm: f64,
        precipitation_probability: f64,
    ) -> Self {
        Self {
            activity,
            temperature_celsius,
            wind_speed_kmh,
            precipitation_mm,
            precipitation_probability,
            air_quality_index: None,
        }
    }

    /// Attach (or clear) the air-quality index
    #[must_use]
    pub const fn with_air_quality(mut self, air_quality_index: Option<u32>) -> Self {
        self.air_quality_index = air_quality_index;
        self
    }
}

/// Three-level outdoor advisory, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryLevel {
    /// Good conditions for the activity
    Ideal,
    /// Go, but take precautions
    Caution,
    /// Conditions are unsafe or unpleasant enough to skip
    NotRecommended,
}

impl AdvisoryLevel {
    /// Stable wire name (`ideal`, `caution`, `not-recommended`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ideal => "ideal",
            Self::Caution => "caution",
            Self::NotRecommended => "not-recommended",
        }
    }

    /// Human-readable label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ideal => "Ideal",
            Self::Caution => "Caution",
            Self::NotRecommended => "Not recommended",
        }
    }
}

impl fmt::Display for AdvisoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
