// ABOUTME: Display unit systems and conversions from the metric evaluation units
// ABOUTME: Metric is identity; imperial converts to Fahrenheit, mph, and inches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use crate::constants::units::{FAHRENHEIT_OFFSET, FAHRENHEIT_PER_CELSIUS, KM_PER_MILE, MM_PER_INCH};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit system used for display only; evaluation always runs on metric values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, km/h, millimetres
    #[default]
    Metric,
    /// Fahrenheit, mph, inches
    Imperial,
}

impl UnitSystem {
    /// Convert a Celsius temperature for display
    #[must_use]
    pub fn temperature(self, celsius: f64) -> f64 {
        match self {
            Self::Metric => celsius,
            Self::Imperial => celsius.mul_add(FAHRENHEIT_PER_CELSIUS, FAHRENHEIT_OFFSET),
        }
    }

    /// Convert a km/h speed for display
    #[must_use]
    pub fn speed(self, kmh: f64) -> f64 {
        match self {
            Self::Metric => kmh,
            Self::Imperial => kmh / KM_PER_MILE,
        }
    }

    /// Convert a millimetre precipitation amount for display
    #[must_use]
    pub fn precipitation(self, mm: f64) -> f64 {
        match self {
            Self::Metric => mm,
            Self::Imperial => mm / MM_PER_INCH,
        }
    }

    /// Temperature unit symbol
    #[must_use]
    pub const fn temperature_unit(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Speed unit symbol
    #[must_use]
    pub const fn speed_unit(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    /// Precipitation unit symbol
    #[must_use]
    pub const fn precipitation_unit(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }

    /// Decimal places used when printing precipitation
    #[must_use]
    pub const fn precipitation_decimals(self) -> usize {
        match self {
            Self::Metric => 1,
            Self::Imperial => 2,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("metric"),
            Self::Imperial => f.write_str("imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(Self::Metric),
            "imperial" | "us" => Ok(Self::Imperial),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system '{other}' (expected metric or imperial)"
            ))),
        }
    }
}
