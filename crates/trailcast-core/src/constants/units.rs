// ABOUTME: Unit conversion constants for display formatting
// ABOUTME: Temperature, speed, and precipitation conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

/// Kilometres per statute mile
pub const KM_PER_MILE: f64 = 1.609_344;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Fahrenheit degrees per Celsius degree
pub const FAHRENHEIT_PER_CELSIUS: f64 = 9.0 / 5.0;

/// Fahrenheit value of 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
