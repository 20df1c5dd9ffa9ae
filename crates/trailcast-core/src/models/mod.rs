// ABOUTME: Core data models shared across the Trailcast workspace
// ABOUTME: Activities, readings, advisory levels, locations, snapshots, and units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

/// Outdoor activity kinds
pub mod activity;
/// Geocoded locations
pub mod location;
/// Evaluator input and output types
pub mod reading;
/// Display unit systems
pub mod units;
/// Forecast and air-quality snapshots
pub mod weather;

pub use activity::Activity;
pub use location::Location;
pub use reading::{AdvisoryLevel, Reading};
pub use units::UnitSystem;
pub use weather::{
    AirQualitySnapshot, CurrentConditions, ForecastSnapshot, HourlyPoint, WeatherCode,
};
