// ABOUTME: Core weather provider trait shared by all data sources
// ABOUTME: Geocoding search, forecast snapshot, and air-quality snapshot operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use crate::errors::provider::ProviderResult;
use crate::models::{AirQualitySnapshot, ForecastSnapshot, Location};
use async_trait::async_trait;

/// Source of geocoding, forecast, and air-quality data
///
/// Implementations normalize units before returning: Celsius, km/h,
/// millimetres, US AQI.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Find places matching a name, best match first
    ///
    /// No matches is an empty list, not an error.
    async fn search_locations(&self, query: &str, limit: u8) -> ProviderResult<Vec<Location>>;

    /// Current conditions and hourly forecast for a location
    async fn forecast(&self, location: &Location) -> ProviderResult<ForecastSnapshot>;

    /// Current and hourly US AQI for a location
    async fn air_quality(&self, location: &Location) -> ProviderResult<AirQualitySnapshot>;
}
