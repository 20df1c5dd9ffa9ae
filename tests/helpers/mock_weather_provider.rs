// ABOUTME: In-process weather provider for testing without network access
// ABOUTME: Returns pre-configured snapshots or failures and counts calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use trailcast::models::{AirQualitySnapshot, ForecastSnapshot, Location};
use trailcast::providers::{ProviderError, ProviderResult, WeatherProvider};

const PROVIDER: &str = "mock";

/// Weather provider serving canned data
///
/// A `None` snapshot makes the corresponding call fail with an API error.
#[derive(Default)]
pub struct MockWeatherProvider {
    pub locations: Vec<Location>,
    pub forecast: Option<ForecastSnapshot>,
    pub air_quality: Option<AirQualitySnapshot>,
    pub forecast_calls: AtomicUsize,
    pub air_quality_calls: AtomicUsize,
}

impl MockWeatherProvider {
    pub fn new(forecast: ForecastSnapshot, air_quality: AirQualitySnapshot) -> Self {
        Self {
            forecast: Some(forecast),
            air_quality: Some(air_quality),
            ..Self::default()
        }
    }

    /// Forecast succeeds, air quality fails
    pub fn without_air_quality(forecast: ForecastSnapshot) -> Self {
        Self {
            forecast: Some(forecast),
            ..Self::default()
        }
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    fn unavailable(status_code: u16) -> ProviderError {
        ProviderError::ApiError {
            provider: PROVIDER.to_owned(),
            status_code,
            message: "service unavailable".to_owned(),
        }
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search_locations(&self, query: &str, limit: u8) -> ProviderResult<Vec<Location>> {
        if query.trim().is_empty() {
            return Err(ProviderError::InvalidRequest {
                provider: PROVIDER.to_owned(),
                reason: "search query cannot be empty".to_owned(),
            });
        }
        let needle = query.trim().to_lowercase();
        Ok(self
            .locations
            .iter()
            .filter(|location| location.name.to_lowercase().contains(&needle))
            .take(usize::from(limit))
            .cloned()
            .collect())
    }

    async fn forecast(&self, _location: &Location) -> ProviderResult<ForecastSnapshot> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        self.forecast.clone().ok_or_else(|| Self::unavailable(503))
    }

    async fn air_quality(&self, _location: &Location) -> ProviderResult<AirQualitySnapshot> {
        self.air_quality_calls.fetch_add(1, Ordering::SeqCst);
        self.air_quality.clone().ok_or_else(|| Self::unavailable(502))
    }
}
