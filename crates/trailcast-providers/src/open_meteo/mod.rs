// ABOUTME: Open-Meteo weather provider for forecasts, geocoding, and air quality
// ABOUTME: Keyless HTTP client that normalizes responses into snapshot models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Open-Meteo provider
//!
//! Three endpoint families, all keyless:
//! - forecast: `{forecast_base}/forecast`
//! - geocoding: `{geocoding_base}/search`
//! - air quality: `{air_quality_base}/air-quality`
//!
//! Every request asks for metric units and `timezone=auto`, so returned
//! times are local to the location.
//!
//! # Example
//! ```rust,no_run
//! use trailcast_providers::{OpenMeteoConfig, OpenMeteoProvider, WeatherProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenMeteoProvider::new(OpenMeteoConfig::default());
//! let matches = provider.search_locations("Lyon", 5).await?;
//! if let Some(place) = matches.first() {
//!     let forecast = provider.forecast(place).await?;
//!     println!("{} °C", forecast.current.temperature_celsius);
//! }
//! # Ok(())
//! # }
//! ```

/// Response payloads and conversions
pub mod models;

use crate::errors::provider::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{AirQualitySnapshot, ForecastSnapshot, Location};
use crate::provider::WeatherProvider;
use async_trait::async_trait;
use models::{AirQualityResponse, ForecastResponse, GeocodingResponse};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, warn};
use trailcast_core::constants::{api, limits, service_names};

const FORECAST_CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,precipitation,weather_code,wind_speed_10m,is_day";
const FORECAST_HOURLY_FIELDS: &str =
    "temperature_2m,precipitation,precipitation_probability,weather_code,wind_speed_10m";
const AIR_QUALITY_FIELDS: &str = "us_aqi";

/// Open-Meteo endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMeteoConfig {
    /// Forecast API base (default: <https://api.open-meteo.com/v1>)
    pub forecast_base_url: String,
    /// Geocoding API base (default: <https://geocoding-api.open-meteo.com/v1>)
    pub geocoding_base_url: String,
    /// Air-quality API base (default: <https://air-quality-api.open-meteo.com/v1>)
    pub air_quality_base_url: String,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: api::OPEN_METEO_FORECAST_BASE.to_owned(),
            geocoding_base_url: api::OPEN_METEO_GEOCODING_BASE.to_owned(),
            air_quality_base_url: api::OPEN_METEO_AIR_QUALITY_BASE.to_owned(),
        }
    }
}

/// Open-Meteo client
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    config: OpenMeteoConfig,
    http_client: Client,
}

impl OpenMeteoProvider {
    /// Create a provider on the shared HTTP client
    #[must_use]
    pub fn new(config: OpenMeteoConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a provider on a caller-supplied HTTP client
    #[must_use]
    pub const fn with_client(config: OpenMeteoConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// GET a JSON document, mapping transport and status failures
    async fn get_json<T: DeserializeOwned>(
        &self,
        provider: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> ProviderResult<T> {
        let started = Instant::now();
        let response = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| ProviderError::Network {
                provider: provider.to_owned(),
                source,
            })?;

        let status = response.status();
        debug!(
            provider,
            url,
            status = status.as_u16(),
            duration_ms = started.elapsed().as_millis(),
            "Open-Meteo response received"
        );

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(provider, "Open-Meteo rate limit hit");
            return Err(ProviderError::RateLimitExceeded {
                provider: provider.to_owned(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                provider: provider.to_owned(),
                status_code: status.as_u16(),
                message: body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::InvalidResponse {
                provider: provider.to_owned(),
                reason: format!("JSON parse error: {e}"),
            })
    }
}

fn coordinate_query(location: &Location) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("timezone", "auto".to_owned()),
        ("forecast_days", limits::FORECAST_DAYS.to_string()),
    ]
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    fn name(&self) -> &'static str {
        service_names::OPEN_METEO
    }

    async fn search_locations(&self, query: &str, limit: u8) -> ProviderResult<Vec<Location>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ProviderError::InvalidRequest {
                provider: service_names::OPEN_METEO_GEOCODING.to_owned(),
                reason: "search query cannot be empty".to_owned(),
            });
        }

        let count = limit.clamp(1, limits::MAX_SEARCH_RESULTS);
        let url = format!("{}/search", self.config.geocoding_base_url);
        let response: GeocodingResponse = self
            .get_json(
                service_names::OPEN_METEO_GEOCODING,
                &url,
                &[
                    ("name", query.to_owned()),
                    ("count", count.to_string()),
                    ("language", "en".to_owned()),
                    ("format", "json".to_owned()),
                ],
            )
            .await?;

        let locations = response.into_locations();
        debug!(query, matches = locations.len(), "Geocoding search complete");
        Ok(locations)
    }

    async fn forecast(&self, location: &Location) -> ProviderResult<ForecastSnapshot> {
        let url = format!("{}/forecast", self.config.forecast_base_url);
        let mut query = coordinate_query(location);
        query.extend([
            ("current", FORECAST_CURRENT_FIELDS.to_owned()),
            ("hourly", FORECAST_HOURLY_FIELDS.to_owned()),
            ("temperature_unit", "celsius".to_owned()),
            ("wind_speed_unit", "kmh".to_owned()),
            ("precipitation_unit", "mm".to_owned()),
        ]);

        let response: ForecastResponse = self
            .get_json(service_names::OPEN_METEO_FORECAST, &url, &query)
            .await?;
        response.into_snapshot()
    }

    async fn air_quality(&self, location: &Location) -> ProviderResult<AirQualitySnapshot> {
        let url = format!("{}/air-quality", self.config.air_quality_base_url);
        let mut query = coordinate_query(location);
        query.extend([
            ("current", AIR_QUALITY_FIELDS.to_owned()),
            ("hourly", AIR_QUALITY_FIELDS.to_owned()),
        ]);

        let response: AirQualityResponse = self
            .get_json(service_names::OPEN_METEO_AIR_QUALITY, &url, &query)
            .await?;
        response.into_snapshot()
    }
}
