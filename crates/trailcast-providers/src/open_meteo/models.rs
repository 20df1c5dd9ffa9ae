// ABOUTME: Open-Meteo API response models and conversion into snapshot types
// ABOUTME: Forecast, geocoding, and air-quality payloads with null-tolerant hourly arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Open-Meteo response payloads
//!
//! Hourly data arrives as parallel arrays that may contain `null`. Hours
//! missing temperature or wind are dropped from the forecast; missing
//! precipitation or probability counts as zero. Missing AQI stays absent.

use crate::errors::provider::{ProviderError, ProviderResult};
use crate::models::{
    AirQualitySnapshot, CurrentConditions, ForecastSnapshot, HourlyPoint, Location, WeatherCode,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::BTreeMap;
use trailcast_core::constants::api::OPEN_METEO_TIME_FORMAT;
use trailcast_core::constants::service_names::{OPEN_METEO_AIR_QUALITY, OPEN_METEO_FORECAST};

// ============================================================================
// Forecast
// ============================================================================

/// `/v1/forecast` response
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// IANA timezone resolved by `timezone=auto`
    #[serde(default)]
    pub timezone: Option<String>,
    /// Current conditions block
    pub current: ForecastCurrent,
    /// Hourly parallel arrays
    pub hourly: ForecastHourly,
}

/// `current` block of the forecast response
#[derive(Debug, Deserialize)]
pub struct ForecastCurrent {
    /// Local observation time
    pub time: String,
    /// Air temperature at 2 m (°C)
    pub temperature_2m: f64,
    /// Apparent temperature (°C)
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    /// Relative humidity at 2 m (%)
    #[serde(default)]
    pub relative_humidity_2m: Option<f64>,
    /// Precipitation (mm)
    #[serde(default)]
    pub precipitation: Option<f64>,
    /// WMO weather code
    #[serde(default)]
    pub weather_code: Option<u8>,
    /// Wind speed at 10 m (km/h)
    pub wind_speed_10m: f64,
    /// 1 during daylight, 0 at night
    #[serde(default)]
    pub is_day: Option<u8>,
}

/// `hourly` block of the forecast response
#[derive(Debug, Deserialize)]
pub struct ForecastHourly {
    /// Local hour start times
    pub time: Vec<String>,
    /// Air temperature at 2 m (°C)
    pub temperature_2m: Vec<Option<f64>>,
    /// Precipitation (mm)
    pub precipitation: Vec<Option<f64>>,
    /// Precipitation probability (%)
    pub precipitation_probability: Vec<Option<f64>>,
    /// WMO weather code
    pub weather_code: Vec<Option<u8>>,
    /// Wind speed at 10 m (km/h)
    pub wind_speed_10m: Vec<Option<f64>>,
}

impl ForecastResponse {
    /// Convert into a forecast snapshot
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidResponse` if a timestamp cannot be parsed
    /// or the hourly arrays differ in length
    pub fn into_snapshot(self) -> ProviderResult<ForecastSnapshot> {
        let hourly = self.hourly.into_points()?;
        let time = parse_time(OPEN_METEO_FORECAST, &self.current.time)?;

        let mut current = CurrentConditions {
            time,
            temperature_celsius: self.current.temperature_2m,
            apparent_temperature_celsius: self.current.apparent_temperature,
            relative_humidity: self.current.relative_humidity_2m,
            wind_speed_kmh: self.current.wind_speed_10m,
            precipitation_mm: self.current.precipitation.unwrap_or(0.0),
            precipitation_probability: 0.0,
            weather_code: self.current.weather_code.map(WeatherCode),
            is_day: self.current.is_day.is_none_or(|flag| flag != 0),
        };

        let mut snapshot = ForecastSnapshot {
            timezone: self.timezone,
            current: current.clone(),
            hourly,
        };

        // The current block carries no probability; borrow it from its hour
        if let Some(point) = snapshot.current_hour_point() {
            current.precipitation_probability = point.precipitation_probability;
            snapshot.current = current;
        }

        Ok(snapshot)
    }
}

impl ForecastHourly {
    fn into_points(self) -> ProviderResult<Vec<HourlyPoint>> {
        let len = self.time.len();
        let lengths = [
            self.temperature_2m.len(),
            self.precipitation.len(),
            self.precipitation_probability.len(),
            self.weather_code.len(),
            self.wind_speed_10m.len(),
        ];
        if lengths.iter().any(|&other| other != len) {
            return Err(ProviderError::InvalidResponse {
                provider: OPEN_METEO_FORECAST.to_owned(),
                reason: format!("hourly arrays have mismatched lengths: time={len}, others={lengths:?}"),
            });
        }

        let mut points = Vec::with_capacity(len);
        for (index, raw_time) in self.time.iter().enumerate() {
            let (Some(temperature), Some(wind)) =
                (self.temperature_2m[index], self.wind_speed_10m[index])
            else {
                continue;
            };
            points.push(HourlyPoint {
                time: parse_time(OPEN_METEO_FORECAST, raw_time)?,
                temperature_celsius: temperature,
                wind_speed_kmh: wind,
                precipitation_mm: self.precipitation[index].unwrap_or(0.0),
                precipitation_probability: self.precipitation_probability[index].unwrap_or(0.0),
                weather_code: self.weather_code[index].map(WeatherCode),
            });
        }
        points.sort_by_key(|point| point.time);
        Ok(points)
    }
}

// ============================================================================
// Air quality
// ============================================================================

/// `/v1/air-quality` response
#[derive(Debug, Deserialize)]
pub struct AirQualityResponse {
    /// Current block
    #[serde(default)]
    pub current: Option<AirQualityCurrent>,
    /// Hourly parallel arrays
    #[serde(default)]
    pub hourly: Option<AirQualityHourly>,
}

/// `current` block of the air-quality response
#[derive(Debug, Deserialize)]
pub struct AirQualityCurrent {
    /// US AQI
    #[serde(default)]
    pub us_aqi: Option<f64>,
}

/// `hourly` block of the air-quality response
#[derive(Debug, Deserialize)]
pub struct AirQualityHourly {
    /// Local hour start times
    pub time: Vec<String>,
    /// US AQI
    pub us_aqi: Vec<Option<f64>>,
}

impl AirQualityResponse {
    /// Convert into an air-quality snapshot
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidResponse` if a timestamp cannot be parsed
    /// or the hourly arrays differ in length
    pub fn into_snapshot(self) -> ProviderResult<AirQualitySnapshot> {
        let current_us_aqi = self
            .current
            .and_then(|current| current.us_aqi)
            .and_then(aqi_from_raw);

        let mut hourly_us_aqi = BTreeMap::new();
        if let Some(hourly) = self.hourly {
            if hourly.time.len() != hourly.us_aqi.len() {
                return Err(ProviderError::InvalidResponse {
                    provider: OPEN_METEO_AIR_QUALITY.to_owned(),
                    reason: format!(
                        "hourly arrays have mismatched lengths: time={}, us_aqi={}",
                        hourly.time.len(),
                        hourly.us_aqi.len()
                    ),
                });
            }
            for (raw_time, value) in hourly.time.iter().zip(hourly.us_aqi) {
                if let Some(aqi) = value.and_then(aqi_from_raw) {
                    hourly_us_aqi.insert(parse_time(OPEN_METEO_AIR_QUALITY, raw_time)?, aqi);
                }
            }
        }

        Ok(AirQualitySnapshot {
            current_us_aqi,
            hourly_us_aqi,
        })
    }
}

/// AQI arrives as a JSON number; negative or non-finite values are dropped
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn aqi_from_raw(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as u32)
}

// ============================================================================
// Geocoding
// ============================================================================

/// `/v1/search` response
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Matches; absent when nothing matched
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

/// One geocoding match
#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    /// Place name
    pub name: String,
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Country name
    #[serde(default)]
    pub country: Option<String>,
    /// First-level administrative region
    #[serde(default)]
    pub admin1: Option<String>,
    /// IANA timezone
    #[serde(default)]
    pub timezone: Option<String>,
}

impl GeocodingResponse {
    /// Matches as locations, best first
    #[must_use]
    pub fn into_locations(self) -> Vec<Location> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .map(|result| Location {
                name: result.name,
                latitude: result.latitude,
                longitude: result.longitude,
                country: result.country,
                admin_region: result.admin1,
                timezone: result.timezone,
            })
            .collect()
    }
}

fn parse_time(provider: &str, raw: &str) -> ProviderResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, OPEN_METEO_TIME_FORMAT).map_err(|e| {
        ProviderError::InvalidResponse {
            provider: provider.to_owned(),
            reason: format!("unparseable time '{raw}': {e}"),
        }
    })
}
