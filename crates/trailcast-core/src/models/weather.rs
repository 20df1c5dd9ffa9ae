// ABOUTME: Forecast and air-quality snapshot models produced by weather providers
// ABOUTME: Current conditions, hourly points, WMO weather codes, and Reading construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use super::{Activity, Reading};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// WMO weather interpretation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u8);

impl WeatherCode {
    /// Short human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 | 48 => "Fog",
            51 | 53 | 55 => "Drizzle",
            56 | 57 => "Freezing drizzle",
            61 => "Light rain",
            63 => "Rain",
            65 => "Heavy rain",
            66 | 67 => "Freezing rain",
            71 | 73 | 75 => "Snow",
            77 => "Snow grains",
            80..=82 => "Rain showers",
            85 | 86 => "Snow showers",
            95 => "Thunderstorm",
            96 | 99 => "Thunderstorm with hail",
            _ => "Unknown",
        }
    }

    /// Description for an optional code
    #[must_use]
    pub const fn describe(code: Option<Self>) -> &'static str {
        match code {
            Some(code) => code.description(),
            None => "Unknown",
        }
    }
}

/// Conditions at the observation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Local observation time
    pub time: NaiveDateTime,
    /// Air temperature (°C)
    pub temperature_celsius: f64,
    /// Apparent ("feels like") temperature (°C)
    pub apparent_temperature_celsius: Option<f64>,
    /// Relative humidity (%)
    pub relative_humidity: Option<f64>,
    /// Wind speed at 10 m (km/h)
    pub wind_speed_kmh: f64,
    /// Precipitation over the preceding period (mm)
    pub precipitation_mm: f64,
    /// Precipitation probability (0-100) of the forecast hour containing `time`
    pub precipitation_probability: f64,
    /// WMO weather code, when reported
    pub weather_code: Option<WeatherCode>,
    /// Daylight flag
    pub is_day: bool,
}

impl CurrentConditions {
    /// Evaluator input for the current slot
    #[must_use]
    pub const fn reading(&self, activity: Activity, air_quality_index: Option<u32>) -> Reading {
        Reading::new(
            activity,
            self.temperature_celsius,
            self.wind_speed_kmh,
            self.precipitation_mm,
            self.precipitation_probability,
        )
        .with_air_quality(air_quality_index)
    }

    /// Start of the hour containing the observation time
    #[must_use]
    pub fn hour(&self) -> NaiveDateTime {
        truncate_to_hour(self.time)
    }
}

/// One hourly forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Local start time of the hour
    pub time: NaiveDateTime,
    /// Air temperature (°C)
    pub temperature_celsius: f64,
    /// Wind speed at 10 m (km/h)
    pub wind_speed_kmh: f64,
    /// Precipitation during the hour (mm)
    pub precipitation_mm: f64,
    /// Precipitation probability (0-100)
    pub precipitation_probability: f64,
    /// WMO weather code, when reported
    pub weather_code: Option<WeatherCode>,
}

impl HourlyPoint {
    /// Evaluator input for this hour
    #[must_use]
    pub const fn reading(&self, activity: Activity, air_quality_index: Option<u32>) -> Reading {
        Reading::new(
            activity,
            self.temperature_celsius,
            self.wind_speed_kmh,
            self.precipitation_mm,
            self.precipitation_probability,
        )
        .with_air_quality(air_quality_index)
    }
}

/// Forecast returned by a provider: current conditions plus hourly points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    /// IANA timezone the local times are expressed in
    pub timezone: Option<String>,
    /// Conditions at the observation time
    pub current: CurrentConditions,
    /// Hourly points in ascending time order
    pub hourly: Vec<HourlyPoint>,
}

impl ForecastSnapshot {
    /// Hourly points strictly after the hour containing the observation time
    pub fn upcoming(&self) -> impl Iterator<Item = &HourlyPoint> {
        let current_hour = self.current.hour();
        self.hourly.iter().filter(move |point| point.time > current_hour)
    }

    /// Hourly point covering the observation time, if present
    #[must_use]
    pub fn current_hour_point(&self) -> Option<&HourlyPoint> {
        let current_hour = self.current.hour();
        self.hourly.iter().find(|point| point.time == current_hour)
    }
}

/// Air-quality data returned by a provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualitySnapshot {
    /// US AQI at the observation time
    pub current_us_aqi: Option<u32>,
    /// Hourly US AQI keyed by local hour; hours without data are absent
    pub hourly_us_aqi: BTreeMap<NaiveDateTime, u32>,
}

impl AirQualitySnapshot {
    /// US AQI for a given local hour
    #[must_use]
    pub fn at(&self, time: NaiveDateTime) -> Option<u32> {
        self.hourly_us_aqi.get(&truncate_to_hour(time)).copied()
    }

    /// Current AQI, falling back to the hourly value for the given time
    #[must_use]
    pub fn current_or_hourly(&self, time: NaiveDateTime) -> Option<u32> {
        self.current_us_aqi.or_else(|| self.at(time))
    }
}

fn truncate_to_hour(time: NaiveDateTime) -> NaiveDateTime {
    time.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap_or_default()
    }

    #[test]
    fn test_weather_code_descriptions() {
        assert_eq!(WeatherCode(0).description(), "Clear sky");
        assert_eq!(WeatherCode(81).description(), "Rain showers");
        assert_eq!(WeatherCode(99).description(), "Thunderstorm with hail");
        assert_eq!(WeatherCode(42).description(), "Unknown");
    }

    #[test]
    fn test_air_quality_lookup_truncates_to_hour() {
        let mut snapshot = AirQualitySnapshot::default();
        snapshot.hourly_us_aqi.insert(at(14, 0), 61);
        assert_eq!(snapshot.at(at(14, 45)), Some(61));
        assert_eq!(snapshot.at(at(15, 0)), None);
        assert_eq!(snapshot.current_or_hourly(at(14, 15)), Some(61));

        snapshot.current_us_aqi = Some(40);
        assert_eq!(snapshot.current_or_hourly(at(14, 15)), Some(40));
    }
}
