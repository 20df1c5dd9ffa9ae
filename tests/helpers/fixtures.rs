// ABOUTME: Forecast, air-quality, and location fixtures for integration tests
// ABOUTME: Builds deterministic hourly series around a fixed observation time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use trailcast::models::{
    AirQualitySnapshot, CurrentConditions, ForecastSnapshot, HourlyPoint, Location, WeatherCode,
};

/// 2025-06-01 at the given time
pub fn june_first(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap()
}

pub fn lyon() -> Location {
    Location {
        name: "Lyon".to_owned(),
        latitude: 45.748_46,
        longitude: 4.846_71,
        country: Some("France".to_owned()),
        admin_region: Some("Auvergne-Rhône-Alpes".to_owned()),
        timezone: Some("Europe/Paris".to_owned()),
    }
}

/// Mild, dry hour
pub fn mild_point(time: NaiveDateTime) -> HourlyPoint {
    HourlyPoint {
        time,
        temperature_celsius: 15.0,
        wind_speed_kmh: 10.0,
        precipitation_mm: 0.0,
        precipitation_probability: 10.0,
        weather_code: Some(WeatherCode(1)),
    }
}

/// Forecast observed at 14:20 with 48 mild hours starting at midnight
///
/// The 14:00 point carries a 40% precipitation probability so tests can
/// see it copied onto current conditions.
pub fn forecast_at_1420() -> ForecastSnapshot {
    let start = june_first(0, 0);
    let hourly = (0..48)
        .map(|offset| {
            let mut point = mild_point(start + Duration::hours(offset));
            if offset == 14 {
                point.precipitation_probability = 40.0;
            }
            point
        })
        .collect();

    ForecastSnapshot {
        timezone: Some("Europe/Paris".to_owned()),
        current: CurrentConditions {
            time: june_first(14, 20),
            temperature_celsius: 16.0,
            apparent_temperature_celsius: Some(15.2),
            relative_humidity: Some(55.0),
            wind_speed_kmh: 12.0,
            precipitation_mm: 0.0,
            precipitation_probability: 40.0,
            weather_code: Some(WeatherCode(2)),
            is_day: true,
        },
        hourly,
    }
}

/// Air quality with a current value and hourly values for every hour
pub fn air_quality_everywhere(current: Option<u32>, hourly: u32) -> AirQualitySnapshot {
    let start = june_first(0, 0);
    AirQualitySnapshot {
        current_us_aqi: current,
        hourly_us_aqi: (0..48)
            .map(|offset| (start + Duration::hours(offset), hourly))
            .collect::<BTreeMap<_, _>>(),
    }
}
