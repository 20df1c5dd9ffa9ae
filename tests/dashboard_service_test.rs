// ABOUTME: Integration tests for dashboard loading against an in-process provider
// ABOUTME: Covers AQI degradation, forecast failure, location resolution, and composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chrono::{Duration, Utc};
use helpers::fixtures::{air_quality_everywhere, forecast_at_1420, june_first, lyon};
use helpers::mock_weather_provider::MockWeatherProvider;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use trailcast::dashboard::{compose, DashboardService};
use trailcast::errors::ErrorCode;
use trailcast::models::{Activity, AdvisoryLevel, AirQualitySnapshot};

fn service(provider: MockWeatherProvider) -> (DashboardService, Arc<MockWeatherProvider>) {
    let provider = Arc::new(provider);
    (DashboardService::new(provider.clone()), provider)
}

#[tokio::test]
async fn test_load_scores_current_and_outlook() {
    let (service, provider) = service(MockWeatherProvider::new(
        forecast_at_1420(),
        air_quality_everywhere(Some(42), 42),
    ));

    let dashboard = service.load(&lyon(), Activity::Running).await.unwrap();

    assert_eq!(provider.forecast_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.air_quality_calls.load(Ordering::SeqCst), 1);
    assert!(dashboard.air_quality_available);
    assert_eq!(dashboard.activity, Activity::Running);
    assert_eq!(dashboard.timezone.as_deref(), Some("Europe/Paris"));

    assert_eq!(dashboard.current.assessment.reading.air_quality_index, Some(42));
    assert_eq!(dashboard.current.assessment.score, 0);
    assert_eq!(dashboard.current_level(), AdvisoryLevel::Ideal);

    assert_eq!(dashboard.outlook.len(), 12);
    assert_eq!(dashboard.outlook[0].point.time, june_first(15, 0));
    assert_eq!(
        dashboard.outlook[11].point.time,
        june_first(0, 0) + Duration::hours(26)
    );
    assert!(dashboard
        .outlook
        .iter()
        .all(|slot| slot.assessment.reading.air_quality_index == Some(42)));
    assert_eq!(dashboard.best_window, Some(0));
}

#[tokio::test]
async fn test_air_quality_failure_degrades_to_absent_aqi() {
    let (service, provider) = service(MockWeatherProvider::without_air_quality(forecast_at_1420()));

    let dashboard = service.load(&lyon(), Activity::Running).await.unwrap();

    assert_eq!(provider.air_quality_calls.load(Ordering::SeqCst), 1);
    assert!(!dashboard.air_quality_available);
    assert_eq!(dashboard.current.assessment.reading.air_quality_index, None);
    assert_eq!(dashboard.current.assessment.factors.air_quality, None);
    assert!(dashboard
        .outlook
        .iter()
        .all(|slot| slot.assessment.reading.air_quality_index.is_none()));
    assert_eq!(dashboard.outlook.len(), 12);
    assert_eq!(dashboard.best_window, Some(0));
    assert!(
        (dashboard.current.conditions.precipitation_probability - 40.0).abs() < f64::EPSILON
    );
}

#[tokio::test]
async fn test_forecast_failure_fails_the_load() {
    let provider = MockWeatherProvider {
        air_quality: Some(air_quality_everywhere(Some(10), 10)),
        ..MockWeatherProvider::default()
    };
    let (service, _) = service(provider);

    let error = service.load(&lyon(), Activity::Cycling).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_resolve_location_takes_first_match() {
    let mut villeurbanne = lyon();
    villeurbanne.name = "Lyon-Villeurbanne".to_owned();
    let (service, _) = service(
        MockWeatherProvider::default().with_locations(vec![lyon(), villeurbanne]),
    );

    let location = service.resolve_location("  lyon ").await.unwrap();
    assert_eq!(location, lyon());

    let matches = service.search("lyon", 5).await.unwrap();
    assert_eq!(matches.len(), 2);
}

#[tokio::test]
async fn test_resolve_location_not_found() {
    let (service, _) = service(MockWeatherProvider::default().with_locations(vec![lyon()]));

    let error = service.resolve_location("Atlantis").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("Atlantis"));
}

#[tokio::test]
async fn test_empty_search_is_invalid_input() {
    let (service, _) = service(MockWeatherProvider::default());

    let error = service.search("   ", 5).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_compose_uses_hourly_aqi_when_current_missing() {
    let mut air_quality = air_quality_everywhere(None, 120);
    air_quality.hourly_us_aqi.insert(june_first(14, 0), 30);

    let dashboard = compose(
        lyon(),
        Activity::Running,
        forecast_at_1420(),
        Some(&air_quality),
        Utc::now(),
    );

    assert_eq!(dashboard.current.assessment.reading.air_quality_index, Some(30));
    assert_eq!(dashboard.current.assessment.score, 0);
    let first = &dashboard.outlook[0].assessment;
    assert_eq!(first.reading.air_quality_index, Some(120));
    assert_eq!(first.factors.air_quality, Some(2));
    assert_eq!(first.score, 2);
    assert_eq!(first.level, AdvisoryLevel::Ideal);
}

#[test]
fn test_compose_leaves_hours_without_aqi_unscored() {
    let air_quality = AirQualitySnapshot {
        current_us_aqi: Some(80),
        ..AirQualitySnapshot::default()
    };

    let dashboard = compose(
        lyon(),
        Activity::Cycling,
        forecast_at_1420(),
        Some(&air_quality),
        Utc::now(),
    );

    assert!(dashboard.air_quality_available);
    assert_eq!(dashboard.current.assessment.factors.air_quality, Some(1));
    assert!(dashboard
        .outlook
        .iter()
        .all(|slot| slot.assessment.factors.air_quality.is_none()));
}

#[test]
fn test_compose_best_window_picks_earliest_lowest_hour() {
    let mut forecast = forecast_at_1420();
    for point in &mut forecast.hourly {
        point.temperature_celsius = 32.0;
    }
    // 18:00 and 20:00 are the only ideal hours
    for hour in [18, 20] {
        let point = forecast
            .hourly
            .iter_mut()
            .find(|point| point.time == june_first(hour, 0))
            .unwrap();
        point.temperature_celsius = 14.0;
    }

    let dashboard = compose(lyon(), Activity::Running, forecast, None, Utc::now());

    assert_eq!(dashboard.best_window, Some(3));
    let best = dashboard.best_slot().unwrap();
    assert_eq!(best.point.time, june_first(18, 0));
    assert_eq!(best.assessment.score, 0);
    assert_eq!(dashboard.outlook[0].assessment.score, 2);
}

#[test]
fn test_compose_with_short_forecast() {
    let mut forecast = forecast_at_1420();
    forecast.hourly.truncate(15);

    let dashboard = compose(lyon(), Activity::Running, forecast, None, Utc::now());

    assert!(dashboard.outlook.is_empty());
    assert_eq!(dashboard.best_window, None);
    assert!(dashboard.best_slot().is_none());
}
