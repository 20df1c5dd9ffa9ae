// ABOUTME: Integration tests for the formatters module
// ABOUTME: Tests unit conversion, advisory indicators, and text and JSON dashboard output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chrono::{TimeZone, Utc};
use helpers::fixtures::{air_quality_everywhere, forecast_at_1420, lyon};
use serde_json::Value;
use trailcast::dashboard::{compose, Dashboard};
use trailcast::formatters::text::{precipitation, speed, temperature};
use trailcast::formatters::{
    indicator, render_dashboard, render_locations, OutputFormat, RenderOptions, Tone,
};
use trailcast::models::{Activity, AdvisoryLevel, UnitSystem};

fn dashboard(activity: Activity, with_air_quality: bool) -> Dashboard {
    let air_quality = air_quality_everywhere(Some(42), 42);
    compose(
        lyon(),
        activity,
        forecast_at_1420(),
        with_air_quality.then_some(&air_quality),
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 21, 0).unwrap(),
    )
}

/// Dashboard whose later hours turn stormy for cyclists
fn stormy_dashboard() -> Dashboard {
    let mut forecast = forecast_at_1420();
    for point in forecast.hourly.iter_mut().skip(18) {
        point.temperature_celsius = 35.0;
        point.wind_speed_kmh = 45.0;
        point.precipitation_mm = 4.0;
    }
    compose(
        lyon(),
        Activity::Cycling,
        forecast,
        None,
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 21, 0).unwrap(),
    )
}

const fn text(units: UnitSystem) -> RenderOptions {
    RenderOptions {
        format: OutputFormat::Text,
        units,
        color: false,
    }
}

const JSON: RenderOptions = RenderOptions {
    format: OutputFormat::Json,
    units: UnitSystem::Imperial,
    color: false,
};

#[test]
fn test_output_format_from_str() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("xml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[test]
fn test_display_unit_conversion() {
    assert_eq!(temperature(UnitSystem::Metric, 16.0), "16.0°C");
    assert_eq!(temperature(UnitSystem::Imperial, 16.0), "60.8°F");
    assert_eq!(temperature(UnitSystem::Imperial, -40.0), "-40.0°F");
    assert_eq!(speed(UnitSystem::Metric, 12.0), "12.0 km/h");
    assert_eq!(speed(UnitSystem::Imperial, 100.0), "62.1 mph");
    assert_eq!(precipitation(UnitSystem::Metric, 1.24), "1.2 mm");
    assert_eq!(precipitation(UnitSystem::Imperial, 25.4), "1.00 in");
}

#[test]
fn test_indicator_mapping() {
    let ideal = indicator(AdvisoryLevel::Ideal);
    let caution = indicator(AdvisoryLevel::Caution);
    let stay_in = indicator(AdvisoryLevel::NotRecommended);

    assert_eq!(ideal.tone, Tone::Positive);
    assert_eq!(caution.tone, Tone::Warning);
    assert_eq!(stay_in.tone, Tone::Negative);
    assert_eq!(ideal.tone.color_name(), "green");
    assert_eq!(caution.tone.color_name(), "yellow");
    assert_eq!(stay_in.tone.color_name(), "red");

    assert_eq!(ideal.label, "Ideal");
    assert_eq!(caution.label, "Caution");
    assert_eq!(stay_in.label, "Not recommended");
}

#[test]
fn test_indicator_paint_only_colors_when_asked() {
    let caution = indicator(AdvisoryLevel::Caution);
    assert_eq!(caution.paint(false), "▲ Caution");

    let painted = caution.paint(true);
    assert!(painted.starts_with("\x1b[33m"));
    assert!(painted.ends_with("\x1b[0m"));
    assert!(painted.contains("▲ Caution"));
}

#[test]
fn test_text_dashboard_metric() {
    let output = render_dashboard(&dashboard(Activity::Running, true), text(UnitSystem::Metric))
        .unwrap();

    assert!(output.starts_with("Lyon, Auvergne-Rhône-Alpes, France  (Europe/Paris)\n"));
    assert!(output.contains("Running · updated 2025-06-01 12:21 UTC"));
    assert!(output.contains("Now 14:20  Partly cloudy"));
    assert!(output.contains("Temperature  16.0°C (feels 15.2°C)"));
    assert!(output.contains("Wind         12.0 km/h"));
    assert!(output.contains("Precip       0.0 mm (40%)"));
    assert!(output.contains("Humidity     55%"));
    assert!(output.contains("Air quality  42"));
    assert!(output.contains("Advisory     ● Ideal (score 0)"));
    assert!(output.contains("Next 12 hours"));
    assert!(output.contains("Best window: Sun 15:00 (Ideal, score 0)"));
    assert!(!output.contains("Air quality unavailable"));
    assert!(!output.contains('\x1b'));
}

#[test]
fn test_text_dashboard_imperial() {
    let output = render_dashboard(
        &dashboard(Activity::Running, true),
        text(UnitSystem::Imperial),
    )
    .unwrap();

    assert!(output.contains("Temperature  60.8°F"));
    assert!(output.contains("7.5 mph"));
    assert!(output.contains("0.00 in"));
    assert!(!output.contains("km/h"));
}

#[test]
fn test_text_dashboard_marks_best_window_and_missing_air_quality() {
    let output = render_dashboard(&stormy_dashboard(), text(UnitSystem::Metric)).unwrap();

    assert!(output.contains("✖ Not recommended"));
    assert!(output.contains("Air quality  n/a"));
    assert!(output.contains("air -"));
    assert!(output.contains("Air quality unavailable; advisories exclude AQI."));
    assert_eq!(output.matches(" *\n").count(), 1);
}

#[test]
fn test_json_dashboard_keeps_metric_values() {
    let output = render_dashboard(&dashboard(Activity::Running, true), JSON).unwrap();
    let document: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(document["units"], "imperial");
    let dashboard = &document["dashboard"];
    assert_eq!(dashboard["activity"], "running");
    assert_eq!(dashboard["location"]["name"], "Lyon");
    assert_eq!(dashboard["current"]["assessment"]["level"], "ideal");
    assert_eq!(dashboard["current"]["conditions"]["temperature_celsius"], 16.0);
    assert_eq!(dashboard["outlook"].as_array().unwrap().len(), 12);
    assert_eq!(dashboard["best_window"], 0);
    assert_eq!(dashboard["air_quality_available"], true);
}

#[test]
fn test_json_dashboard_uses_kebab_case_levels() {
    let output = render_dashboard(&stormy_dashboard(), JSON).unwrap();
    let document: Value = serde_json::from_str(&output).unwrap();

    let levels: Vec<_> = document["dashboard"]["outlook"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| slot["assessment"]["level"].as_str().unwrap().to_owned())
        .collect();
    assert!(levels.iter().any(|level| level == "not-recommended"));
    assert_eq!(levels[0], "ideal");
    assert_eq!(
        document["dashboard"]["current"]["assessment"]["factors"]["air_quality"],
        Value::Null
    );
}

#[test]
fn test_render_locations() {
    let mut unnamed = lyon();
    unnamed.timezone = None;

    let listed = render_locations("lyon", &[lyon(), unnamed], text(UnitSystem::Metric)).unwrap();
    assert!(listed.starts_with(" 1. Lyon, Auvergne-Rhône-Alpes, France  (45.7485, 4.8467)  Europe/Paris\n"));
    assert!(listed.contains(" 2. Lyon"));

    let empty = render_locations("atlantis", &[], text(UnitSystem::Metric)).unwrap();
    assert_eq!(empty, "No locations match 'atlantis'.\n");

    let json = render_locations("lyon", &[lyon()], JSON).unwrap();
    let document: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(document["query"], "lyon");
    assert_eq!(document["results"][0]["timezone"], "Europe/Paris");
}
