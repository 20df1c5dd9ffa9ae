// ABOUTME: Plain-text dashboard renderer with display-unit conversion
// ABOUTME: Current conditions block, aligned 12-hour outlook table, and best-window hint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use super::indicator::indicator;
use crate::dashboard::Dashboard;
use crate::intelligence::SlotAssessment;
use crate::models::{Location, UnitSystem, WeatherCode};
use std::fmt::Write;

const OUTLOOK_TIME_FORMAT: &str = "%a %H:%M";

/// Render a dashboard as an aligned text block
#[must_use]
pub fn render_dashboard(dashboard: &Dashboard, units: UnitSystem, color: bool) -> String {
    let mut out = String::new();
    let conditions = &dashboard.current.conditions;
    let current = &dashboard.current.assessment;

    let _ = write!(out, "{}", dashboard.location.display_name());
    if let Some(timezone) = dashboard.timezone.as_deref() {
        let _ = write!(out, "  ({timezone})");
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "{} · updated {}",
        capitalize(dashboard.activity.as_str()),
        dashboard.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    out.push('\n');

    let _ = writeln!(
        out,
        "Now {}  {}",
        conditions.time.format("%H:%M"),
        WeatherCode::describe(conditions.weather_code)
    );
    let _ = write!(
        out,
        "  Temperature  {}",
        temperature(units, conditions.temperature_celsius)
    );
    if let Some(apparent) = conditions.apparent_temperature_celsius {
        let _ = write!(out, " (feels {})", temperature(units, apparent));
    }
    out.push('\n');
    let _ = writeln!(out, "  Wind         {}", speed(units, conditions.wind_speed_kmh));
    let _ = writeln!(
        out,
        "  Precip       {} ({:.0}%)",
        precipitation(units, conditions.precipitation_mm),
        conditions.precipitation_probability
    );
    if let Some(humidity) = conditions.relative_humidity {
        let _ = writeln!(out, "  Humidity     {humidity:.0}%");
    }
    let _ = writeln!(
        out,
        "  Air quality  {}",
        aqi(current.reading.air_quality_index)
    );
    let _ = writeln!(
        out,
        "  Advisory     {} (score {})",
        indicator(current.level).paint(color),
        current.score
    );
    let _ = writeln!(out, "  Factors      {}", factors(current));

    if dashboard.outlook.is_empty() {
        out.push_str("\nNo hourly forecast available.\n");
    } else {
        let _ = writeln!(out, "\nNext {} hours", dashboard.outlook.len());
        let _ = writeln!(
            out,
            "  {:<9}  {:>8}  {:>10}  {:>9}  {:>4}  {:>4}  Advisory",
            "Time", "Temp", "Wind", "Precip", "Prob", "AQI"
        );
        for (index, slot) in dashboard.outlook.iter().enumerate() {
            let marker = if dashboard.best_window == Some(index) {
                " *"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "  {:<9}  {:>8}  {:>10}  {:>9}  {:>3.0}%  {:>4}  {}{marker}",
                slot.point.time.format(OUTLOOK_TIME_FORMAT).to_string(),
                temperature(units, slot.point.temperature_celsius),
                speed(units, slot.point.wind_speed_kmh),
                precipitation(units, slot.point.precipitation_mm),
                slot.point.precipitation_probability,
                aqi(slot.assessment.reading.air_quality_index),
                indicator(slot.assessment.level).paint(color),
            );
        }
    }

    if let Some(best) = dashboard.best_slot() {
        let _ = writeln!(
            out,
            "\nBest window: {} ({}, score {})",
            best.point.time.format(OUTLOOK_TIME_FORMAT),
            best.assessment.level.label(),
            best.assessment.score
        );
    }

    if !dashboard.air_quality_available {
        out.push_str("\nAir quality unavailable; advisories exclude AQI.\n");
    }

    out
}

/// Render geocoding matches as a numbered list
#[must_use]
pub fn render_locations(query: &str, locations: &[Location]) -> String {
    if locations.is_empty() {
        return format!("No locations match '{query}'.\n");
    }

    let mut out = String::new();
    for (index, location) in locations.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {}  ({:.4}, {:.4}){}",
            index + 1,
            location.display_name(),
            location.latitude,
            location.longitude,
            location
                .timezone
                .as_deref()
                .map(|tz| format!("  {tz}"))
                .unwrap_or_default()
        );
    }
    out
}

/// Temperature in display units with symbol
#[must_use]
pub fn temperature(units: UnitSystem, celsius: f64) -> String {
    format!("{:.1}{}", units.temperature(celsius), units.temperature_unit())
}

/// Wind speed in display units with symbol
#[must_use]
pub fn speed(units: UnitSystem, kmh: f64) -> String {
    format!("{:.1} {}", units.speed(kmh), units.speed_unit())
}

/// Precipitation in display units with symbol
#[must_use]
pub fn precipitation(units: UnitSystem, mm: f64) -> String {
    format!(
        "{:.*} {}",
        units.precipitation_decimals(),
        units.precipitation(mm),
        units.precipitation_unit()
    )
}

fn aqi(value: Option<u32>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |index| index.to_string())
}

fn factors(assessment: &SlotAssessment) -> String {
    let scores = assessment.factors;
    let air = scores
        .air_quality
        .map_or_else(|| "-".to_owned(), |value| value.to_string());
    format!(
        "temp {} · wind {} · precip {} · air {air}",
        scores.temperature, scores.wind, scores.precipitation
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
