// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates defaults, overrides, malformed values, and enum fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use trailcast::config::AppConfig;
use trailcast::constants::env_config;
use trailcast::errors::ErrorCode;
use trailcast::models::{Activity, UnitSystem};

const ALL_KEYS: [&str; 9] = [
    env_config::FORECAST_BASE_URL,
    env_config::GEOCODING_BASE_URL,
    env_config::AIR_QUALITY_BASE_URL,
    env_config::HTTP_TIMEOUT_SECS,
    env_config::HTTP_CONNECT_TIMEOUT_SECS,
    env_config::REFRESH_MINUTES,
    env_config::PREFERENCES_PATH,
    env_config::UNITS,
    env_config::ACTIVITY,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.refresh_minutes, 10);
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.units, UnitSystem::Metric);
    assert_eq!(config.activity, Activity::Running);
    assert_eq!(config.preferences_path, None);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(env_config::FORECAST_BASE_URL, "http://127.0.0.1:8080/v1/");
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "5");
    env::set_var(env_config::REFRESH_MINUTES, " 3 ");
    env::set_var(env_config::PREFERENCES_PATH, "/tmp/trailcast-prefs.json");
    env::set_var(env_config::UNITS, "Imperial");
    env::set_var(env_config::ACTIVITY, "cycling");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.open_meteo.forecast_base_url, "http://127.0.0.1:8080/v1");
    assert_eq!(config.http.timeout_secs, 5);
    assert_eq!(config.refresh_minutes, 3);
    assert_eq!(
        config.preferences_path,
        Some(PathBuf::from("/tmp/trailcast-prefs.json"))
    );
    assert_eq!(config.units, UnitSystem::Imperial);
    assert_eq!(config.activity, Activity::Cycling);
}

#[test]
#[serial]
fn test_empty_values_are_ignored() {
    clear_env();
    env::set_var(env_config::REFRESH_MINUTES, "");
    env::set_var(env_config::PREFERENCES_PATH, "   ");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.refresh_minutes, 10);
    assert_eq!(config.preferences_path, None);
}

#[test]
#[serial]
fn test_malformed_number_is_config_error() {
    clear_env();
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "soon");

    let error = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains(env_config::HTTP_TIMEOUT_SECS));
}

#[test]
#[serial]
fn test_zero_refresh_interval_is_config_error() {
    clear_env();
    env::set_var(env_config::REFRESH_MINUTES, "0");

    let error = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_refresh_interval_above_one_day_is_config_error() {
    clear_env();
    env::set_var(env_config::REFRESH_MINUTES, "1440");
    let one_day = AppConfig::from_env().unwrap();

    env::set_var(env_config::REFRESH_MINUTES, "1844674407370955161");
    let error = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(one_day.refresh_minutes, 1440);
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("at most 1440"));
}

#[test]
#[serial]
fn test_bad_base_url_is_config_error() {
    clear_env();
    env::set_var(env_config::GEOCODING_BASE_URL, "not a url");
    let unparseable = AppConfig::from_env().unwrap_err();

    env::set_var(env_config::GEOCODING_BASE_URL, "ftp://example.com/v1");
    let wrong_scheme = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(unparseable.code, ErrorCode::ConfigInvalid);
    assert_eq!(wrong_scheme.code, ErrorCode::ConfigInvalid);
    assert!(wrong_scheme.message.contains("http or https"));
}

#[test]
#[serial]
fn test_unknown_enum_values_fall_back_to_defaults() {
    clear_env();
    env::set_var(env_config::UNITS, "furlongs");
    env::set_var(env_config::ACTIVITY, "kayaking");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.units, UnitSystem::Metric);
    assert_eq!(config.activity, Activity::Running);
}

#[test]
fn test_unit_and_activity_parsing() {
    assert_eq!("US".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
    assert_eq!("si".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
    assert!("?".parse::<UnitSystem>().is_err());
    assert_eq!(" Cycling ".parse::<Activity>().unwrap(), Activity::Cycling);
    assert_eq!("bike".parse::<Activity>().unwrap(), Activity::Cycling);
    assert!("swim".parse::<Activity>().is_err());
}
