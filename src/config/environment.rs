// ABOUTME: Environment configuration for upstream endpoints, HTTP timeouts, and defaults
// ABOUTME: Parses TRAILCAST_* variables into a typed AppConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `TRAILCAST_FORECAST_BASE_URL` | `https://api.open-meteo.com/v1` |
//! | `TRAILCAST_GEOCODING_BASE_URL` | `https://geocoding-api.open-meteo.com/v1` |
//! | `TRAILCAST_AIR_QUALITY_BASE_URL` | `https://air-quality-api.open-meteo.com/v1` |
//! | `TRAILCAST_HTTP_TIMEOUT_SECS` | `30` |
//! | `TRAILCAST_HTTP_CONNECT_TIMEOUT_SECS` | `10` |
//! | `TRAILCAST_REFRESH_MINUTES` | `10` (1 to 1440) |
//! | `TRAILCAST_PREFERENCES_PATH` | platform config dir |
//! | `TRAILCAST_UNITS` | `metric` |
//! | `TRAILCAST_ACTIVITY` | `running` |
//!
//! Malformed numbers and URLs are errors. Unknown unit or activity names fall
//! back to the default with a warning.

use crate::constants::{api, defaults, env_config, limits};
use crate::errors::{AppError, AppResult};
use crate::models::{Activity, UnitSystem};
use crate::providers::{HttpClientConfig, OpenMeteoConfig};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};
use url::Url;

/// Application configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Open-Meteo endpoint base URLs
    pub open_meteo: OpenMeteoConfig,
    /// HTTP client timeouts
    pub http: HttpClientConfig,
    /// Watch-mode refresh interval in minutes
    pub refresh_minutes: u64,
    /// Preferences file override
    pub preferences_path: Option<PathBuf>,
    /// Default display units
    pub units: UnitSystem,
    /// Default activity
    pub activity: Activity,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            open_meteo: OpenMeteoConfig::default(),
            http: HttpClientConfig::default(),
            refresh_minutes: defaults::REFRESH_MINUTES,
            preferences_path: None,
            units: UnitSystem::default(),
            activity: Activity::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config-invalid error if a base URL does not parse or a
    /// numeric setting is malformed or zero
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            open_meteo: OpenMeteoConfig {
                forecast_base_url: base_url_from_env(
                    env_config::FORECAST_BASE_URL,
                    api::OPEN_METEO_FORECAST_BASE,
                )?,
                geocoding_base_url: base_url_from_env(
                    env_config::GEOCODING_BASE_URL,
                    api::OPEN_METEO_GEOCODING_BASE,
                )?,
                air_quality_base_url: base_url_from_env(
                    env_config::AIR_QUALITY_BASE_URL,
                    api::OPEN_METEO_AIR_QUALITY_BASE,
                )?,
            },
            http: HttpClientConfig {
                timeout_secs: positive_from_env(
                    env_config::HTTP_TIMEOUT_SECS,
                    defaults::HTTP_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: positive_from_env(
                    env_config::HTTP_CONNECT_TIMEOUT_SECS,
                    defaults::HTTP_CONNECT_TIMEOUT_SECS,
                )?,
            },
            refresh_minutes: refresh_minutes_from_env()?,
            preferences_path: non_empty_var(env_config::PREFERENCES_PATH).map(PathBuf::from),
            units: enum_from_env(env_config::UNITS),
            activity: enum_from_env(env_config::ACTIVITY),
        };

        debug!(
            forecast_base = %config.open_meteo.forecast_base_url,
            timeout_secs = config.http.timeout_secs,
            refresh_minutes = config.refresh_minutes,
            units = %config.units,
            activity = %config.activity,
            "Configuration loaded from environment"
        );

        Ok(config)
    }
}

/// Environment variable value, ignoring empty strings
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn base_url_from_env(key: &str, default: &str) -> AppResult<String> {
    let Some(raw) = non_empty_var(key) else {
        return Ok(default.to_owned());
    };

    let parsed = Url::parse(&raw)
        .map_err(|e| AppError::config_invalid(key, &raw, e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(
            key,
            &raw,
            "scheme must be http or https",
        ));
    }

    Ok(raw.trim_end_matches('/').to_owned())
}

fn positive_from_env(key: &str, default: u64) -> AppResult<u64> {
    let Some(raw) = non_empty_var(key) else {
        return Ok(default);
    };

    match raw.parse::<u64>() {
        Ok(0) => Err(AppError::config_invalid(key, &raw, "must be at least 1")),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::config_invalid(key, &raw, e.to_string())),
    }
}

fn refresh_minutes_from_env() -> AppResult<u64> {
    let minutes = positive_from_env(env_config::REFRESH_MINUTES, defaults::REFRESH_MINUTES)?;
    if minutes > limits::MAX_REFRESH_MINUTES {
        return Err(AppError::config_invalid(
            env_config::REFRESH_MINUTES,
            &minutes.to_string(),
            format!("must be at most {}", limits::MAX_REFRESH_MINUTES),
        ));
    }
    Ok(minutes)
}

fn enum_from_env<T>(key: &str) -> T
where
    T: FromStr + Default,
{
    let Some(raw) = non_empty_var(key) else {
        return T::default();
    };

    raw.parse().unwrap_or_else(|_| {
        warn!(key, value = %raw, "Unrecognized value, using default");
        T::default()
    })
}
