// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for endpoints, defaults, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Unit conversion and measurement constants
pub mod units;

/// Project identity
pub mod project {
    /// Product name used in logs and the user agent
    pub const PRODUCT_NAME: &str = "trailcast";

    /// User agent sent with every upstream request
    #[must_use]
    pub fn user_agent() -> String {
        format!("{PRODUCT_NAME}/{}", env!("CARGO_PKG_VERSION"))
    }
}

/// Service names for structured logging
pub mod service_names {
    /// Dashboard CLI service name
    pub const TRAILCAST: &str = "trailcast";
    /// Open-Meteo provider
    pub const OPEN_METEO: &str = "Open-Meteo";
    /// Open-Meteo forecast endpoint family
    pub const OPEN_METEO_FORECAST: &str = "Open-Meteo forecast";
    /// Open-Meteo geocoding endpoint family
    pub const OPEN_METEO_GEOCODING: &str = "Open-Meteo geocoding";
    /// Open-Meteo air-quality endpoint family
    pub const OPEN_METEO_AIR_QUALITY: &str = "Open-Meteo air quality";
}

/// Upstream API endpoints
pub mod api {
    /// Open-Meteo forecast API base URL
    pub const OPEN_METEO_FORECAST_BASE: &str = "https://api.open-meteo.com/v1";
    /// Open-Meteo geocoding API base URL
    pub const OPEN_METEO_GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1";
    /// Open-Meteo air-quality API base URL
    pub const OPEN_METEO_AIR_QUALITY_BASE: &str = "https://air-quality-api.open-meteo.com/v1";
    /// Timestamp layout used by Open-Meteo for local times
    pub const OPEN_METEO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
}

/// Dashboard layout limits
pub mod limits {
    /// Number of hourly forecast points shown in the outlook
    pub const OUTLOOK_HOURS: usize = 12;
    /// Forecast days requested so a late-evening outlook still has 12 hours
    pub const FORECAST_DAYS: u8 = 2;
    /// Default number of geocoding matches returned by search
    pub const DEFAULT_SEARCH_RESULTS: u8 = 5;
    /// Maximum number of geocoding matches accepted by the API
    pub const MAX_SEARCH_RESULTS: u8 = 100;
    /// Shortest allowed refresh interval in minutes
    pub const MIN_REFRESH_MINUTES: u64 = 1;
    /// Longest allowed refresh interval in minutes (one day)
    pub const MAX_REFRESH_MINUTES: u64 = 24 * 60;
}

/// Built-in defaults
pub mod defaults {
    /// Default HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default refresh interval for watch mode in minutes
    pub const REFRESH_MINUTES: u64 = 10;
    /// Directory name under the platform config dir
    pub const CONFIG_DIR_NAME: &str = "trailcast";
    /// Preferences file name
    pub const PREFERENCES_FILE: &str = "preferences.json";
}

/// Environment variable names
pub mod env_config {
    /// Forecast API base URL override
    pub const FORECAST_BASE_URL: &str = "TRAILCAST_FORECAST_BASE_URL";
    /// Geocoding API base URL override
    pub const GEOCODING_BASE_URL: &str = "TRAILCAST_GEOCODING_BASE_URL";
    /// Air-quality API base URL override
    pub const AIR_QUALITY_BASE_URL: &str = "TRAILCAST_AIR_QUALITY_BASE_URL";
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "TRAILCAST_HTTP_TIMEOUT_SECS";
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "TRAILCAST_HTTP_CONNECT_TIMEOUT_SECS";
    /// Watch-mode refresh interval in minutes
    pub const REFRESH_MINUTES: &str = "TRAILCAST_REFRESH_MINUTES";
    /// Preferences file path override
    pub const PREFERENCES_PATH: &str = "TRAILCAST_PREFERENCES_PATH";
    /// Default display unit system
    pub const UNITS: &str = "TRAILCAST_UNITS";
    /// Default activity
    pub const ACTIVITY: &str = "TRAILCAST_ACTIVITY";
}
