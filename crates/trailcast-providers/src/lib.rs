// ABOUTME: Weather data provider implementations for the Trailcast dashboard
// ABOUTME: Core provider trait, shared HTTP client, and the Open-Meteo provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![deny(unsafe_code)]

//! Weather data provider implementations and core abstractions.
//!
//! Providers turn upstream HTTP APIs into the snapshot models of
//! `trailcast-core`: temperatures in Celsius, wind in km/h, precipitation in
//! millimetres, and US AQI as an optional integer.

// Re-export trailcast-core modules so provider code can use `crate::errors::*`
pub use trailcast_core::errors;
pub use trailcast_core::models;

/// Shared HTTP client for provider API calls
pub mod http_client;
/// Open-Meteo forecast, geocoding, and air-quality provider
pub mod open_meteo;
/// Core provider trait
pub mod provider;

pub use http_client::{initialize_shared_client, shared_client, HttpClientConfig};
pub use open_meteo::{OpenMeteoConfig, OpenMeteoProvider};
pub use provider::WeatherProvider;
pub use trailcast_core::errors::provider::{ProviderError, ProviderResult};
