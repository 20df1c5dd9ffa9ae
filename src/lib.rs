// ABOUTME: Main library entry point for the Trailcast weather dashboard
// ABOUTME: Wires providers, the safety evaluator, rendering, preferences, and watch mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![deny(unsafe_code)]

//! # Trailcast
//!
//! A terminal weather dashboard for runners and cyclists. Trailcast fetches
//! forecast, geocoding and air-quality data from Open-Meteo and shows current
//! conditions plus a 12-hour outlook, each slot annotated with an outdoor
//! safety advisory (ideal / caution / not recommended).
//!
//! ## Architecture
//!
//! - **intelligence**: the pure safety evaluator (`trailcast-intelligence`)
//! - **providers**: `WeatherProvider` trait and the Open-Meteo client
//! - **dashboard**: fetch orchestration and dashboard composition
//! - **formatters**: text and JSON rendering with display units
//! - **preferences**: JSON cache of location, units, and activity
//! - **refresh**: periodic reload for watch mode
//! - **config** / **logging**: environment configuration and tracing setup

// Re-export core crate modules so callers can use `trailcast::errors::*`
pub use trailcast_core::{constants, errors, models};

/// Safety evaluator (re-exported from `trailcast-intelligence`)
pub use trailcast_intelligence as intelligence;

/// Weather data providers (re-exported from `trailcast-providers`)
pub use trailcast_providers as providers;

/// Environment configuration
pub mod config;

/// Dashboard composition and fetch orchestration
pub mod dashboard;

/// Output formats and renderers
pub mod formatters;

/// Logging configuration and tracing setup
pub mod logging;

/// User preference cache
pub mod preferences;

/// Watch-mode refresh loop
pub mod refresh;
