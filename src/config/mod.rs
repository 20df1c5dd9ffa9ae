// ABOUTME: Configuration module for environment-driven application settings
// ABOUTME: Re-exports the typed configuration loaded from TRAILCAST_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Configuration for Trailcast
//!
//! Configuration is environment-only; there are no config files. User-level
//! choices (saved location, units, activity) live in the preferences cache and
//! override these defaults.

/// Environment configuration
pub mod environment;

pub use crate::providers::HttpClientConfig;
pub use environment::AppConfig;
