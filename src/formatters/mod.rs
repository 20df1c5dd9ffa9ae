// ABOUTME: Output format abstraction for rendering dashboards and search results
// ABOUTME: Supports an aligned text table (optionally colored) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: aligned terminal table in the chosen display units, with
//!   optional ANSI colors for advisory levels
//! - **JSON**: serde serialization of the dashboard plus the display unit
//!   system; values stay in canonical metric units

/// Advisory level to indicator mapping
pub mod indicator;
/// Plain-text renderer
pub mod text;

pub use indicator::{indicator, Indicator, Tone};

use crate::dashboard::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::models::{Location, UnitSystem};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// Rendering options shared by all renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,
    /// Display unit system
    pub units: UnitSystem,
    /// Emit ANSI colors (text only)
    pub color: bool,
}

#[derive(Serialize)]
struct DashboardDocument<'a> {
    units: UnitSystem,
    dashboard: &'a Dashboard,
}

#[derive(Serialize)]
struct SearchDocument<'a> {
    query: &'a str,
    results: &'a [Location],
}

/// Render a dashboard in the requested format
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_dashboard(dashboard: &Dashboard, options: RenderOptions) -> AppResult<String> {
    match options.format {
        OutputFormat::Text => Ok(text::render_dashboard(
            dashboard,
            options.units,
            options.color,
        )),
        OutputFormat::Json => to_json(&DashboardDocument {
            units: options.units,
            dashboard,
        }),
    }
}

/// Render geocoding matches in the requested format
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn render_locations(
    query: &str,
    locations: &[Location],
    options: RenderOptions,
) -> AppResult<String> {
    match options.format {
        OutputFormat::Text => Ok(text::render_locations(query, locations)),
        OutputFormat::Json => to_json(&SearchDocument {
            query,
            results: locations,
        }),
    }
}

/// Pretty JSON for any serializable value
///
/// # Errors
///
/// Returns a serialization error if encoding fails
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(format!("JSON serialization failed: {e}")))
}
