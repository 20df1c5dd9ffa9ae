// ABOUTME: Geocoded location model used for forecast and air-quality lookups
// ABOUTME: Holds coordinates plus the naming context returned by geocoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A named place with coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Place name (city, town, or a coordinate label)
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// First-level administrative region (state, province)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_region: Option<String>,
    /// IANA timezone name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Location {
    /// Location from raw coordinates, validated and labelled with them
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if either coordinate is out of range
    pub fn from_coordinates(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::invalid_input(format!(
                "Invalid coordinates: lat={latitude}, lon={longitude}"
            )));
        }
        Ok(Self {
            name: format!("{latitude:.4}, {longitude:.4}"),
            latitude,
            longitude,
            country: None,
            admin_region: None,
            timezone: None,
        })
    }

    /// "Name, Region, Country" with missing parts skipped
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(region) = self.admin_region.as_deref() {
            if region != self.name {
                parts.push(region);
            }
        }
        if let Some(country) = self.country.as_deref() {
            parts.push(country);
        }
        parts.join(", ")
    }
}
