// ABOUTME: Dashboard service fetching forecast and air quality and scoring every slot
// ABOUTME: Tolerates air-quality failures by degrading to absent AQI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use super::{CurrentSlot, Dashboard, HourlySlot};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{evaluate_outlook, SlotAssessment};
use crate::models::{Activity, AirQualitySnapshot, ForecastSnapshot, Location};
use crate::providers::WeatherProvider;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Loads dashboards from a weather provider
#[derive(Clone)]
pub struct DashboardService {
    provider: Arc<dyn WeatherProvider>,
}

impl DashboardService {
    /// Create a service over a provider
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Geocoding matches for a place name
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an empty query, or the provider's
    /// error if the lookup fails
    pub async fn search(&self, query: &str, limit: u8) -> AppResult<Vec<Location>> {
        Ok(self.provider.search_locations(query, limit).await?)
    }

    /// First geocoding match for a place name
    ///
    /// # Errors
    ///
    /// Returns a not-found error when nothing matches
    pub async fn resolve_location(&self, query: &str) -> AppResult<Location> {
        self.search(query, 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(format!("Location '{}'", query.trim())))
    }

    /// Fetch and score a dashboard for a location
    ///
    /// Forecast and air quality are requested concurrently. Only a forecast
    /// failure fails the load.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the forecast cannot be fetched
    pub async fn load(&self, location: &Location, activity: Activity) -> AppResult<Dashboard> {
        let started = Instant::now();
        let (forecast, air_quality) = tokio::join!(
            self.provider.forecast(location),
            self.provider.air_quality(location)
        );

        let forecast = forecast.map_err(|e| {
            warn!(
                provider = self.provider.name(),
                endpoint = e.provider(),
                latitude = location.latitude,
                longitude = location.longitude,
                error = %e,
                "Forecast fetch failed"
            );
            AppError::from(e)
        })?;

        let air_quality = match air_quality {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    endpoint = e.provider(),
                    latitude = location.latitude,
                    longitude = location.longitude,
                    error = %e,
                    "Air-quality fetch failed, continuing without AQI"
                );
                None
            }
        };

        let dashboard = compose(
            location.clone(),
            activity,
            forecast,
            air_quality.as_ref(),
            Utc::now(),
        );

        info!(
            location = %location.name,
            activity = %activity,
            level = %dashboard.current_level(),
            outlook_hours = dashboard.outlook.len(),
            air_quality = dashboard.air_quality_available,
            duration_ms = started.elapsed().as_millis(),
            "Dashboard loaded"
        );

        Ok(dashboard)
    }
}

/// Score a fetched forecast into a dashboard
///
/// `air_quality` of `None` means the fetch failed: AQI is absent for every
/// slot and the dashboard is flagged accordingly.
#[must_use]
pub fn compose(
    location: Location,
    activity: Activity,
    forecast: ForecastSnapshot,
    air_quality: Option<&AirQualitySnapshot>,
    generated_at: DateTime<Utc>,
) -> Dashboard {
    let current_aqi =
        air_quality.and_then(|snapshot| snapshot.current_or_hourly(forecast.current.time));
    let current = CurrentSlot {
        assessment: SlotAssessment::assess(forecast.current.reading(activity, current_aqi)),
        conditions: forecast.current.clone(),
    };

    let points: Vec<_> = forecast
        .upcoming()
        .take(limits::OUTLOOK_HOURS)
        .cloned()
        .collect();
    let readings: Vec<_> = points
        .iter()
        .map(|point| {
            let aqi = air_quality.and_then(|snapshot| snapshot.at(point.time));
            point.reading(activity, aqi)
        })
        .collect();

    let outlook = evaluate_outlook(&readings);
    debug!(
        slots = outlook.slots.len(),
        best_index = ?outlook.best_index,
        "Outlook evaluated"
    );

    let best_window = outlook.best_index;
    let slots = points
        .into_iter()
        .zip(outlook.slots)
        .map(|(point, assessment)| HourlySlot { point, assessment })
        .collect();

    Dashboard {
        location,
        activity,
        generated_at,
        timezone: forecast.timezone,
        current,
        outlook: slots,
        best_window,
        air_quality_available: air_quality.is_some(),
    }
}
