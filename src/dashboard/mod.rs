// ABOUTME: Dashboard model: current slot, 12-hour outlook, and best window for a location
// ABOUTME: Plain data assembled by the dashboard service and consumed by the formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

/// Fetch orchestration and composition
pub mod service;

pub use service::{compose, DashboardService};

use crate::intelligence::SlotAssessment;
use crate::models::{Activity, AdvisoryLevel, CurrentConditions, HourlyPoint, Location};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions with their advisory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSlot {
    /// Observed conditions
    pub conditions: CurrentConditions,
    /// Safety assessment of the conditions
    pub assessment: SlotAssessment,
}

/// One outlook hour with its advisory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySlot {
    /// Forecast for the hour
    pub point: HourlyPoint,
    /// Safety assessment of the hour
    pub assessment: SlotAssessment,
}

/// Everything the renderers need for one refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Location the data belongs to
    pub location: Location,
    /// Activity the advisories were computed for
    pub activity: Activity,
    /// When the dashboard was assembled
    pub generated_at: DateTime<Utc>,
    /// IANA timezone of the local times, when known
    pub timezone: Option<String>,
    /// Current conditions
    pub current: CurrentSlot,
    /// Up to twelve hours strictly after the observation hour
    pub outlook: Vec<HourlySlot>,
    /// Index into `outlook` of the earliest lowest-scoring hour
    pub best_window: Option<usize>,
    /// False when the air-quality fetch failed and AQI is absent everywhere
    pub air_quality_available: bool,
}

impl Dashboard {
    /// Advisory level for current conditions
    #[must_use]
    pub const fn current_level(&self) -> AdvisoryLevel {
        self.current.assessment.level
    }

    /// Best outlook hour, if the outlook is not empty
    #[must_use]
    pub fn best_slot(&self) -> Option<&HourlySlot> {
        self.best_window.and_then(|index| self.outlook.get(index))
    }
}
