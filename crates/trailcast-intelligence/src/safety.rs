// ABOUTME: Outdoor safety evaluator for running and cycling
// ABOUTME: Sums four independent sub-scores and maps the total to an advisory level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Safety evaluator
//!
//! `score` sums four independent contributions (temperature, wind,
//! precipitation, air quality), each 0-2; `classify` maps the total to an
//! [`AdvisoryLevel`]. Interval checks are explicit guarded comparisons against
//! the literal thresholds in [`crate::thresholds`].
//!
//! A missing air-quality index contributes nothing. It is never replaced by a
//! default value.

use crate::thresholds::{air_quality, classification, cycling, precipitation, running};
use serde::{Deserialize, Serialize};
use trailcast_core::models::{Activity, AdvisoryLevel, Reading};

/// Individual sub-scores behind a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorScores {
    /// Temperature contribution (0-2)
    pub temperature: u8,
    /// Wind contribution (0-2)
    pub wind: u8,
    /// Precipitation contribution (0-2)
    pub precipitation: u8,
    /// Air-quality contribution (0-2), `None` when the index was unavailable
    pub air_quality: Option<u8>,
}

impl FactorScores {
    /// Sum of all present sub-scores
    #[must_use]
    pub fn total(&self) -> u8 {
        self.temperature + self.wind + self.precipitation + self.air_quality.unwrap_or(0)
    }

    /// Advisory level for the total
    #[must_use]
    pub fn level(&self) -> AdvisoryLevel {
        classify(self.total())
    }
}

/// Activity-specific temperature and wind limits
struct ActivityRules {
    ideal_temp_min: f64,
    ideal_temp_max: f64,
    cool_temp_min: f64,
    warm_temp_max: f64,
    calm_wind_max: f64,
    breezy_wind_max: f64,
}

const RUNNING_RULES: ActivityRules = ActivityRules {
    ideal_temp_min: running::IDEAL_TEMP_MIN_C,
    ideal_temp_max: running::IDEAL_TEMP_MAX_C,
    cool_temp_min: running::COOL_TEMP_MIN_C,
    warm_temp_max: running::WARM_TEMP_MAX_C,
    calm_wind_max: running::CALM_WIND_MAX_KMH,
    breezy_wind_max: running::BREEZY_WIND_MAX_KMH,
};

const CYCLING_RULES: ActivityRules = ActivityRules {
    ideal_temp_min: cycling::IDEAL_TEMP_MIN_C,
    ideal_temp_max: cycling::IDEAL_TEMP_MAX_C,
    cool_temp_min: cycling::COOL_TEMP_MIN_C,
    warm_temp_max: cycling::WARM_TEMP_MAX_C,
    calm_wind_max: cycling::CALM_WIND_MAX_KMH,
    breezy_wind_max: cycling::BREEZY_WIND_MAX_KMH,
};

const fn rules_for(activity: Activity) -> &'static ActivityRules {
    match activity {
        Activity::Running => &RUNNING_RULES,
        Activity::Cycling => &CYCLING_RULES,
    }
}

/// Temperature contribution for an activity
#[must_use]
pub fn temperature_score(activity: Activity, celsius: f64) -> u8 {
    let rules = rules_for(activity);
    if celsius >= rules.ideal_temp_min && celsius <= rules.ideal_temp_max {
        0
    } else if (celsius > rules.ideal_temp_max && celsius <= rules.warm_temp_max)
        || (celsius >= rules.cool_temp_min && celsius < rules.ideal_temp_min)
    {
        1
    } else {
        2
    }
}

/// Wind contribution for an activity
#[must_use]
pub fn wind_score(activity: Activity, kmh: f64) -> u8 {
    let rules = rules_for(activity);
    if kmh <= rules.calm_wind_max {
        0
    } else if kmh <= rules.breezy_wind_max {
        1
    } else {
        2
    }
}

/// Precipitation contribution, shared by all activities
#[must_use]
pub fn precipitation_score(amount_mm: f64, probability: f64) -> u8 {
    if amount_mm >= precipitation::HEAVY_MM {
        2
    } else if amount_mm >= precipitation::LIGHT_MM
        || probability >= precipitation::LIKELY_PROBABILITY
    {
        1
    } else {
        0
    }
}

/// Air-quality contribution for a present US AQI value
#[must_use]
pub const fn air_quality_score(us_aqi: u32) -> u8 {
    if us_aqi <= air_quality::GOOD_MAX {
        0
    } else if us_aqi <= air_quality::MODERATE_MAX {
        1
    } else {
        2
    }
}

/// All four sub-scores for a reading
#[must_use]
pub fn breakdown(reading: &Reading) -> FactorScores {
    FactorScores {
        temperature: temperature_score(reading.activity, reading.temperature_celsius),
        wind: wind_score(reading.activity, reading.wind_speed_kmh),
        precipitation: precipitation_score(
            reading.precipitation_mm,
            reading.precipitation_probability,
        ),
        air_quality: reading.air_quality_index.map(air_quality_score),
    }
}

/// Total risk score (0-8)
#[must_use]
pub fn score(reading: &Reading) -> u8 {
    breakdown(reading).total()
}

/// Map a total score to an advisory level
#[must_use]
pub const fn classify(score: u8) -> AdvisoryLevel {
    if score <= classification::IDEAL_MAX_SCORE {
        AdvisoryLevel::Ideal
    } else if score <= classification::CAUTION_MAX_SCORE {
        AdvisoryLevel::Caution
    } else {
        AdvisoryLevel::NotRecommended
    }
}

/// Advisory level for a reading
#[must_use]
pub fn evaluate(reading: &Reading) -> AdvisoryLevel {
    classify(score(reading))
}
