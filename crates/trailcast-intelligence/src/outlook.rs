// ABOUTME: Per-slot safety assessment for a sequence of hourly readings
// ABOUTME: Evaluates each reading independently and locates the best window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use crate::safety::{breakdown, FactorScores};
use serde::{Deserialize, Serialize};
use trailcast_core::models::{AdvisoryLevel, Reading};

/// Evaluation result for a single reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotAssessment {
    /// Input that was evaluated
    pub reading: Reading,
    /// Sub-scores behind the total
    pub factors: FactorScores,
    /// Total score (0-8)
    pub score: u8,
    /// Advisory level
    pub level: AdvisoryLevel,
}

impl SlotAssessment {
    /// Evaluate a single reading
    #[must_use]
    pub fn assess(reading: Reading) -> Self {
        let factors = breakdown(&reading);
        Self {
            reading,
            factors,
            score: factors.total(),
            level: factors.level(),
        }
    }
}

/// Assessments for a run of readings, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outlook {
    /// One assessment per input reading
    pub slots: Vec<SlotAssessment>,
    /// Index of the earliest slot with the lowest score
    pub best_index: Option<usize>,
}

impl Outlook {
    /// Best slot, if any
    #[must_use]
    pub fn best(&self) -> Option<&SlotAssessment> {
        self.best_index.and_then(|index| self.slots.get(index))
    }

    /// Number of slots at each level (ideal, caution, not-recommended)
    #[must_use]
    pub fn level_counts(&self) -> (usize, usize, usize) {
        self.slots
            .iter()
            .fold((0, 0, 0), |(ideal, caution, bad), slot| match slot.level {
                AdvisoryLevel::Ideal => (ideal + 1, caution, bad),
                AdvisoryLevel::Caution => (ideal, caution + 1, bad),
                AdvisoryLevel::NotRecommended => (ideal, caution, bad + 1),
            })
    }
}

/// Assess every reading independently
#[must_use]
pub fn evaluate_outlook(readings: &[Reading]) -> Outlook {
    let slots: Vec<SlotAssessment> = readings.iter().copied().map(SlotAssessment::assess).collect();

    // min_by_key keeps the first of equal minima
    let best_index = slots
        .iter()
        .enumerate()
        .min_by_key(|(_, slot)| slot.score)
        .map(|(index, _)| index);

    Outlook { slots, best_index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailcast_core::models::Activity;

    #[test]
    fn test_empty_outlook() {
        let outlook = evaluate_outlook(&[]);
        assert!(outlook.slots.is_empty());
        assert_eq!(outlook.best_index, None);
        assert!(outlook.best().is_none());
    }

    #[test]
    fn test_best_window_prefers_earliest_minimum() {
        let readings = [
            Reading::new(Activity::Running, 30.0, 10.0, 0.0, 0.0),
            Reading::new(Activity::Running, 12.0, 10.0, 0.0, 0.0),
            Reading::new(Activity::Running, 14.0, 10.0, 0.0, 0.0),
        ];
        let outlook = evaluate_outlook(&readings);
        assert_eq!(outlook.slots.len(), 3);
        assert_eq!(outlook.best_index, Some(1));
        assert_eq!(outlook.level_counts(), (3, 0, 0));
    }

    #[test]
    fn test_slot_serializes_level_in_kebab_case() -> Result<(), serde_json::Error> {
        let slot = SlotAssessment::assess(Reading::new(Activity::Cycling, 35.0, 35.0, 4.0, 90.0));
        let json = serde_json::to_value(slot)?;
        assert_eq!(json["level"], "not-recommended");
        assert_eq!(json["score"], 6);
        assert!(json["factors"]["air_quality"].is_null());
        Ok(())
    }
}
