// ABOUTME: Outdoor-activity safety scoring engine for running and cycling
// ABOUTME: Pure rule table mapping weather readings to a three-level advisory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![deny(unsafe_code)]

//! # Trailcast Intelligence
//!
//! The safety evaluator maps a [`Reading`](trailcast_core::models::Reading)
//! to an [`AdvisoryLevel`](trailcast_core::models::AdvisoryLevel):
//!
//! ```rust
//! use trailcast_core::models::{Activity, AdvisoryLevel, Reading};
//! use trailcast_intelligence::safety::{evaluate, score};
//!
//! let reading = Reading::new(Activity::Running, 12.0, 10.0, 0.0, 0.0).with_air_quality(Some(30));
//! assert_eq!(score(&reading), 0);
//! assert_eq!(evaluate(&reading), AdvisoryLevel::Ideal);
//! ```
//!
//! Everything here is synchronous and side-effect free, so it can be called
//! from any thread, once per forecast hour, in any order.

/// Per-slot assessment of an hourly outlook
pub mod outlook;
/// Safety evaluator: sub-scores, total score, and classification
pub mod safety;
/// Rule-table thresholds
pub mod thresholds;

pub use outlook::{evaluate_outlook, Outlook, SlotAssessment};
pub use safety::{breakdown, classify, evaluate, score, FactorScores};
