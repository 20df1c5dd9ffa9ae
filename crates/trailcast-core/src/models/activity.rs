// ABOUTME: Outdoor activity enumeration used to pick activity-specific safety rules
// ABOUTME: Defines running and cycling with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outdoor activity the advisory is computed for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    /// Running outdoors
    #[default]
    Running,
    /// Cycling outdoors
    Cycling,
}

impl Activity {
    /// All supported activities
    pub const ALL: [Self; 2] = [Self::Running, Self::Cycling];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "running" | "run" => Ok(Self::Running),
            "cycling" | "ride" | "bike" | "cycle" => Ok(Self::Cycling),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity '{other}' (expected running or cycling)"
            ))),
        }
    }
}
