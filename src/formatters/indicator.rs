// ABOUTME: Maps advisory levels to display indicators with label, symbol, and ANSI color
// ABOUTME: Ideal is positive green, caution is warning yellow, not recommended is negative red
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use crate::models::AdvisoryLevel;

const ANSI_RESET: &str = "\x1b[0m";

/// Sentiment of an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Go
    Positive,
    /// Go with care
    Warning,
    /// Stay in
    Negative,
}

impl Tone {
    /// ANSI SGR sequence for the tone's color
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Positive => "\x1b[32m",
            Self::Warning => "\x1b[33m",
            Self::Negative => "\x1b[31m",
        }
    }

    /// Color name, for plain output and tests
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Warning => "yellow",
            Self::Negative => "red",
        }
    }
}

/// Visual representation of an advisory level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Sentiment and color
    pub tone: Tone,
    /// Human-readable label
    pub label: &'static str,
    /// Single-character marker
    pub symbol: char,
}

impl Indicator {
    /// Symbol and label, colored when requested
    #[must_use]
    pub fn paint(&self, color: bool) -> String {
        if color {
            format!("{}{} {}{ANSI_RESET}", self.tone.ansi(), self.symbol, self.label)
        } else {
            format!("{} {}", self.symbol, self.label)
        }
    }
}

/// Indicator for an advisory level
#[must_use]
pub const fn indicator(level: AdvisoryLevel) -> Indicator {
    match level {
        AdvisoryLevel::Ideal => Indicator {
            tone: Tone::Positive,
            label: level.label(),
            symbol: '●',
        },
        AdvisoryLevel::Caution => Indicator {
            tone: Tone::Warning,
            label: level.label(),
            symbol: '▲',
        },
        AdvisoryLevel::NotRecommended => Indicator {
            tone: Tone::Negative,
            label: level.label(),
            symbol: '✖',
        },
    }
}
