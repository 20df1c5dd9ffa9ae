// ABOUTME: User preference cache persisted as pretty JSON in the platform config dir
// ABOUTME: Saved location, units, activity, and refresh interval with corrupt-file fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! Preference cache
//!
//! A missing or unreadable cache never blocks the dashboard: `load` falls back
//! to empty preferences and logs a warning. Unset fields fall through to the
//! environment defaults.

use crate::config::AppConfig;
use crate::constants::{defaults, limits};
use crate::errors::{AppError, AppResult};
use crate::models::{Activity, Location, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Persisted user choices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Saved location used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Preferred display units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitSystem>,
    /// Preferred activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
    /// Preferred watch-mode refresh interval in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_minutes: Option<u64>,
}

impl Preferences {
    /// Units after applying the environment default
    #[must_use]
    pub fn units_or(&self, fallback: UnitSystem) -> UnitSystem {
        self.units.unwrap_or(fallback)
    }

    /// Activity after applying the environment default
    #[must_use]
    pub fn activity_or(&self, fallback: Activity) -> Activity {
        self.activity.unwrap_or(fallback)
    }

    /// Refresh interval after applying the environment default
    #[must_use]
    pub fn refresh_minutes_or(&self, fallback: u64) -> u64 {
        self.refresh_minutes.unwrap_or(fallback)
    }
}

/// Values given on the command line for this run only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingOverrides {
    /// `--units`
    pub units: Option<UnitSystem>,
    /// `--activity`
    pub activity: Option<Activity>,
    /// `watch --interval`
    pub refresh_minutes: Option<u64>,
}

/// Effective settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Display units
    pub units: UnitSystem,
    /// Activity being scored
    pub activity: Activity,
    /// Watch-mode refresh interval in minutes
    pub refresh_minutes: u64,
}

impl Preferences {
    /// Effective settings: command line first, then saved preferences, then
    /// the environment
    #[must_use]
    pub fn resolve(&self, overrides: SettingOverrides, config: &AppConfig) -> Settings {
        Settings {
            units: overrides.units.unwrap_or_else(|| self.units_or(config.units)),
            activity: overrides
                .activity
                .unwrap_or_else(|| self.activity_or(config.activity)),
            refresh_minutes: overrides
                .refresh_minutes
                .unwrap_or_else(|| self.refresh_minutes_or(config.refresh_minutes)),
        }
    }
}

/// Check a refresh interval before it is saved
///
/// # Errors
///
/// Returns an invalid-input error outside one minute to one day
pub fn validate_refresh_minutes(minutes: u64) -> AppResult<u64> {
    if (limits::MIN_REFRESH_MINUTES..=limits::MAX_REFRESH_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(AppError::invalid_input(format!(
            "Refresh interval must be between {} and {} minutes, got {minutes}",
            limits::MIN_REFRESH_MINUTES,
            limits::MAX_REFRESH_MINUTES
        )))
    }
}

/// JSON file store for [`Preferences`]
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store backed by an explicit file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured override or the platform default location
    ///
    /// # Errors
    ///
    /// Returns a config error when no override is set and the platform has no
    /// config directory
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        match &config.preferences_path {
            Some(path) => Ok(Self::new(path.clone())),
            None => Self::default_path().map(Self::new),
        }
    }

    /// `<config dir>/trailcast/preferences.json`
    ///
    /// # Errors
    ///
    /// Returns a config error if the platform has no config directory
    pub fn default_path() -> AppResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| {
                dir.join(defaults::CONFIG_DIR_NAME)
                    .join(defaults::PREFERENCES_FILE)
            })
            .ok_or_else(|| {
                AppError::config("No platform config directory; set TRAILCAST_PREFERENCES_PATH")
            })
    }

    /// File this store reads and writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults on any problem
    #[must_use]
    pub fn load(&self) -> Preferences {
        match self.try_load() {
            Ok(Some(preferences)) => preferences,
            Ok(None) => {
                debug!(path = %self.path.display(), "No preferences file, using defaults");
                Preferences::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable preferences file");
                Preferences::default()
            }
        }
    }

    /// Load preferences, reporting read and parse failures
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be read, or a
    /// serialization error if it is not valid preferences JSON
    pub fn try_load(&self) -> AppResult<Option<Preferences>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Persist preferences, replacing the file atomically
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory or file cannot be written
    pub fn save(&self, preferences: &Preferences) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(preferences)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        info!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }

    /// Delete the preferences file
    ///
    /// Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be removed
    pub fn clear(&self) -> AppResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Preferences cleared");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
