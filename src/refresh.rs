// ABOUTME: Watch-mode refresh loop driving periodic dashboard reloads on a tokio interval
// ABOUTME: Failed refreshes are logged and skipped; the loop stops on a shutdown signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use crate::constants::limits;
use crate::errors::AppResult;
use std::future::{self, Future};
use std::time::Duration;
use tokio::signal;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

const SECONDS_PER_MINUTE: u64 = 60;

/// Outcome counters for a finished loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    /// Refreshes that completed
    pub succeeded: u64,
    /// Refreshes that returned an error
    pub failed: u64,
}

/// Periodic refresh driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshLoop {
    interval: Duration,
}

impl RefreshLoop {
    /// Loop with an exact interval
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Loop with an interval in minutes, clamped to one minute and one day
    #[must_use]
    pub fn from_minutes(minutes: u64) -> Self {
        let minutes = minutes.clamp(limits::MIN_REFRESH_MINUTES, limits::MAX_REFRESH_MINUTES);
        Self::new(Duration::from_secs(minutes.saturating_mul(SECONDS_PER_MINUTE)))
    }

    /// Time between refreshes
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Run `refresh` immediately and then once per interval until `shutdown`
    /// resolves
    ///
    /// A refresh error is logged and the loop waits for the next tick.
    pub async fn run<F, Fut, S>(&self, mut refresh: F, shutdown: S) -> RefreshStats
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AppResult<()>>,
        S: Future<Output = ()>,
    {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut stats = RefreshStats::default();
        tokio::pin!(shutdown);

        info!(interval_secs = self.interval.as_secs(), "Watch mode started");

        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                _ = ticker.tick() => {
                    match refresh().await {
                        Ok(()) => {
                            stats.succeeded += 1;
                            debug!(refreshes = stats.succeeded, "Refresh complete");
                        }
                        Err(e) => {
                            stats.failed += 1;
                            warn!(error = %e, code = %e.code, "Refresh failed, waiting for next tick");
                        }
                    }
                }
            }
        }

        info!(
            succeeded = stats.succeeded,
            failed = stats.failed,
            "Watch mode stopped"
        );
        stats
    }
}

/// Resolves on Ctrl-C
///
/// If the signal handler cannot be installed the future never resolves and
/// the process must be stopped externally.
pub async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Unable to listen for Ctrl-C");
        future::pending::<()>().await;
    }
}
