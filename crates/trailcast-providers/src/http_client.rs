// ABOUTME: Shared reqwest client reused by every Open-Meteo request
// ABOUTME: Timeouts come from HttpClientConfig, set once at startup before first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;
use trailcast_core::constants::{defaults, project::user_agent};

/// Timeouts for the shared HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl HttpClientConfig {
    /// Whole-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Build a client with these timeouts and the product user agent
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialized
    pub fn build_client(&self) -> reqwest::Result<Client> {
        ClientBuilder::new()
            .user_agent(user_agent())
            .timeout(self.timeout())
            .connect_timeout(self.connect_timeout())
            .build()
    }
}

static CLIENT_CONFIG: OnceLock<HttpClientConfig> = OnceLock::new();
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record the timeouts for the shared client
///
/// Only the first call wins, and only if it happens before the first
/// [`shared_client`] call. Without it the defaults apply.
pub fn initialize_shared_client(config: HttpClientConfig) {
    let _ = CLIENT_CONFIG.set(config);
}

/// Pooled client shared by all providers
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let config = CLIENT_CONFIG.get().copied().unwrap_or_default();
        config.build_client().unwrap_or_else(|e| {
            warn!(error = %e, "HTTP client build failed, using reqwest defaults");
            Client::new()
        })
    })
}
