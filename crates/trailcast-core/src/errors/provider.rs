// ABOUTME: Weather provider error types for HTTP data sources
// ABOUTME: Structured provider failures that convert into the unified AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

//! # Provider Error Types
//!
//! Errors raised while talking to forecast, geocoding and air-quality APIs.
//! Every variant names the provider so log lines and CLI messages can say
//! which upstream failed.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors specific to weather data providers
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The upstream API answered with a non-success status
    #[error("{provider} API returned status {status_code}: {message}")]
    ApiError {
        /// Provider (endpoint family) name
        provider: String,
        /// HTTP status code
        status_code: u16,
        /// Response body or summary
        message: String,
    },

    /// The upstream API rate limited the request
    #[error("{provider} rate limit exceeded")]
    RateLimitExceeded {
        /// Provider (endpoint family) name
        provider: String,
    },

    /// The response body could not be interpreted
    #[error("{provider} returned an invalid response: {reason}")]
    InvalidResponse {
        /// Provider (endpoint family) name
        provider: String,
        /// What was wrong with the payload
        reason: String,
    },

    /// Request parameters were rejected before any call was made
    #[error("Invalid request to {provider}: {reason}")]
    InvalidRequest {
        /// Provider (endpoint family) name
        provider: String,
        /// Why the request is invalid
        reason: String,
    },

    /// Network transport failure
    #[cfg(feature = "provider-errors")]
    #[error("Network error talking to {provider}: {source}")]
    Network {
        /// Provider (endpoint family) name
        provider: String,
        /// Underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },
}

impl ProviderError {
    /// Error code this provider failure maps to
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::ApiError { .. } | Self::InvalidResponse { .. } => ErrorCode::ExternalServiceError,
            Self::RateLimitExceeded { .. } => ErrorCode::ExternalRateLimited,
            Self::InvalidRequest { .. } => ErrorCode::InvalidInput,
            #[cfg(feature = "provider-errors")]
            Self::Network { .. } => ErrorCode::ExternalServiceUnavailable,
        }
    }

    /// Name of the provider that failed
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::ApiError { provider, .. }
            | Self::RateLimitExceeded { provider }
            | Self::InvalidResponse { provider, .. }
            | Self::InvalidRequest { provider, .. } => provider,
            #[cfg(feature = "provider-errors")]
            Self::Network { provider, .. } => provider,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        Self::new(error.error_code(), error.to_string()).with_source(error)
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
