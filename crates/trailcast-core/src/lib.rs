// ABOUTME: Core types and constants for the Trailcast weather dashboard
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![deny(unsafe_code)]

//! # Trailcast Core
//!
//! Foundation crate providing shared types and constants for the Trailcast
//! outdoor weather dashboard. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Activities, readings, advisory levels, locations, and forecast snapshots

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (Activity, Reading, `AdvisoryLevel`, forecast snapshots)
pub mod models;
