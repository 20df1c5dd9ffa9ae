// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process weather provider and forecast fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod fixtures;
pub mod mock_weather_provider;
