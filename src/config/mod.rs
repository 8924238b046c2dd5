// ABOUTME: Configuration module for the GymFuel server
// ABOUTME: Environment-driven server and nutrition provider settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// Environment variable parsing
pub mod environment;

pub use environment::{Environment, NutritionConfig, ServerConfig};
