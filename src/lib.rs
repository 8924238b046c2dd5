// ABOUTME: Main library entry point for the GymFuel nutrition API
// ABOUTME: Multi-provider food lookup with caching, rate limiting, and a REST surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

#![deny(unsafe_code)]

//! # GymFuel Server
//!
//! Food search for a gym-management backend. A query is answered by the first
//! provider that returns anything (USDA `FoodData` Central, then Edamam), and
//! otherwise by a small built-in table of common foods. Provider results are
//! cached, and outbound calls are bounded by a shared fixed-window limiter.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gymfuel_server::config::NutritionConfig;
//! use gymfuel_server::nutrition::NutritionService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = NutritionService::from_config(&NutritionConfig::from_env()?);
//! let outcome = service.search_food_with_source("banana").await;
//! println!("{} results via {:?}", outcome.foods.len(), outcome.source);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;
/// Structured logging setup
pub mod logging;
/// HTTP middleware
pub mod middleware;
/// Lookup orchestration and portion calculation
pub mod nutrition;
/// HTTP routes
pub mod routes;

pub use gymfuel_core::{constants, errors, models};
pub use gymfuel_providers as providers;
