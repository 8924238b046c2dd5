// ABOUTME: Food database provider implementations for USDA FoodData Central and Edamam
// ABOUTME: Provider trait, shared cache and rate limiter, fallback table, and HTTP client setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

//! Food database providers and the shared infrastructure they run on.
//!
//! Each adapter translates one external schema into
//! [`FoodSearchResult`](gymfuel_core::models::FoodSearchResult) and absorbs
//! every network failure by answering from the static fallback table.

// Re-export gymfuel-core modules so provider files can keep `use crate::models::*` etc.
pub use gymfuel_core::constants;
pub use gymfuel_core::errors;
pub use gymfuel_core::models;

/// In-memory food result cache with time-based expiry
pub mod cache;
/// Edamam food database adapter
pub mod edamam;
/// Provider failure types (absorbed before reaching callers)
pub mod error;
/// Static fallback vocabulary of common foods
pub mod fallback;
/// HTTP client construction with configured timeouts
pub mod http_client;
/// Provider trait, shared resources, and lookup plumbing
pub mod provider;
/// Fixed-window outbound request limiter
pub mod rate_limiter;
/// USDA `FoodData` Central adapter
pub mod usda;

pub use cache::FoodCache;
pub use edamam::{EdamamConfig, EdamamProvider};
pub use error::ProviderError;
pub use http_client::{build_client, HttpClientConfig};
pub use provider::{
    cache_key, normalize_query, FoodProvider, ProviderResources, ProviderSearch, ResultOrigin,
};
pub use rate_limiter::{RateLimitConfig, RateLimiter};
pub use usda::{UsdaConfig, UsdaProvider};
