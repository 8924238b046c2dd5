// ABOUTME: FoodProvider trait and the cache/limiter/fallback lookup shared by adapters
// ABOUTME: Adapters supply the network fetch; this module decides when to make it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::FoodCache;
use crate::error::ProviderError;
use crate::http_client::{build_client, HttpClientConfig};
use crate::models::{FoodSearchResult, NutrientProfile};
use crate::rate_limiter::{RateLimitConfig, RateLimiter};

/// Which path inside an adapter produced a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrigin {
    /// Fresh cache entry
    Cache,
    /// Live provider response
    Network,
    /// Static fallback table (no credentials, rate limited, or request failed)
    LocalFallback,
}

/// Result list from one adapter together with how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSearch {
    /// Matching foods, possibly empty
    pub foods: Vec<FoodSearchResult>,
    /// Path that produced `foods`
    pub origin: ResultOrigin,
}

impl ProviderSearch {
    /// Answer from the static fallback table
    #[must_use]
    pub fn local_fallback(foods: Vec<FoodSearchResult>) -> Self {
        Self {
            foods,
            origin: ResultOrigin::LocalFallback,
        }
    }
}

/// Shared infrastructure handed to every adapter
#[derive(Debug, Clone)]
pub struct ProviderResources {
    /// Pooled HTTP client
    pub http: reqwest::Client,
    /// Result cache shared across providers (keys are provider-prefixed)
    pub cache: Arc<FoodCache>,
    /// Outbound request budget shared across providers
    pub limiter: Arc<RateLimiter>,
}

impl ProviderResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub const fn new(
        http: reqwest::Client,
        cache: Arc<FoodCache>,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            http,
            cache,
            limiter,
        }
    }

    /// Build a client and fresh cache/limiter from configuration values
    #[must_use]
    pub fn from_settings(
        http: &HttpClientConfig,
        cache_ttl: std::time::Duration,
        rate_limit: RateLimitConfig,
    ) -> Self {
        Self::new(
            build_client(http),
            Arc::new(FoodCache::new(cache_ttl)),
            Arc::new(RateLimiter::new(rate_limit)),
        )
    }

    /// Resolve a cached or freshly fetched result list for `key`
    ///
    /// Order: fresh cache entry, rate limiter, `fetch`. A denied limiter or a failed
    /// fetch yields `fallback()` without touching the cache. Successful fetches are
    /// cached even when empty.
    pub(crate) async fn lookup<F, Fut>(
        &self,
        key: String,
        fallback: impl FnOnce() -> Vec<FoodSearchResult> + Send,
        fetch: F,
    ) -> ProviderSearch
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<Vec<FoodSearchResult>, ProviderError>> + Send,
    {
        if let Some(foods) = self.cache.get(&key) {
            debug!(cache_key = %key, results = foods.len(), "Food cache hit");
            return ProviderSearch {
                foods,
                origin: ResultOrigin::Cache,
            };
        }

        if !self.limiter.check_rate_limit().await {
            return ProviderSearch::local_fallback(fallback());
        }

        match fetch().await {
            Ok(foods) => {
                self.cache.set(key, foods.clone());
                ProviderSearch {
                    foods,
                    origin: ResultOrigin::Network,
                }
            }
            Err(e) => {
                warn!(provider = e.provider(), error = %e, "Provider request failed, using fallback table");
                ProviderSearch::local_fallback(fallback())
            }
        }
    }
}

/// Normalize a free-text query: trimmed, lowercased, inner whitespace collapsed
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cache key for a provider-scoped query
#[must_use]
pub fn cache_key(provider: &str, query: &str) -> String {
    format!("{provider}:{}", normalize_query(query))
}

/// An external food database
///
/// Implementations never return errors: every failure degrades to the static
/// fallback table and is logged.
#[async_trait]
pub trait FoodProvider: Send + Sync {
    /// Stable provider name used in cache keys and logs
    fn name(&self) -> &'static str;

    /// Whether credentials are present for network calls
    fn is_configured(&self) -> bool;

    /// Search foods by free-text query
    async fn search_food(&self, query: &str) -> ProviderSearch;

    /// Look up one food by its `foodId`
    async fn get_food_details(&self, food_id: &str) -> Option<FoodSearchResult>;

    /// Provider-side nutrient scaling; bundled adapters leave this to the service
    async fn calculate_nutrition(
        &self,
        _food_id: &str,
        _quantity: f64,
        _unit: &str,
    ) -> Option<NutrientProfile> {
        None
    }
}
