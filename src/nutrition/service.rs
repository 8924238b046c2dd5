// ABOUTME: Multi-provider nutrition lookup: ordered providers, then the fallback table
// ABOUTME: Reports which stage answered so degraded responses are visible in logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use std::sync::Arc;

use gymfuel_providers::{
    fallback, EdamamProvider, FoodProvider, ProviderResources, ResultOrigin, UsdaProvider,
};
use serde::Serialize;
use tracing::{debug, info};

use super::calculator::{nutrients_for_portion, validate_quantity, MeasurementUnit};
use crate::config::NutritionConfig;
use crate::errors::AppResult;
use crate::models::{FoodSearchResult, NutrientProfile};

/// Stage of the lookup chain that produced a search answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum LookupSource {
    /// A provider returned a non-empty list
    Provider {
        /// Provider name
        provider: &'static str,
        /// Cache, network, or the provider's own local fallback
        origin: ResultOrigin,
    },
    /// Every provider came back empty; the fallback table matched
    StaticFallback,
    /// Nothing matched anywhere
    Empty,
}

/// Search answer with its provenance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Matching foods
    pub foods: Vec<FoodSearchResult>,
    /// Stage that produced `foods`
    pub source: LookupSource,
}

/// Configuration state of one provider, for readiness reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderStatus {
    /// Provider name
    pub name: &'static str,
    /// Whether credentials are present
    pub configured: bool,
}

/// Food lookup over an ordered provider list
///
/// Providers are tried primary first. Nothing a provider does can make a lookup
/// fail: adapters absorb their own errors.
#[derive(Clone)]
pub struct NutritionService {
    providers: Vec<Arc<dyn FoodProvider>>,
}

impl std::fmt::Debug for NutritionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NutritionService")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl NutritionService {
    /// Create a service over providers in priority order
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn FoodProvider>>) -> Self {
        Self { providers }
    }

    /// USDA then Edamam, sharing one HTTP client, cache, and rate limiter
    #[must_use]
    pub fn from_config(config: &NutritionConfig) -> Self {
        let resources =
            ProviderResources::from_settings(&config.http_client, config.cache_ttl, config.rate_limit);
        Self::new(vec![
            Arc::new(UsdaProvider::new(config.usda.clone(), resources.clone())),
            Arc::new(EdamamProvider::new(config.edamam.clone(), resources)),
        ])
    }

    /// Configuration state of every provider, in priority order
    #[must_use]
    pub fn provider_status(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .map(|p| ProviderStatus {
                name: p.name(),
                configured: p.is_configured(),
            })
            .collect()
    }

    /// Search foods; never fails, possibly empty
    pub async fn search_food(&self, query: &str) -> Vec<FoodSearchResult> {
        self.search_food_with_source(query).await.foods
    }

    /// Search foods and report which stage answered
    pub async fn search_food_with_source(&self, query: &str) -> SearchOutcome {
        let outcome = self.run_search_chain(query).await;
        match outcome.source {
            LookupSource::Provider { provider, origin } => info!(
                query,
                provider,
                origin = ?origin,
                results = outcome.foods.len(),
                "Food search answered by provider"
            ),
            LookupSource::StaticFallback => info!(
                query,
                results = outcome.foods.len(),
                "Food search answered by static fallback table"
            ),
            LookupSource::Empty => info!(query, "Food search found no results"),
        }
        outcome
    }

    async fn run_search_chain(&self, query: &str) -> SearchOutcome {
        for provider in &self.providers {
            let search = provider.search_food(query).await;
            if !search.foods.is_empty() {
                return SearchOutcome {
                    foods: search.foods,
                    source: LookupSource::Provider {
                        provider: provider.name(),
                        origin: search.origin,
                    },
                };
            }
            debug!(provider = provider.name(), query, "Provider returned no results");
        }

        let foods = fallback::search(query);
        let source = if foods.is_empty() {
            LookupSource::Empty
        } else {
            LookupSource::StaticFallback
        };
        SearchOutcome { foods, source }
    }

    /// Resolve one food by id; the first provider that knows it wins
    ///
    /// Fallback-table ids are resolved by the USDA adapter, so no separate
    /// table lookup happens here.
    pub async fn get_food_details(&self, food_id: &str) -> Option<FoodSearchResult> {
        for provider in &self.providers {
            if let Some(food) = provider.get_food_details(food_id).await {
                return Some(food);
            }
        }
        None
    }

    /// Nutrients for `quantity unit` of a food
    ///
    /// Returns `Ok(None)` when the food cannot be resolved.
    ///
    /// # Errors
    ///
    /// Returns an error when the quantity is not a positive number, the unit is
    /// blank, or the unit is neither a mass unit nor one of the food's serving labels
    pub async fn calculate_nutrition(
        &self,
        food_id: &str,
        quantity: f64,
        unit: &str,
    ) -> AppResult<Option<NutrientProfile>> {
        validate_quantity(quantity)?;
        MeasurementUnit::parse(unit)?;

        for provider in &self.providers {
            if let Some(nutrients) = provider.calculate_nutrition(food_id, quantity, unit).await {
                return Ok(Some(nutrients));
            }
        }

        let Some(food) = self.get_food_details(food_id).await else {
            return Ok(None);
        };
        nutrients_for_portion(&food, quantity, unit).map(Some)
    }
}
