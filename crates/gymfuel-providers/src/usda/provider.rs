// ABOUTME: USDA FoodData Central implementation of FoodProvider
// ABOUTME: Search and numeric-id details through the shared cache and rate limiter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use async_trait::async_trait;
use tracing::debug;

use super::models::{UsdaFood, UsdaSearchResponse};
use super::UsdaConfig;
use crate::constants::providers::{USDA, USDA_DATA_TYPES, USDA_PAGE_SIZE};
use crate::error::ProviderError;
use crate::fallback;
use crate::models::FoodSearchResult;
use crate::provider::{cache_key, FoodProvider, ProviderResources, ProviderSearch};

/// Primary provider backed by USDA `FoodData` Central
#[derive(Debug, Clone)]
pub struct UsdaProvider {
    config: UsdaConfig,
    resources: ProviderResources,
}

impl UsdaProvider {
    /// Create an adapter over shared resources
    #[must_use]
    pub const fn new(config: UsdaConfig, resources: ProviderResources) -> Self {
        Self { config, resources }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<FoodSearchResult>, ProviderError> {
        let url = format!("{}/foods/search", self.base_url());
        let page_size = USDA_PAGE_SIZE.to_string();
        let request = self.resources.http.get(url).query(&[
            ("api_key", self.api_key()),
            ("query", query),
            ("pageSize", page_size.as_str()),
            ("dataType", USDA_DATA_TYPES),
        ]);
        let body: UsdaSearchResponse = ProviderError::fetch_json(USDA, request).await?;
        Ok(body
            .foods
            .into_iter()
            .filter_map(UsdaFood::into_result)
            .collect())
    }

    async fn fetch_details(&self, fdc_id: u64) -> Result<Vec<FoodSearchResult>, ProviderError> {
        let url = format!("{}/food/{fdc_id}", self.base_url());
        let request = self
            .resources
            .http
            .get(url)
            .query(&[("api_key", self.api_key())]);
        let food: UsdaFood = ProviderError::fetch_json(USDA, request).await?;
        Ok(food.into_result().into_iter().collect())
    }
}

#[async_trait]
impl FoodProvider for UsdaProvider {
    fn name(&self) -> &'static str {
        USDA
    }

    fn is_configured(&self) -> bool {
        self.config.has_credentials()
    }

    async fn search_food(&self, query: &str) -> ProviderSearch {
        if !self.is_configured() {
            debug!("USDA API key not configured, answering from fallback table");
            return ProviderSearch::local_fallback(fallback::search(query));
        }

        self.resources
            .lookup(
                cache_key(USDA, query),
                || fallback::search(query),
                || self.fetch_search(query),
            )
            .await
    }

    async fn get_food_details(&self, food_id: &str) -> Option<FoodSearchResult> {
        let food_id = food_id.trim();
        let fdc_id = match food_id.parse::<u64>() {
            Ok(id) if self.is_configured() => id,
            _ => return fallback::find_by_id(food_id),
        };

        let found = self
            .resources
            .lookup(
                format!("{USDA}:food:{fdc_id}"),
                Vec::new,
                || self.fetch_details(fdc_id),
            )
            .await;

        found
            .foods
            .into_iter()
            .next()
            .or_else(|| fallback::find_by_id(food_id))
    }
}
