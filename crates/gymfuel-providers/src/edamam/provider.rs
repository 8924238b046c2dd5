// ABOUTME: Edamam implementation of FoodProvider
// ABOUTME: Parser search through the shared cache and rate limiter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use async_trait::async_trait;
use tracing::debug;

use super::models::EdamamParserResponse;
use super::EdamamConfig;
use crate::constants::providers::EDAMAM;
use crate::error::ProviderError;
use crate::fallback;
use crate::models::FoodSearchResult;
use crate::provider::{cache_key, FoodProvider, ProviderResources, ProviderSearch};

/// Secondary provider backed by the Edamam food database
#[derive(Debug, Clone)]
pub struct EdamamProvider {
    config: EdamamConfig,
    resources: ProviderResources,
}

impl EdamamProvider {
    /// Create an adapter over shared resources
    #[must_use]
    pub const fn new(config: EdamamConfig, resources: ProviderResources) -> Self {
        Self { config, resources }
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<FoodSearchResult>, ProviderError> {
        let url = format!("{}/parser", self.config.base_url.trim_end_matches('/'));
        let request = self.resources.http.get(url).query(&[
            ("ingr", query),
            ("app_id", self.config.app_id.as_deref().unwrap_or_default()),
            ("app_key", self.config.app_key.as_deref().unwrap_or_default()),
        ]);
        let body: EdamamParserResponse = ProviderError::fetch_json(EDAMAM, request).await?;
        Ok(body.into_results())
    }
}

#[async_trait]
impl FoodProvider for EdamamProvider {
    fn name(&self) -> &'static str {
        EDAMAM
    }

    fn is_configured(&self) -> bool {
        self.config.has_credentials()
    }

    async fn search_food(&self, query: &str) -> ProviderSearch {
        if !self.is_configured() {
            debug!("Edamam credentials not configured, answering from fallback table");
            return ProviderSearch::local_fallback(fallback::search(query));
        }

        self.resources
            .lookup(
                cache_key(EDAMAM, query),
                || fallback::search(query),
                || self.fetch_search(query),
            )
            .await
    }

    // Edamam has no id lookup wired up; details resolve through the other providers.
    async fn get_food_details(&self, _food_id: &str) -> Option<FoodSearchResult> {
        None
    }
}
