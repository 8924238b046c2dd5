// ABOUTME: USDA FoodData Central adapter module
// ABOUTME: Configuration, wire types, and the FoodProvider implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// Wire types and translation into the common result shape
pub mod models;
/// `FoodProvider` implementation
pub mod provider;

pub use provider::UsdaProvider;

use crate::constants::providers::USDA_DEFAULT_BASE_URL;

/// USDA adapter configuration
#[derive(Clone, PartialEq, Eq)]
pub struct UsdaConfig {
    /// API key from <https://fdc.nal.usda.gov/api-key-signup.html>; `None` disables network calls
    pub api_key: Option<String>,
    /// API base URL without trailing slash
    pub base_url: String,
}

impl UsdaConfig {
    /// Configuration with a key against the public endpoint
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Whether an API key is present
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: USDA_DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl std::fmt::Debug for UsdaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsdaConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
