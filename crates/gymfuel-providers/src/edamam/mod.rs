// ABOUTME: Edamam food database adapter module
// ABOUTME: Configuration, wire types, and the FoodProvider implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// Wire types and translation into the common result shape
pub mod models;
/// `FoodProvider` implementation
pub mod provider;

pub use provider::EdamamProvider;

use crate::constants::providers::EDAMAM_DEFAULT_BASE_URL;

/// Edamam adapter configuration
///
/// Network calls need both the application id and key.
#[derive(Clone, PartialEq, Eq)]
pub struct EdamamConfig {
    /// Application id
    pub app_id: Option<String>,
    /// Application key
    pub app_key: Option<String>,
    /// API base URL without trailing slash
    pub base_url: String,
}

impl EdamamConfig {
    /// Configuration with credentials against the public endpoint
    pub fn with_credentials(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: Some(app_id.into()),
            app_key: Some(app_key.into()),
            ..Self::default()
        }
    }

    /// Whether both credentials are present
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        let present = |value: Option<&str>| value.is_some_and(|v| !v.trim().is_empty());
        present(self.app_id.as_deref()) && present(self.app_key.as_deref())
    }
}

impl Default for EdamamConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            base_url: EDAMAM_DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl std::fmt::Debug for EdamamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdamamConfig")
            .field("app_id", &self.app_id)
            .field("app_key", &self.app_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
