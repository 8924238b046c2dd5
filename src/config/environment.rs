// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server, provider credential, cache, and rate limit settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

//! Environment-based configuration
//!
//! The process environment is the only source. Blank values are treated the same
//! as unset ones, so `USDA_API_KEY=` in a deployment manifest disables USDA rather
//! than sending an empty key. Missing credentials are never an error: the
//! corresponding provider answers from the fallback table.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use gymfuel_providers::{EdamamConfig, HttpClientConfig, RateLimitConfig, UsdaConfig};
use tracing::info;

use crate::constants::cache::{
    DEFAULT_FOOD_CACHE_TTL_SECS, DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_WINDOW_SECS,
};
use crate::constants::network::{
    DEFAULT_HOST, DEFAULT_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_HTTP_PORT, DEFAULT_HTTP_TIMEOUT_SECS,
};
use crate::constants::providers::{EDAMAM_DEFAULT_BASE_URL, USDA_DEFAULT_BASE_URL};
use crate::errors::{AppError, AppResult};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Provider, cache, and rate limit settings for the nutrition service
#[derive(Debug, Clone)]
pub struct NutritionConfig {
    /// Primary provider
    pub usda: UsdaConfig,
    /// Secondary provider
    pub edamam: EdamamConfig,
    /// Food cache entry lifetime
    pub cache_ttl: Duration,
    /// Outbound request budget shared by all providers
    pub rate_limit: RateLimitConfig,
    /// Outbound HTTP timeouts
    pub http_client: HttpClientConfig,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            usda: UsdaConfig::default(),
            edamam: EdamamConfig::default(),
            cache_ttl: Duration::from_secs(DEFAULT_FOOD_CACHE_TTL_SECS),
            rate_limit: RateLimitConfig::default(),
            http_client: HttpClientConfig::default(),
        }
    }
}

impl NutritionConfig {
    /// Load nutrition settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable is present but malformed
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            usda: UsdaConfig {
                api_key: env_var_opt("USDA_API_KEY"),
                base_url: env_var_or("USDA_BASE_URL", USDA_DEFAULT_BASE_URL),
            },
            edamam: EdamamConfig {
                app_id: env_var_opt("EDAMAM_APP_ID"),
                app_key: env_var_opt("EDAMAM_API_KEY"),
                base_url: env_var_or("EDAMAM_BASE_URL", EDAMAM_DEFAULT_BASE_URL),
            },
            cache_ttl: Duration::from_secs(env_parse_or(
                "FOOD_CACHE_TTL_SECS",
                DEFAULT_FOOD_CACHE_TTL_SECS,
            )?),
            rate_limit: RateLimitConfig {
                max_requests: env_parse_or(
                    "PROVIDER_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                )?,
                window: Duration::from_secs(env_parse_or(
                    "PROVIDER_RATE_LIMIT_WINDOW_SECS",
                    DEFAULT_RATE_LIMIT_WINDOW_SECS,
                )?),
            },
            http_client: HttpClientConfig {
                timeout: Duration::from_secs(env_parse_or(
                    "HTTP_CLIENT_TIMEOUT_SECS",
                    DEFAULT_HTTP_TIMEOUT_SECS,
                )?),
                connect_timeout: Duration::from_secs(env_parse_or(
                    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                    DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
                )?),
            },
        })
    }
}

/// Server configuration loaded at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Comma-separated CORS origins, or `*`
    pub cors_allowed_origins: String,
    /// Nutrition service settings
    pub nutrition: NutritionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable is present but malformed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            http_port: env_parse_or("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            host: env_var_or("HOST", DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            nutrition: NutritionConfig::from_env()?,
        })
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line description for startup logs; never includes credentials
    #[must_use]
    pub fn summary(&self) -> String {
        let enabled = |on: bool| if on { "Enabled" } else { "Disabled" };
        format!(
            "GymFuel Server Configuration: environment={}, bind={}, usda={}, edamam={}, \
             cache_ttl={}s, rate_limit={}/{}s, http_timeout={}s",
            self.environment,
            self.bind_address(),
            enabled(self.nutrition.usda.has_credentials()),
            enabled(self.nutrition.edamam.has_credentials()),
            self.nutrition.cache_ttl.as_secs(),
            self.nutrition.rate_limit.max_requests,
            self.nutrition.rate_limit.window.as_secs(),
            self.nutrition.http_client.timeout.as_secs(),
        )
    }
}

/// Non-blank environment variable value
fn env_var_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env_var_opt(key).unwrap_or_else(|| default.to_owned())
}

/// Parse environment variable, using `default` when unset or blank
fn env_parse_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_var_opt(key).map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| AppError::config(format!("Invalid value for {key}: '{raw}' ({e})")))
    })
}
