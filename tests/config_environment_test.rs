// ABOUTME: Tests for environment-driven server and nutrition configuration
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::time::Duration;

use gymfuel_server::config::{Environment, NutritionConfig, ServerConfig};
use gymfuel_server::errors::ErrorCode;
use serial_test::serial;

const VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGINS",
    "USDA_API_KEY",
    "USDA_BASE_URL",
    "EDAMAM_APP_ID",
    "EDAMAM_API_KEY",
    "EDAMAM_BASE_URL",
    "FOOD_CACHE_TTL_SECS",
    "PROVIDER_RATE_LIMIT_MAX_REQUESTS",
    "PROVIDER_RATE_LIMIT_WINDOW_SECS",
    "HTTP_CLIENT_TIMEOUT_SECS",
    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors_allowed_origins, "*");
    assert!(config.nutrition.usda.api_key.is_none());
    assert_eq!(config.nutrition.usda.base_url, "https://api.nal.usda.gov/fdc/v1");
    assert!(!config.nutrition.edamam.has_credentials());
    assert_eq!(config.nutrition.cache_ttl, Duration::from_secs(1800));
    assert_eq!(config.nutrition.rate_limit.max_requests, 100);
    assert_eq!(config.nutrition.rate_limit.window, Duration::from_secs(60));
    assert_eq!(config.nutrition.http_client.timeout, Duration::from_secs(30));
    assert!(config.summary().contains("usda=Disabled"));
}

#[test]
#[serial]
fn test_values_are_read_from_environment() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("USDA_API_KEY", "usda-secret");
    env::set_var("EDAMAM_APP_ID", "edamam-app");
    env::set_var("EDAMAM_API_KEY", "edamam-secret");
    env::set_var("FOOD_CACHE_TTL_SECS", "60");
    env::set_var("PROVIDER_RATE_LIMIT_MAX_REQUESTS", "5");
    env::set_var("PROVIDER_RATE_LIMIT_WINDOW_SECS", "10");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert!(config.environment.is_production());
    assert_eq!(config.nutrition.usda.api_key.as_deref(), Some("usda-secret"));
    assert!(config.nutrition.edamam.has_credentials());
    assert_eq!(config.nutrition.cache_ttl, Duration::from_secs(60));
    assert_eq!(config.nutrition.rate_limit.max_requests, 5);
    assert_eq!(config.nutrition.rate_limit.window, Duration::from_secs(10));

    let summary = config.summary();
    assert!(summary.contains("edamam=Enabled"));
    assert!(!summary.contains("secret"));
}

#[test]
#[serial]
fn test_blank_credentials_count_as_absent() {
    clear_env();
    env::set_var("USDA_API_KEY", "   ");
    env::set_var("EDAMAM_APP_ID", "");

    let config = NutritionConfig::from_env().unwrap();
    clear_env();

    assert!(config.usda.api_key.is_none());
    assert!(!config.usda.has_credentials());
    assert!(config.edamam.app_id.is_none());
}

#[test]
#[serial]
fn test_malformed_number_is_config_error() {
    clear_env();
    env::set_var("FOOD_CACHE_TTL_SECS", "half an hour");

    let err = NutritionConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("FOOD_CACHE_TTL_SECS"));
}
