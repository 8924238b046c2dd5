// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness plus readiness with the credential state of each food provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

//! Health check routes for service monitoring

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::constants::endpoints::{HEALTH_CHECK, READY_CHECK};
use crate::nutrition::NutritionService;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    ///
    /// `/ready` always reports ready: providers without credentials degrade to the
    /// fallback table instead of failing, so it lists them as `configured: false`.
    #[must_use]
    pub fn routes(service: Arc<NutritionService>) -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(service): State<Arc<NutritionService>>,
        ) -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ready",
                "providers": service.provider_status(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route(HEALTH_CHECK, get(health_handler))
            .route(READY_CHECK, get(ready_handler))
            .with_state(service)
    }
}
