// ABOUTME: HTTP router assembly for the GymFuel API
// ABOUTME: Mounts health and nutrition routes behind request tracing and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::constants::endpoints::NUTRITION_BASE;
use crate::middleware::setup_cors;
use crate::nutrition::NutritionService;

/// Health and readiness endpoints
pub mod health;
/// Food search, details, and calculation endpoints
pub mod nutrition;

pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

/// Full application router
#[must_use]
pub fn router(service: Arc<NutritionService>, cors_allowed_origins: &str) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&service)))
        .nest(NUTRITION_BASE, NutritionRoutes::routes(service))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(cors_allowed_origins))
}
