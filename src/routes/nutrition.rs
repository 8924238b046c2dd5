// ABOUTME: Nutrition REST handlers: food search, food details, and portion calculation
// ABOUTME: Validates request input before it reaches the provider chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::constants::search::MIN_QUERY_LEN;
use crate::errors::{AppError, AppResult};
use crate::models::{FoodSearchResult, NutrientProfile};
use crate::nutrition::{LookupSource, NutritionService};

/// `GET /search` query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text food query
    pub q: Option<String>,
}

/// `GET /search` response body
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Query as received, trimmed
    pub query: String,
    /// Matching foods
    pub results: Vec<FoodSearchResult>,
    /// Lookup stage that answered
    pub source: LookupSource,
}

/// `POST /calculate` request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// Food to scale
    pub food_id: String,
    /// Portion amount
    pub quantity: f64,
    /// Portion unit (mass unit, `serving`, or a serving label)
    pub unit: String,
}

/// `POST /calculate` response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// Food that was scaled
    pub food_id: String,
    /// Portion amount
    pub quantity: f64,
    /// Portion unit
    pub unit: String,
    /// Nutrients for the portion
    pub nutrients: NutrientProfile,
}

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Routes relative to the nutrition base path
    #[must_use]
    pub fn routes(service: Arc<NutritionService>) -> Router {
        Router::new()
            .route("/search", get(search_handler))
            .route("/foods/:food_id", get(food_details_handler))
            .route("/calculate", post(calculate_handler))
            .with_state(service)
    }
}

async fn search_handler(
    State(service): State<Arc<NutritionService>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let query = params
        .q
        .ok_or_else(|| AppError::missing_field("q"))?
        .trim()
        .to_owned();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(AppError::invalid_input(format!(
            "Search query must be at least {MIN_QUERY_LEN} characters"
        )));
    }

    let outcome = service.search_food_with_source(&query).await;
    Ok(Json(SearchResponse {
        query,
        results: outcome.foods,
        source: outcome.source,
    }))
}

async fn food_details_handler(
    State(service): State<Arc<NutritionService>>,
    Path(food_id): Path<String>,
) -> AppResult<Json<FoodSearchResult>> {
    service
        .get_food_details(&food_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Food {food_id}")))
}

async fn calculate_handler(
    State(service): State<Arc<NutritionService>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> AppResult<Json<CalculateResponse>> {
    let Json(request) =
        payload.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
    if request.food_id.trim().is_empty() {
        return Err(AppError::missing_field("foodId"));
    }

    let nutrients = service
        .calculate_nutrition(&request.food_id, request.quantity, &request.unit)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Food {}", request.food_id)))?;

    Ok(Json(CalculateResponse {
        food_id: request.food_id,
        quantity: request.quantity,
        unit: request.unit,
        nutrients,
    }))
}
