// ABOUTME: Core data models shared by providers, the lookup service, and the API
// ABOUTME: Re-exports the common food result shape and its nutrient profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// Food search result, nutrient profile, and serving size models
pub mod food;

pub use food::{slugify_label, FoodSearchResult, NutrientProfile, ServingSize};
