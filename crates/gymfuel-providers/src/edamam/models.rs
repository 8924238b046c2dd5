// ABOUTME: Edamam parser response wire types and their translation into FoodSearchResult
// ABOUTME: Nutrient codes ENERC_KCAL/PROCNT/CHOCDF/FAT/FIBTG/SUGAR are per 100 g
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use std::collections::HashSet;

use serde::Deserialize;

use crate::constants::providers::HUNDRED_GRAM_LABEL;
use crate::models::{FoodSearchResult, NutrientProfile, ServingSize};

/// `GET /parser` response body
#[derive(Debug, Default, Deserialize)]
pub struct EdamamParserResponse {
    /// Candidate foods, best match first
    #[serde(default)]
    pub hints: Vec<EdamamHint>,
}

/// One parser hint
#[derive(Debug, Deserialize)]
pub struct EdamamHint {
    /// The hinted food
    pub food: EdamamFood,
}

/// Food entry inside a hint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdamamFood {
    /// Edamam food id
    pub food_id: Option<String>,
    /// Display label
    #[serde(default)]
    pub label: String,
    /// Brand for packaged foods
    pub brand: Option<String>,
    /// Nutrients per 100 g
    #[serde(default)]
    pub nutrients: EdamamNutrients,
    /// Optional portion list
    #[serde(default)]
    pub serving_sizes: Vec<EdamamServingSize>,
}

/// Edamam nutrient codes
#[derive(Debug, Default, Deserialize)]
pub struct EdamamNutrients {
    /// Energy, kcal
    #[serde(rename = "ENERC_KCAL")]
    pub energy_kcal: Option<f64>,
    /// Protein, g
    #[serde(rename = "PROCNT")]
    pub protein: Option<f64>,
    /// Carbohydrate, g
    #[serde(rename = "CHOCDF")]
    pub carbs: Option<f64>,
    /// Total fat, g
    #[serde(rename = "FAT")]
    pub fat: Option<f64>,
    /// Fiber, g
    #[serde(rename = "FIBTG")]
    pub fiber: Option<f64>,
    /// Sugars, g
    #[serde(rename = "SUGAR")]
    pub sugar: Option<f64>,
}

/// Portion as reported by Edamam
#[derive(Debug, Deserialize)]
pub struct EdamamServingSize {
    /// Portion label
    #[serde(default)]
    pub label: String,
    /// Portion quantity
    #[serde(default)]
    pub quantity: f64,
}

impl EdamamNutrients {
    fn profile(&self) -> NutrientProfile {
        let v = |value: Option<f64>| value.unwrap_or(0.0);
        NutrientProfile::new(
            v(self.energy_kcal),
            v(self.protein),
            v(self.carbs),
            v(self.fat),
            v(self.fiber),
            v(self.sugar),
        )
    }
}

impl EdamamFood {
    /// Translate into the common result shape, `None` when no id can be derived
    #[must_use]
    pub fn into_result(self) -> Option<FoodSearchResult> {
        let label = self.label.trim().to_owned();
        let food_id = FoodSearchResult::resolve_food_id(self.food_id.as_deref(), &label)?;

        let mut serving_sizes = vec![ServingSize::hundred_grams()];
        serving_sizes.extend(
            self.serving_sizes
                .into_iter()
                .filter(|size| {
                    let label = size.label.trim();
                    !label.is_empty()
                        && !label.eq_ignore_ascii_case(HUNDRED_GRAM_LABEL)
                        && size.quantity.is_finite()
                        && size.quantity > 0.0
                })
                .map(|size| ServingSize::new(size.label.trim(), size.quantity)),
        );

        Some(FoodSearchResult {
            food_id,
            label,
            brand: self
                .brand
                .map(|brand| brand.trim().to_owned())
                .filter(|brand| !brand.is_empty()),
            nutrients: self.nutrients.profile(),
            serving_sizes,
        })
    }
}

impl EdamamParserResponse {
    /// Translate every hint, keeping the first occurrence of each `foodId`
    #[must_use]
    pub fn into_results(self) -> Vec<FoodSearchResult> {
        let mut seen = HashSet::new();
        self.hints
            .into_iter()
            .filter_map(|hint| hint.food.into_result())
            .filter(|food| seen.insert(food.food_id.clone()))
            .collect()
    }
}
