// ABOUTME: Static vocabulary of common foods used when every provider is unavailable
// ABOUTME: Matches queries by bidirectional substring against lowercase food names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use crate::models::{FoodSearchResult, NutrientProfile, ServingSize};
use crate::provider::normalize_query;

/// One row of the fallback vocabulary, per 100 g
struct FallbackFood {
    key: &'static str,
    food_id: &'static str,
    label: &'static str,
    nutrients: [f64; 6],
    serving: (&'static str, f64),
}

impl FallbackFood {
    fn to_result(&self) -> FoodSearchResult {
        let [calories, protein, carbs, fat, fiber, sugar] = self.nutrients;
        FoodSearchResult {
            food_id: self.food_id.to_owned(),
            label: self.label.to_owned(),
            brand: None,
            nutrients: NutrientProfile::new(calories, protein, carbs, fat, fiber, sugar),
            serving_sizes: vec![ServingSize::new(self.serving.0, self.serving.1)],
        }
    }

    fn matches(&self, normalized_query: &str) -> bool {
        normalized_query.contains(self.key) || self.key.contains(normalized_query)
    }
}

// kcal, protein, carbs, fat, fiber, sugar
const FALLBACK_FOODS: &[FallbackFood] = &[
    FallbackFood {
        key: "chicken breast",
        food_id: "chicken-breast",
        label: "Chicken Breast",
        nutrients: [165.0, 31.0, 0.0, 3.6, 0.0, 0.0],
        serving: ("1 breast", 172.0),
    },
    FallbackFood {
        key: "rice",
        food_id: "rice",
        label: "White Rice (cooked)",
        nutrients: [130.0, 2.7, 28.0, 0.3, 0.4, 0.1],
        serving: ("1 cup", 158.0),
    },
    FallbackFood {
        key: "banana",
        food_id: "banana",
        label: "Banana",
        nutrients: [89.0, 1.1, 23.0, 0.3, 2.6, 12.0],
        serving: ("1 medium", 118.0),
    },
    FallbackFood {
        key: "egg",
        food_id: "egg",
        label: "Egg",
        nutrients: [155.0, 13.0, 1.1, 11.0, 0.0, 1.1],
        serving: ("1 large", 50.0),
    },
    FallbackFood {
        key: "oatmeal",
        food_id: "oatmeal",
        label: "Oatmeal (cooked)",
        nutrients: [68.0, 2.4, 12.0, 1.4, 1.7, 0.5],
        serving: ("1 cup", 234.0),
    },
];

/// Every vocabulary entry whose name contains the query or is contained by it
///
/// Blank queries match nothing.
#[must_use]
pub fn search(query: &str) -> Vec<FoodSearchResult> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return Vec::new();
    }
    FALLBACK_FOODS
        .iter()
        .filter(|food| food.matches(&normalized))
        .map(FallbackFood::to_result)
        .collect()
}

/// Resolve a vocabulary entry by its `foodId`
#[must_use]
pub fn find_by_id(food_id: &str) -> Option<FoodSearchResult> {
    let food_id = food_id.trim();
    FALLBACK_FOODS
        .iter()
        .find(|food| food.food_id.eq_ignore_ascii_case(food_id))
        .map(FallbackFood::to_result)
}
