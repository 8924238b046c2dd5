// ABOUTME: Common food result shape produced by every nutrition provider
// ABOUTME: FoodSearchResult, NutrientProfile, ServingSize, and deterministic id synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use serde::{Deserialize, Serialize};

use crate::constants::providers::HUNDRED_GRAM_LABEL;
use crate::constants::units::NUTRIENT_BASIS_GRAMS;

/// Macronutrient profile for one serving basis (per 100 g for all bundled providers)
///
/// Every field defaults to `0.0`; providers that omit a nutrient never produce `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientProfile {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Dietary fiber in grams
    pub fiber: f64,
    /// Sugars in grams
    pub sugar: f64,
}

impl NutrientProfile {
    /// Build a profile, clamping negative or non-finite inputs to zero
    #[must_use]
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64, sugar: f64) -> Self {
        Self {
            calories: sanitize(calories),
            protein: sanitize(protein),
            carbs: sanitize(carbs),
            fat: sanitize(fat),
            fiber: sanitize(fiber),
            sugar: sanitize(sugar),
        }
    }

    /// Apply `f` to every nutrient field
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
            fiber: f(self.fiber),
            sugar: f(self.sugar),
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// A selectable portion of a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    /// Display label, e.g. "1 medium" or "100g"
    pub label: String,
    /// Portion weight in grams
    pub quantity: f64,
}

impl ServingSize {
    /// Create a serving size
    pub fn new(label: impl Into<String>, quantity: f64) -> Self {
        Self {
            label: label.into(),
            quantity,
        }
    }

    /// The per-100g reference portion
    #[must_use]
    pub fn hundred_grams() -> Self {
        Self::new(HUNDRED_GRAM_LABEL, NUTRIENT_BASIS_GRAMS)
    }
}

/// Food entry in the shape every provider must produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchResult {
    /// Stable identifier: provider native ID, or a slug of the label
    pub food_id: String,
    /// Human-readable food name
    pub label: String,
    /// Brand, for branded products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Nutrients per serving basis
    pub nutrients: NutrientProfile,
    /// Selectable portions, in display order
    pub serving_sizes: Vec<ServingSize>,
}

impl FoodSearchResult {
    /// Resolve the food ID, synthesizing one from the label when the provider gave none
    ///
    /// Returns `None` only when both the native ID and the label are blank.
    #[must_use]
    pub fn resolve_food_id(native_id: Option<&str>, label: &str) -> Option<String> {
        match native_id.map(str::trim) {
            Some(id) if !id.is_empty() => Some(id.to_owned()),
            _ => {
                let slug = slugify_label(label);
                (!slug.is_empty()).then_some(slug)
            }
        }
    }
}

/// Deterministic slug of a food label: lowercase ASCII alphanumerics joined by `-`
///
/// `"Greek Yogurt, Plain"` becomes `"greek-yogurt-plain"`.
#[must_use]
pub fn slugify_label(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_label() {
        assert_eq!(slugify_label("Greek Yogurt, Plain"), "greek-yogurt-plain");
        assert_eq!(slugify_label("  Chicken   Breast "), "chicken-breast");
        assert_eq!(slugify_label("100% Whole-Wheat"), "100-whole-wheat");
        assert_eq!(slugify_label("!!!"), "");
    }

    #[test]
    fn test_resolve_food_id_prefers_native_id() {
        assert_eq!(
            FoodSearchResult::resolve_food_id(Some("food_abc"), "Apple"),
            Some("food_abc".to_owned())
        );
        assert_eq!(
            FoodSearchResult::resolve_food_id(Some("  "), "Apple Pie"),
            Some("apple-pie".to_owned())
        );
        assert_eq!(FoodSearchResult::resolve_food_id(None, "???"), None);
    }

    #[test]
    fn test_nutrient_profile_sanitizes_inputs() {
        let profile = NutrientProfile::new(-5.0, f64::NAN, 10.0, f64::INFINITY, 0.5, 2.0);
        assert_eq!(profile, NutrientProfile::new(0.0, 0.0, 10.0, 0.0, 0.5, 2.0));
    }

    #[test]
    fn test_food_result_serializes_camel_case() {
        let food = FoodSearchResult {
            food_id: "banana".to_owned(),
            label: "Banana".to_owned(),
            brand: None,
            nutrients: NutrientProfile::default(),
            serving_sizes: vec![ServingSize::new("1 medium", 118.0)],
        };
        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["foodId"], "banana");
        assert_eq!(json["servingSizes"][0]["quantity"], 118.0);
        assert!(json.get("brand").is_none());
    }

    #[test]
    fn test_missing_nutrients_deserialize_to_zero() {
        let profile: NutrientProfile = serde_json::from_str(r#"{"calories": 52}"#).unwrap();
        assert!((profile.calories - 52.0).abs() < f64::EPSILON);
        assert!(profile.fiber.abs() < f64::EPSILON);
    }
}
