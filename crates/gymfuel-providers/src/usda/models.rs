// ABOUTME: USDA FoodData Central wire types and their translation into FoodSearchResult
// ABOUTME: Handles both the search nutrient shape and the details nutrient shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use serde::Deserialize;

use crate::models::{FoodSearchResult, NutrientProfile, ServingSize};

/// `GET /foods/search` response body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaSearchResponse {
    /// Matching foods; absent when USDA found nothing
    #[serde(default)]
    pub foods: Vec<UsdaFood>,
}

/// One USDA food, from either the search or the details endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaFood {
    /// `FoodData` Central ID
    pub fdc_id: Option<u64>,
    /// Food description, used as the label
    #[serde(default)]
    pub description: String,
    /// Brand owner (branded foods)
    pub brand_owner: Option<String>,
    /// Brand name (branded foods)
    pub brand_name: Option<String>,
    /// Household serving weight
    pub serving_size: Option<f64>,
    /// Unit of `serving_size` (`g`, `GRM`, `ml`, ...)
    pub serving_size_unit: Option<String>,
    /// Nutrient amounts per 100 g
    #[serde(default)]
    pub food_nutrients: Vec<UsdaNutrient>,
}

/// A nutrient row
///
/// Search results carry `nutrientName`/`value`/`unitName`; the details endpoint
/// nests the name under `nutrient` and reports `amount`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaNutrient {
    /// Flat nutrient name (search shape)
    pub nutrient_name: Option<String>,
    /// Flat amount (search shape)
    pub value: Option<f64>,
    /// Flat unit (search shape)
    pub unit_name: Option<String>,
    /// Nested descriptor (details shape)
    pub nutrient: Option<UsdaNutrientRef>,
    /// Nested amount (details shape)
    pub amount: Option<f64>,
}

/// Nested nutrient descriptor on the details endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaNutrientRef {
    /// Nutrient name
    #[serde(default)]
    pub name: String,
    /// Nutrient unit
    pub unit_name: Option<String>,
}

impl UsdaNutrient {
    fn name(&self) -> Option<&str> {
        self.nutrient_name
            .as_deref()
            .or_else(|| self.nutrient.as_ref().map(|n| n.name.as_str()))
    }

    fn unit(&self) -> Option<&str> {
        self.unit_name
            .as_deref()
            .or_else(|| self.nutrient.as_ref().and_then(|n| n.unit_name.as_deref()))
    }

    fn quantity(&self) -> Option<f64> {
        self.value.or(self.amount)
    }
}

#[derive(Clone, Copy)]
enum Field {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
}

fn classify(nutrient: &UsdaNutrient) -> Option<Field> {
    let name = nutrient.name()?.to_lowercase();
    if name.contains("energy") {
        let is_kilojoules = nutrient
            .unit()
            .is_some_and(|unit| unit.eq_ignore_ascii_case("kj"));
        return (!is_kilojoules).then_some(Field::Calories);
    }
    if name.contains("protein") {
        Some(Field::Protein)
    } else if name.contains("carbohydrate") || name.contains("carb") {
        Some(Field::Carbs)
    } else if name.contains("fat") && !name.contains("saturated") {
        Some(Field::Fat)
    } else if name.contains("fiber") {
        Some(Field::Fiber)
    } else if name.contains("sugar") {
        Some(Field::Sugar)
    } else {
        None
    }
}

/// Map USDA nutrient rows onto a profile; the first row matching each field wins
#[must_use]
pub fn extract_nutrients(rows: &[UsdaNutrient]) -> NutrientProfile {
    let mut found: [Option<f64>; 6] = [None; 6];
    for row in rows {
        let (Some(field), Some(amount)) = (classify(row), row.quantity()) else {
            continue;
        };
        let slot = &mut found[field as usize];
        if slot.is_none() {
            *slot = Some(amount);
        }
    }
    let [calories, protein, carbs, fat, fiber, sugar] = found.map(|v| v.unwrap_or(0.0));
    NutrientProfile::new(calories, protein, carbs, fat, fiber, sugar)
}

fn is_gram_unit(unit: &str) -> bool {
    matches!(unit.trim().to_ascii_lowercase().as_str(), "g" | "grm" | "gram" | "grams")
}

fn serving_sizes(food: &UsdaFood) -> Vec<ServingSize> {
    let mut sizes = vec![ServingSize::hundred_grams()];
    if let (Some(size), Some(unit)) = (food.serving_size, food.serving_size_unit.as_deref()) {
        if size.is_finite() && size > 0.0 && is_gram_unit(unit) {
            sizes.push(ServingSize::new(
                format!("1 serving ({size}g)"),
                size,
            ));
        }
    }
    sizes
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

impl UsdaFood {
    /// Translate into the common result shape
    ///
    /// Returns `None` when the food has neither an id nor a usable description.
    #[must_use]
    pub fn into_result(self) -> Option<FoodSearchResult> {
        let label = self.description.trim().to_owned();
        let native_id = self.fdc_id.map(|id| id.to_string());
        let food_id = FoodSearchResult::resolve_food_id(native_id.as_deref(), &label)?;
        let brand = non_blank(self.brand_owner.as_deref())
            .or_else(|| non_blank(self.brand_name.as_deref()));
        let serving_sizes = serving_sizes(&self);
        Some(FoodSearchResult {
            food_id,
            label,
            brand,
            nutrients: extract_nutrients(&self.food_nutrients),
            serving_sizes,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn food(value: serde_json::Value) -> UsdaFood {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_energy_maps_to_calories() {
        let result = food(json!({
            "fdcId": 171_077,
            "description": "Chicken, broiler, breast, meat only, cooked",
            "foodNutrients": [
                {"nutrientName": "Energy", "value": 165.0, "unitName": "KCAL"},
                {"nutrientName": "Protein", "value": 31.0, "unitName": "G"},
            ]
        }))
        .into_result()
        .unwrap();

        assert_eq!(result.food_id, "171077");
        assert!((result.nutrients.calories - 165.0).abs() < f64::EPSILON);
        assert!((result.nutrients.protein - 31.0).abs() < f64::EPSILON);
        assert!(result.nutrients.fiber.abs() < f64::EPSILON);
    }

    #[test]
    fn test_kilojoule_energy_is_skipped() {
        let nutrients = extract_nutrients(&food(json!({
            "foodNutrients": [
                {"nutrientName": "Energy", "value": 690.0, "unitName": "kJ"},
                {"nutrientName": "Energy", "value": 165.0, "unitName": "KCAL"},
            ]
        }))
        .food_nutrients);

        assert!((nutrients.calories - 165.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_saturated_fat_does_not_count_as_fat() {
        let nutrients = extract_nutrients(&food(json!({
            "foodNutrients": [
                {"nutrientName": "Fatty acids, total saturated", "value": 1.0},
                {"nutrientName": "Total lipid (fat)", "value": 3.6},
                {"nutrientName": "Carbohydrate, by difference", "value": 0.5},
                {"nutrientName": "Fiber, total dietary", "value": 0.2},
                {"nutrientName": "Sugars, total including NLEA", "value": 0.1},
            ]
        }))
        .food_nutrients);

        assert!((nutrients.fat - 3.6).abs() < f64::EPSILON);
        assert!((nutrients.carbs - 0.5).abs() < f64::EPSILON);
        assert!((nutrients.fiber - 0.2).abs() < f64::EPSILON);
        assert!((nutrients.sugar - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_match_wins() {
        let nutrients = extract_nutrients(&food(json!({
            "foodNutrients": [
                {"nutrientName": "Protein", "value": 10.0},
                {"nutrientName": "Protein, adjusted", "value": 99.0},
            ]
        }))
        .food_nutrients);

        assert!((nutrients.protein - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_details_nutrient_shape() {
        let nutrients = extract_nutrients(&food(json!({
            "foodNutrients": [
                {"nutrient": {"name": "Energy", "unitName": "kcal"}, "amount": 89.0},
                {"nutrient": {"name": "Sugars, total", "unitName": "g"}, "amount": 12.2},
            ]
        }))
        .food_nutrients);

        assert!((nutrients.calories - 89.0).abs() < f64::EPSILON);
        assert!((nutrients.sugar - 12.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serving_sizes_and_brand() {
        let result = food(json!({
            "fdcId": 2_000_001,
            "description": "Greek Yogurt",
            "brandOwner": "  ",
            "brandName": "Acme Dairy",
            "servingSize": 170.0,
            "servingSizeUnit": "GRM",
        }))
        .into_result()
        .unwrap();

        assert_eq!(result.brand.as_deref(), Some("Acme Dairy"));
        assert_eq!(
            result.serving_sizes,
            vec![
                ServingSize::hundred_grams(),
                ServingSize::new("1 serving (170g)", 170.0),
            ]
        );
    }

    #[test]
    fn test_non_gram_serving_is_not_listed() {
        let result = food(json!({
            "fdcId": 1,
            "description": "Milk",
            "servingSize": 240.0,
            "servingSizeUnit": "ml",
        }))
        .into_result()
        .unwrap();

        assert_eq!(result.serving_sizes, vec![ServingSize::hundred_grams()]);
    }

    #[test]
    fn test_missing_id_synthesizes_slug() {
        let result = food(json!({"description": "Greek Yogurt, Plain"}))
            .into_result()
            .unwrap();
        assert_eq!(result.food_id, "greek-yogurt-plain");

        assert!(food(json!({"description": "  "})).into_result().is_none());
    }
}
