// ABOUTME: Portion-to-gram conversion and per-100g nutrient scaling
// ABOUTME: Supports mass units plus a food's own serving-size labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use crate::constants::providers::HUNDRED_GRAM_LABEL;
use crate::constants::units::{
    GRAMS_PER_KG, GRAMS_PER_LB, GRAMS_PER_MG, GRAMS_PER_OZ, NUTRIENT_BASIS_GRAMS,
};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{FoodSearchResult, NutrientProfile, ServingSize};

/// Unit a portion quantity is expressed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasurementUnit {
    /// Grams
    Grams,
    /// Kilograms
    Kilograms,
    /// Milligrams
    Milligrams,
    /// Avoirdupois ounces
    Ounces,
    /// Avoirdupois pounds
    Pounds,
    /// The food's default serving
    Serving,
    /// A serving-size label of the food, e.g. `"1 medium"` or `"cup"`
    ServingLabel(String),
}

impl MeasurementUnit {
    /// Parse a unit name; names that are not mass units are treated as serving labels
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is blank
    pub fn parse(unit: &str) -> AppResult<Self> {
        let trimmed = unit.trim();
        if trimmed.is_empty() {
            return Err(AppError::missing_field("unit"));
        }
        Ok(match trimmed.to_lowercase().as_str() {
            "g" | "gram" | "grams" => Self::Grams,
            "kg" | "kilogram" | "kilograms" => Self::Kilograms,
            "mg" | "milligram" | "milligrams" => Self::Milligrams,
            "oz" | "ounce" | "ounces" => Self::Ounces,
            "lb" | "lbs" | "pound" | "pounds" => Self::Pounds,
            "serving" | "servings" => Self::Serving,
            _ => Self::ServingLabel(trimmed.to_owned()),
        })
    }

    /// Convert `quantity` of this unit into grams of `food`
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when a serving label does not belong to the food
    pub fn to_grams(&self, quantity: f64, food: &FoodSearchResult) -> AppResult<f64> {
        let per_unit = match self {
            Self::Grams => 1.0,
            Self::Kilograms => GRAMS_PER_KG,
            Self::Milligrams => GRAMS_PER_MG,
            Self::Ounces => GRAMS_PER_OZ,
            Self::Pounds => GRAMS_PER_LB,
            Self::Serving => default_serving(food).map_or(NUTRIENT_BASIS_GRAMS, |s| s.quantity),
            Self::ServingLabel(label) => find_serving(food, label)
                .map(|s| s.quantity)
                .ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "Unknown unit '{label}' for {}; use g, kg, mg, oz, lb, serving, or one of: {}",
                        food.label,
                        food.serving_sizes
                            .iter()
                            .map(|s| s.label.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })?,
        };
        Ok(quantity * per_unit)
    }
}

fn default_serving(food: &FoodSearchResult) -> Option<&ServingSize> {
    food.serving_sizes
        .iter()
        .find(|s| !s.label.eq_ignore_ascii_case(HUNDRED_GRAM_LABEL) && s.quantity > 0.0)
}

/// Match a serving label case-insensitively, with or without its leading count ("1 cup" / "cup")
fn find_serving<'a>(food: &'a FoodSearchResult, wanted: &str) -> Option<&'a ServingSize> {
    let wanted = wanted.trim().to_lowercase();
    food.serving_sizes.iter().find(|serving| {
        let label = serving.label.trim().to_lowercase();
        label == wanted || label.strip_prefix("1 ").is_some_and(|rest| rest.trim() == wanted)
    })
}

/// Reject quantities that are not finite and strictly positive
///
/// # Errors
///
/// Returns a value-out-of-range error for zero, negative, or non-finite quantities
pub fn validate_quantity(quantity: f64) -> AppResult<f64> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(quantity)
    } else {
        Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("Quantity must be a positive number, got {quantity}"),
        ))
    }
}

/// Scale a per-100g profile to `grams`, rounding each value to one decimal
#[must_use]
pub fn scale_per_100g(nutrients: NutrientProfile, grams: f64) -> NutrientProfile {
    let factor = grams / NUTRIENT_BASIS_GRAMS;
    nutrients.map(|value| round_to_tenth(value * factor))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Nutrients for `quantity unit` of `food`
///
/// # Errors
///
/// Returns an error when the quantity is invalid, the unit cannot be resolved,
/// or the portion is too large to represent
pub fn nutrients_for_portion(
    food: &FoodSearchResult,
    quantity: f64,
    unit: &str,
) -> AppResult<NutrientProfile> {
    let quantity = validate_quantity(quantity)?;
    let grams = MeasurementUnit::parse(unit)?.to_grams(quantity, food)?;
    let scaled = scale_per_100g(food.nutrients, grams);
    if grams.is_finite() && is_finite_profile(&scaled) {
        Ok(scaled)
    } else {
        Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("Portion of {quantity} {unit} is too large"),
        ))
    }
}

fn is_finite_profile(nutrients: &NutrientProfile) -> bool {
    [
        nutrients.calories,
        nutrients.protein,
        nutrients.carbs,
        nutrients.fat,
        nutrients.fiber,
        nutrients.sugar,
    ]
    .iter()
    .all(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> FoodSearchResult {
        FoodSearchResult {
            food_id: "banana".into(),
            label: "Banana".into(),
            brand: None,
            nutrients: NutrientProfile::new(89.0, 1.1, 23.0, 0.3, 2.6, 12.0),
            serving_sizes: vec![
                ServingSize::hundred_grams(),
                ServingSize::new("1 medium", 118.0),
            ],
        }
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(MeasurementUnit::parse("G").unwrap(), MeasurementUnit::Grams);
        assert_eq!(MeasurementUnit::parse(" lbs ").unwrap(), MeasurementUnit::Pounds);
        assert_eq!(MeasurementUnit::parse("servings").unwrap(), MeasurementUnit::Serving);
        assert_eq!(
            MeasurementUnit::parse("1 Medium").unwrap(),
            MeasurementUnit::ServingLabel("1 Medium".into())
        );
        assert!(MeasurementUnit::parse("  ").is_err());
    }

    #[test]
    fn test_overflowing_portion_is_out_of_range() {
        let error = nutrients_for_portion(&banana(), 1e308, "lb").unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);

        let error = nutrients_for_portion(&banana(), f64::MAX, "g").unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_grams_scale_linearly() {
        let result = nutrients_for_portion(&banana(), 200.0, "g").unwrap();
        assert!((result.calories - 178.0).abs() < 1e-9);
        assert!((result.sugar - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_serving_uses_first_non_100g_entry() {
        let result = nutrients_for_portion(&banana(), 1.0, "serving").unwrap();
        // 89 * 1.18 = 105.02
        assert!((result.calories - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_serving_without_household_portion_is_100g() {
        let mut food = banana();
        food.serving_sizes = vec![ServingSize::hundred_grams()];
        let result = nutrients_for_portion(&food, 2.0, "serving").unwrap();
        assert!((result.calories - 178.0).abs() < 1e-9);
    }

    #[test]
    fn test_serving_label_matches_with_or_without_count() {
        let full = nutrients_for_portion(&banana(), 2.0, "1 MEDIUM").unwrap();
        let bare = nutrients_for_portion(&banana(), 2.0, "medium").unwrap();
        assert_eq!(full, bare);
        assert!((full.calories - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_mass_conversions() {
        let oz = nutrients_for_portion(&banana(), 1.0, "oz").unwrap();
        assert!((oz.calories - 25.2).abs() < 1e-9);
        let kg = nutrients_for_portion(&banana(), 0.5, "kg").unwrap();
        assert!((kg.calories - 445.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_quantity_and_unknown_unit() {
        let err = nutrients_for_portion(&banana(), 0.0, "g").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(nutrients_for_portion(&banana(), f64::NAN, "g").is_err());

        let err = nutrients_for_portion(&banana(), 1.0, "slice").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("1 medium"));
    }
}
