// ABOUTME: External food database constants for USDA FoodData Central and Edamam
// ABOUTME: Base URLs, provider names, and fixed query parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// USDA provider name (also the cache key namespace)
pub const USDA: &str = "usda";

/// Edamam provider name (also the cache key namespace)
pub const EDAMAM: &str = "edamam";

/// USDA `FoodData` Central API base URL
pub const USDA_DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Edamam food database API base URL
pub const EDAMAM_DEFAULT_BASE_URL: &str = "https://api.edamam.com/api/food-database/v2";

/// Results requested per USDA search
pub const USDA_PAGE_SIZE: u32 = 20;

/// USDA data types included in searches
pub const USDA_DATA_TYPES: &str = "Foundation,Branded";

/// Label of the per-100g serving entry on USDA and Edamam results
pub const HUNDRED_GRAM_LABEL: &str = "100g";
