// ABOUTME: Mass conversion constants used when scaling nutrients to a portion
// ABOUTME: All factors convert to grams, the basis of provider nutrient data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// Nutrient values are reported per this many grams
pub const NUTRIENT_BASIS_GRAMS: f64 = 100.0;

/// Grams per kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Grams per milligram
pub const GRAMS_PER_MG: f64 = 0.001;

/// Grams per avoirdupois ounce
pub const GRAMS_PER_OZ: f64 = 28.349_523;

/// Grams per avoirdupois pound
pub const GRAMS_PER_LB: f64 = 453.592_37;
