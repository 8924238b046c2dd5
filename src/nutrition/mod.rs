// ABOUTME: Nutrition lookup service and portion calculator
// ABOUTME: Orchestrates food providers and scales per-100g nutrients to portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// Unit conversion and nutrient scaling
pub mod calculator;
/// Provider chain orchestration
pub mod service;

pub use calculator::MeasurementUnit;
pub use service::{LookupSource, NutritionService, ProviderStatus, SearchOutcome};
