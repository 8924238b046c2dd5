// ABOUTME: Core types and constants for the GymFuel nutrition platform
// ABOUTME: Foundation crate with error handling, food models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

#![deny(unsafe_code)]

//! # GymFuel Core
//!
//! Foundation crate providing shared types and constants for the GymFuel
//! nutrition lookup service. Kept dependency-light so the provider crate and
//! the server crate can share it without pulling in the HTTP stack.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default TTLs, rate limits, provider endpoints, and units
//! - **models**: The common food shape every provider produces

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration defaults organized by domain
pub mod constants;

/// Food search result and nutrient models
pub mod models;
