// ABOUTME: HTTP middleware for the nutrition API router
// ABOUTME: Cross-origin configuration applied on top of request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
