// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Lets browser clients of the gym app call the nutrition API directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer from a `CORS_ALLOWED_ORIGINS` value
///
/// `*` or an empty value allows any origin; otherwise the comma-separated list is
/// used. Unparseable entries are skipped, and a list with no valid entries falls back
/// to any origin.
#[must_use]
pub fn setup_cors(allowed_origins: &str) -> CorsLayer {
    let allowed_origins = allowed_origins.trim();
    let allow_origin = if allowed_origins.is_empty() || allowed_origins == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
