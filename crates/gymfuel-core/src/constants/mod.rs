// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for caching, provider access, units, and networking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Food cache and provider rate limit defaults
pub mod cache;
/// External food database endpoints and request parameters
pub mod providers;
/// Mass conversion factors for nutrition scaling
pub mod units;

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Nutrition API base path
    pub const NUTRITION_BASE: &str = "/api/nutrition";
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default outbound request timeout in seconds
    pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default outbound connect timeout in seconds
    pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Server binary service name
    pub const GYMFUEL_SERVER: &str = "gymfuel-server";
}

/// Search input limits enforced at the API boundary
pub mod search {
    /// Minimum trimmed query length accepted by the search endpoint
    pub const MIN_QUERY_LEN: usize = 2;
}
