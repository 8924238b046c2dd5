// ABOUTME: Food cache and outbound rate limit defaults
// ABOUTME: Used when the environment does not override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

/// Food search cache TTL (30 minutes), the client-side caching window used across the app
pub const DEFAULT_FOOD_CACHE_TTL_SECS: u64 = 1_800;

/// Maximum outbound provider requests per rate limit window
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;

/// Rate limit window length in seconds
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
