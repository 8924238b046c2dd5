// ABOUTME: Fixed-window counter bounding outbound provider requests
// ABOUTME: Denials are soft: callers fall back immediately instead of waiting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::warn;

use crate::constants::cache::{DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_WINDOW_SECS};

/// Rate limiter thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    pub max_requests: u32,
    /// Window length
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        }
    }
}

#[derive(Debug)]
struct WindowState {
    count: u32,
    window_start: Instant,
}

/// Process-wide limiter shared by every provider adapter
///
/// Every check counts as an attempt, allowed or not. The counter resets once the
/// current window has fully elapsed.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    state: Mutex<WindowState>,
}

impl RateLimiter {
    /// Create a limiter with a fresh window starting now
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            state: Mutex::new(WindowState {
                count: 0,
                window_start: Instant::now(),
            }),
        }
    }

    /// Record an attempt and report whether it is within the limit
    pub async fn check_rate_limit(&self) -> bool {
        let mut state = self.state.lock().await;
        let now = Instant::now();
        if now.duration_since(state.window_start) >= self.config.window {
            state.window_start = now;
            state.count = 0;
        }
        state.count = state.count.saturating_add(1);
        let count = state.count;
        drop(state);

        let allowed = count <= self.config.max_requests;
        if !allowed {
            warn!(
                attempts = count,
                max_requests = self.config.max_requests,
                window_secs = self.config.window.as_secs(),
                "Provider rate limit reached, skipping network call"
            );
        }
        allowed
    }

    /// Attempts recorded in the current window
    pub async fn current_count(&self) -> u32 {
        self.state.lock().await.count
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
