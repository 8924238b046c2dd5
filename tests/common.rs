// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, local fixture servers, and provider resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `gymfuel_server`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use axum::Router;
use gymfuel_server::providers::{HttpClientConfig, ProviderResources, RateLimitConfig};
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Counts requests that reached a fixture server
#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Serve `router` on an ephemeral localhost port and return its base URL
pub async fn spawn_fixture_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let address = listener.local_addr().expect("fixture address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fixture server");
    });
    format!("http://{address}")
}

/// Fresh client, cache, and limiter with the given request budget
pub fn test_resources(max_requests: u32) -> ProviderResources {
    ProviderResources::from_settings(
        &HttpClientConfig {
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        },
        Duration::from_secs(60),
        RateLimitConfig {
            max_requests,
            window: Duration::from_secs(60),
        },
    )
}

/// Base URL that refuses connections, for transport-failure tests
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";
