// ABOUTME: Failure types for a single provider HTTP exchange
// ABOUTME: Logged and absorbed by the adapters; never returned to lookup callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

use thiserror::Error;

/// Why a provider request produced no usable data
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider answered with a non-success status
    #[error("{provider} API returned HTTP {status}")]
    HttpStatus {
        /// Provider name
        provider: &'static str,
        /// HTTP status code
        status: u16,
    },
    /// Request never completed (DNS, connect, timeout, TLS)
    #[error("{provider} request failed: {source}")]
    Transport {
        /// Provider name
        provider: &'static str,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },
    /// Body was not the JSON shape the adapter expects
    #[error("{provider} response could not be decoded: {source}")]
    Decode {
        /// Provider name
        provider: &'static str,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },
}

impl ProviderError {
    /// Name of the provider that failed
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::HttpStatus { provider, .. }
            | Self::Transport { provider, .. }
            | Self::Decode { provider, .. } => provider,
        }
    }

    /// Send a request and decode its JSON body, classifying every failure
    pub(crate) async fn fetch_json<T: serde::de::DeserializeOwned>(
        provider: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, Self> {
        let response = request
            .send()
            .await
            .map_err(|source| Self::Transport { provider, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::HttpStatus {
                provider,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| Self::Decode { provider, source })
    }
}
