// ABOUTME: HTTP server binary for the GymFuel nutrition API
// ABOUTME: Loads configuration from the environment, initializes logging, and serves the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

//! # GymFuel Server Binary
//!
//! Serves food search, details, and portion calculation over HTTP.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gymfuel_server::{config::ServerConfig, logging, nutrition::NutritionService, routes};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "gymfuel-server")]
#[command(about = "GymFuel nutrition API - food search backed by USDA and Edamam")]
struct Args {
    /// Override HTTP port (`HTTP_PORT`)
    #[arg(long)]
    port: Option<u16>,

    /// Override bind host (`HOST`)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    info!("{}", config.summary());

    let service = Arc::new(NutritionService::from_config(&config.nutrition));
    let app = routes::router(service, &config.cors_allowed_origins);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(address = %address, "GymFuel server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("GymFuel server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
