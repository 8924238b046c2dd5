// ABOUTME: Command-line food lookup against the same provider chain the server uses
// ABOUTME: Prints search results, food details, or portion nutrients as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFuel

//! # Food Lookup CLI
//!
//! ```bash
//! food-lookup search "greek yogurt"
//! food-lookup details 171077
//! food-lookup calc banana 2 "1 medium"
//! ```
//!
//! Credentials come from the same environment variables as the server. Logs go to
//! stderr so stdout stays valid JSON.

use std::env;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use gymfuel_server::{
    config::NutritionConfig,
    logging::{LogFormat, LoggingConfig},
    nutrition::NutritionService,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "food-lookup")]
#[command(about = "Look up foods through the GymFuel provider chain")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search foods by name
    Search {
        /// Free-text query
        query: String,
    },
    /// Show one food by id
    Details {
        /// USDA `fdcId` or fallback food id
        food_id: String,
    },
    /// Nutrients for a portion of a food
    Calc {
        /// Food id
        food_id: String,
        /// Portion amount
        quantity: f64,
        /// g, kg, mg, oz, lb, serving, or a serving label
        unit: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig {
        level: env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        format: LogFormat::Compact,
        ..LoggingConfig::from_env()
    }
    .init()?;

    let service = NutritionService::from_config(&NutritionConfig::from_env()?);

    let output = match cli.command {
        Command::Search { query } => {
            let outcome = service.search_food_with_source(&query).await;
            json!({ "query": query, "results": outcome.foods, "source": outcome.source })
        }
        Command::Details { food_id } => match service.get_food_details(&food_id).await {
            Some(food) => serde_json::to_value(food)?,
            None => bail!("Food {food_id} not found"),
        },
        Command::Calc {
            food_id,
            quantity,
            unit,
        } => match service.calculate_nutrition(&food_id, quantity, &unit).await? {
            Some(nutrients) => json!({
                "foodId": food_id,
                "quantity": quantity,
                "unit": unit,
                "nutrients": nutrients,
            }),
            None => bail!("Food {food_id} not found"),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
