// ABOUTME: Recipe catalog seeding utility for the Larder server
// ABOUTME: Inserts the built-in recipes and seasonal recipes, skipping existing ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Recipe catalog seeder.
//!
//! Usage:
//! ```bash
//! # Seed using DATABASE_URL from the environment
//! cargo run --bin seed-recipes
//!
//! # Override database URL
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/larder.db
//!
//! # Verbose output
//! cargo run --bin seed-recipes -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use larder_core::constants::{defaults, env_config};
use larder_server::config::DatabaseUrl;
use larder_server::database::{seed_catalog::seed_catalog, Database};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "Larder recipe catalog seeder",
    long_about = "Insert the built-in starter catalog of recipes and seasonal recipes"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    let database_url = args.database_url.unwrap_or_else(|| {
        env::var(env_config::DATABASE_URL).unwrap_or_else(|_| defaults::DATABASE_URL.to_owned())
    });
    let url = DatabaseUrl::parse_url(&database_url)?;

    info!("Connecting to database: {url}");
    let database = Database::new(&url).await?;

    let summary = seed_catalog(&database.recipes()).await?;

    info!("=== Seeding Complete ===");
    info!("Recipes created:          {}", summary.recipes_created);
    info!("Seasonal recipes created: {}", summary.seasonal_created);
    info!("Skipped (already exist):  {}", summary.skipped);

    database.close().await;
    Ok(())
}
