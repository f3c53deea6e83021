//! Hygieia - Appointment Filtering Service for Asclepius
//!
//! One-shot batch filter: loads a declarative rule configuration and an
//! appointment record batch, compiles the rules, and prints the records
//! that satisfy every active rule.

mod config;
mod loader;

use anyhow::Result;
use asclepius_rules::RuleEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hygieia=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hygieia Appointment Filter");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Environment: {}", config.environment);

    // Load and compile rules
    let descriptions = loader::load_rules(&config.rules_path).await?;
    tracing::info!(
        "Loaded {} rule descriptions from {:?}",
        descriptions.len(),
        config.rules_path
    );

    let engine = RuleEngine::from_configs(descriptions)?;
    for rule in engine.rules() {
        tracing::debug!(
            "Rule '{}' (priority {}): {}",
            rule.name(),
            rule.priority(),
            rule.describe()
        );
    }

    // Load the record batch
    let records = loader::load_records(&config.records_path).await?;
    tracing::info!(
        "Loaded {} appointment records from {:?}",
        records.len(),
        config.records_path
    );

    // Apply the full rule set
    let matched = engine.filter_records(&records);
    tracing::info!(
        "{} of {} records satisfy all rules",
        matched.len(),
        records.len()
    );

    println!("Matching appointments:");
    for record in matched {
        println!("{record}");
    }

    Ok(())
}
