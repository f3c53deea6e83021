//! Configuration for the Hygieia filtering service.

use std::env;
use std::path::PathBuf;

/// Hygieia configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (development, staging, production)
    pub environment: String,

    /// Path to the rule configuration file (JSON array of rule descriptions)
    pub rules_path: PathBuf,

    /// Path to the appointment record batch (JSON array of objects)
    pub records_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, with defaults matching
    /// the conventional file layout.
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            rules_path: PathBuf::from(
                env::var("RULES_CONFIG_PATH").unwrap_or_else(|_| "rules_config.json".to_string()),
            ),
            records_path: PathBuf::from(
                env::var("RECORDS_PATH").unwrap_or_else(|_| "data/samples.json".to_string()),
            ),
        }
    }
}
