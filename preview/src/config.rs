//! Configuration management for the recipe preview
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, ...)
//! 3. Environment variable overrides with PIZZA_ prefix
//!    (e.g. `PIZZA_DISPLAY__LANGUAGE=en`)

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main preview configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// How the preview is rendered
    pub display: DisplayConfig,

    /// Where the pizza configuration comes from
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// "de" or "en"
    pub language: String,

    /// "metric" or "us"
    pub unit_system: String,

    /// "text" or "json"
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InputConfig {
    /// JSON file with raw form input; the default configuration is used without it
    pub configuration_path: Option<String>,

    /// Eating day for the default configuration (YYYY-MM-DD), tomorrow if unset
    pub eating_date: Option<String>,

    /// Fixed "now" (YYYY-MM-DDTHH:MM) for the start time check
    pub now: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("PIZZA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("display.language", "de")?
            .set_default("display.unit_system", "metric")?
            .set_default("display.format", "text")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PIZZA_ prefix)
            .add_source(
                Environment::with_prefix("PIZZA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
