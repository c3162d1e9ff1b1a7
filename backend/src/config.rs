//! Configuration management for the AgriDash platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix
//!
//! All external API credentials are injected here at construction time;
//! nothing in the codebase embeds a key literal.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// News API configuration
    pub news: NewsConfig,

    /// Government market-data API configuration
    pub market: MarketConfig,

    /// Generative AI configuration
    pub gemini: GeminiConfig,

    /// Pre-trained model artifacts
    pub models: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key; empty means the sentinel reading is served
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsConfig {
    /// News API endpoint
    pub api_endpoint: String,

    /// News API key; empty means an empty feed is served
    pub api_key: String,

    /// ISO language code for articles
    pub language: String,

    /// ISO country filter for articles
    pub country: String,

    /// Number of articles per fetch
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarketConfig {
    /// data.gov.in API endpoint
    pub api_endpoint: String,

    /// data.gov.in API key
    pub api_key: String,

    /// Resource id of the daily mandi-price dataset
    pub resource_id: String,

    /// Seconds the aggregated price board stays fresh
    pub cache_ttl_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Generative AI API endpoint
    pub api_endpoint: String,

    /// Generative AI API key
    pub api_key: String,

    /// Model used for the conversational assistant
    pub text_model: String,

    /// Model used for plant-disease image diagnosis
    pub vision_model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the exported crop recommendation model
    pub crop_model_path: String,

    /// Path to the exported fertilizer recommendation model
    pub fertilizer_model_path: String,

    /// Path to the reference dataset the categorical vocabularies are
    /// built from. Must be the same file the models were trained on.
    pub reference_dataset_path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default("weather.api_key", "")?
            .set_default("news.api_endpoint", "https://api.worldnewsapi.com")?
            .set_default("news.api_key", "")?
            .set_default("news.language", "en")?
            .set_default("news.country", "in")?
            .set_default("news.page_size", 20)?
            .set_default("market.api_endpoint", "https://api.data.gov.in/resource")?
            .set_default("market.api_key", "")?
            .set_default(
                "market.resource_id",
                "9ef84268-d588-465a-a308-a864a43d0070",
            )?
            .set_default("market.cache_ttl_seconds", 3600)?
            .set_default(
                "gemini.api_endpoint",
                "https://generativelanguage.googleapis.com",
            )?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.text_model", "gemini-2.5-flash")?
            .set_default("gemini.vision_model", "gemini-1.5-flash")?
            .set_default("models.crop_model_path", "model_artifacts/crop_model.json")?
            .set_default(
                "models.fertilizer_model_path",
                "model_artifacts/fertilizer_model.json",
            )?
            .set_default(
                "models.reference_dataset_path",
                "datasets/fertilizer_reference.csv",
            )?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
