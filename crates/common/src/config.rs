//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Every variable has a default,
//! so a bare environment yields a usable configuration.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!(
                "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Property name shown in the admin session
    pub property_name: String,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: LogFormat,

    /// Seed the session with sample content and rooms on startup
    pub seed_demo_content: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            property_name: "Hotelier".to_string(),
            rust_log: "hotelier=info,local=info".to_string(),
            log_format: LogFormat::default(),
            seed_demo_content: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Self::default();

        let config = Self {
            property_name: env::var("HOTELIER_PROPERTY").unwrap_or(defaults.property_name),
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            log_format: match env::var("LOG_FORMAT") {
                Ok(raw) => raw.parse()?,
                Err(_) => defaults.log_format,
            },
            seed_demo_content: match env::var("HOTELIER_SEED_DEMO") {
                Ok(raw) => parse_bool("HOTELIER_SEED_DEMO", &raw)?,
                Err(_) => defaults.seed_demo_content,
            },
        };

        tracing::debug!(
            property = %config.property_name,
            log_format = ?config.log_format,
            seed_demo_content = config.seed_demo_content,
            "Configuration loaded"
        );

        Ok(config)
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("{} must be a boolean, got '{}'", name, other)),
    }
}
