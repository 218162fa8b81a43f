//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Remote PCB Point API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Where the bearer token lives between runs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub token_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    /// Show supervisor permission-gated links at all
    pub permission_links: bool,
    /// Keep the syllabus in memory after the first fetch
    pub syllabus_cache: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("pcbpoint")
    }

    /// Load settings from a specific file (extension optional) layered over defaults
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("PCBPOINT").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PcbPointError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let token_path = dirs::home_dir()
            .map(|home| home.join(".pcbpoint").join("token"))
            .unwrap_or_else(|| PathBuf::from(".pcbpoint-token"));

        Self {
            api: ApiConfig {
                base_url: "https://api.pcbpoint.in".to_string(),
                timeout_seconds: 15,
                user_agent: format!("pcbpoint-admin/{}", env!("CARGO_PKG_VERSION")),
            },
            session: SessionConfig { token_path },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
            features: FeaturesConfig {
                permission_links: true,
                syllabus_cache: true,
            },
        }
    }
}
