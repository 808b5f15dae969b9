//! Application configuration
//!
//! The only recognised option is the API base URL. It is resolved once at
//! start-up and handed to every screen through [`crate::shared::api_client::ApiClient`].

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
base_url = "http://localhost:8698"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("base_url must not be empty")]
    EmptyBaseUrl,
}

impl AppConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let raw: AppConfig = toml::from_str(contents)?;
        Self::new(&raw.base_url)
    }

    /// Absolute URL for an API path such as `/teachers`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Resolve configuration.
///
/// Search order:
/// 1. `TEACHER_ADMIN_API_BASE` captured at build time
/// 2. Embedded default config
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if let Some(base_url) = option_env!("TEACHER_ADMIN_API_BASE") {
        log::info!("Using API base from build environment: {}", base_url);
        return AppConfig::new(base_url);
    }

    log::info!("Using default embedded configuration");
    AppConfig::from_toml(DEFAULT_CONFIG)
}
