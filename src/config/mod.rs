//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `DRAFTWISE` prefix and nested values
//! are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use draftwise::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing().expect("Failed to install subscriber");
//! ```

mod ai;
mod error;
mod logging;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

use crate::domain::foundation::Locale;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (OpenAI/Anthropic)
    #[serde(default)]
    pub ai: AiConfig,

    /// Requested display locale tag
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_locale() -> String {
    Locale::default().tag().to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `DRAFTWISE__*` variables:
    ///
    /// - `DRAFTWISE__AI__ANTHROPIC_API_KEY=...` -> `ai.anthropic_api_key`
    /// - `DRAFTWISE__LOCALE=es-ES` -> `locale`
    /// - `DRAFTWISE__LOGGING__JSON=true` -> `logging.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DRAFTWISE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Supported locale closest to the configured tag
    pub fn locale(&self) -> Locale {
        Locale::negotiate(&self.locale)
    }
}
