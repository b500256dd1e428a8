//! # inquest-config
//!
//! Layered configuration loading for Inquest using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`INQUEST_*` prefix, `__` as separator)
//! 2. Project-level `.inquest/config.toml`
//! 3. User-level `~/.config/inquest/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `INQUEST_PARSER__REPAIR` -> `parser.repair`,
//! `INQUEST_REPORT__PLACEHOLDER` -> `report.placeholder`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use inquest_config::InquestConfig;
//!
//! let config = InquestConfig::load_with_dotenv().expect("config");
//! println!("title cap: {}", config.normalizer.title_max_chars);
//! ```

mod error;
mod normalizer;
mod parser;
mod report;

pub use error::ConfigError;
pub use normalizer::{MIN_TITLE_MAX_CHARS, NormalizerConfig};
pub use parser::ParserConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InquestConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl InquestConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction or validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and hosts can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".inquest/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("INQUEST_").split("__"))
    }

    /// Reject values that would break downstream invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normalizer.title_max_chars < MIN_TITLE_MAX_CHARS {
            return Err(ConfigError::InvalidValue {
                field: "normalizer.title_max_chars".to_string(),
                reason: format!(
                    "must be at least {MIN_TITLE_MAX_CHARS}, got {}",
                    self.normalizer.title_max_chars
                ),
            });
        }
        if self.report.placeholder.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.placeholder".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("inquest").join("config.toml"))
    }
}
