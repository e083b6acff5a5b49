//! # gpa-config
//!
//! Layered configuration loading for gpacert using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GPACERT_*` prefix, `__` as separator)
//! 2. Project-level `.gpacert/config.toml`
//! 3. User-level `~/.config/gpacert/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GPACERT_INSTITUTION__CITY` -> `institution.city`,
//! `GPACERT_GENERAL__SEED` -> `general.seed`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gpa_config::GpaConfig;
//!
//! let config = GpaConfig::load_with_dotenv().expect("config");
//! println!("certificates go to {}", config.certificate.output_dir);
//! ```

mod certificate;
mod error;
mod general;
mod institution;

pub use certificate::CertificateConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use institution::InstitutionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".gpacert/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GpaConfig {
    #[serde(default)]
    pub institution: InstitutionConfig,
    #[serde(default)]
    pub certificate: CertificateConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GpaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`GpaConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value fails
    /// [`GpaConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// See [`GpaConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = Path::new(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GPACERT_").split("__"))
    }

    /// Reject values that would produce an unusable certificate.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for a blank file prefix, no header lines,
    /// or a blank output directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.institution.file_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "institution.file_prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self
            .institution
            .header_lines
            .iter()
            .all(|line| line.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "institution.header_lines".to_string(),
                reason: "at least one non-empty line is required".to_string(),
            });
        }
        if self.certificate.output_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "certificate.output_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gpacert").join("config.toml"))
    }
}
