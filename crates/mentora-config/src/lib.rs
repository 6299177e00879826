//! # mentora-config
//!
//! Layered configuration loading for Mentora using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MENTORA_*` prefix, `__` as separator)
//! 2. Project-level `.mentora/config.toml`
//! 3. User-level `~/.config/mentora/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MENTORA_ASSIGNMENT__DEFAULT_STRATEGY` -> `assignment.default_strategy`,
//! `MENTORA_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mentora_config::MentoraConfig;
//!
//! let config = MentoraConfig::load_with_dotenv().expect("config");
//! println!("strategy: {}", config.assignment.default_strategy);
//! ```

mod assignment;
mod error;
mod general;

pub use assignment::AssignmentConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MentoraConfig {
    #[serde(default)]
    pub assignment: AssignmentConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MentoraConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration for the project rooted at `project_root`, reading
    /// its `.mentora/config.toml` instead of the one under the current
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::project_figment(project_root))
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.assignment.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::project_figment(Path::new(""))
    }

    /// Build the provider chain with the project layer read from
    /// `<project_root>/.mentora/config.toml`.
    #[must_use]
    pub fn project_figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(".mentora").join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MENTORA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mentora").join("config.toml"))
    }
}
