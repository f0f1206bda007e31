//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a default, so an empty source set yields a
//! usable configuration.

pub mod logging;
pub mod transfer;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::transfer::TransferConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Download link and send settings.
    #[serde(default)]
    pub transfer: TransferConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `BONNENOTE_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from TOML files located in `dir`.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        Self::load_with(dir, env, environment())
    }

    fn load_with(
        dir: &str,
        env: &str,
        environment: config::Environment,
    ) -> Result<Self, AppError> {
        tracing::debug!(dir, env, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

/// Variables of the form `BONNENOTE_<SECTION>__<KEY>`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("BONNENOTE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
