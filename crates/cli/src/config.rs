//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SNEAKFIT_DATA_DIR` - Directory holding the keyed store's record files
//!   (default: `.sneakfit`)

use std::path::PathBuf;

use thiserror::Error;

/// Default record directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".sneakfit";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root directory of the file-backed keyed store.
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SNEAKFIT_DATA_DIR` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = match std::env::var("SNEAKFIT_DATA_DIR") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "SNEAKFIT_DATA_DIR",
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        Ok(Self { data_dir })
    }
}
