//! Configuration management.
//!
//! Settings come from an optional TOML file (`<config dir>/secexport/config.toml`
//! or `$SECEXPORT_CONFIG`) with environment overrides on top. A missing file
//! is not an error; every field has a default.
//!
//! ```toml
//! cache_dir = "/var/tmp/secexport"
//! region = "eu-west-1"
//! secrets_manager = true
//! parameter_store = false
//! work_factor = 18
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::core::cipher::Age;
use crate::core::constants;
use crate::error::{ConfigError, Result, StoreError};

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where records are kept. Defaults to `<user cache dir>/secexport`.
    pub cache_dir: Option<PathBuf>,
    /// AWS region for the secret backends. Defaults to the SDK provider chain.
    pub region: Option<String>,
    /// Query AWS Secrets Manager unless overridden on the command line.
    pub secrets_manager: bool,
    /// Query AWS SSM Parameter Store unless overridden on the command line.
    pub parameter_store: bool,
    /// log2 of the scrypt N parameter for new records.
    pub work_factor: Option<u8>,
    /// Largest work factor accepted when opening a record.
    pub max_work_factor: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: None,
            region: None,
            secrets_manager: true,
            parameter_store: true,
            work_factor: None,
            max_work_factor: None,
        }
    }
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(constants::ENV_CONFIG) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join(constants::APP_DIR).join(constants::CONFIG_FILE))
    }

    /// Load configuration from disk and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn load() -> Result<Self> {
        let mut config = match Self::path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::ReadFile { path, source })?;
                Self::from_toml(&contents)?
            }
            _ => {
                debug!("no config file, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Apply environment-style overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(constants::ENV_CACHE_DIR).filter(|s| !s.is_empty()) {
            self.cache_dir = Some(PathBuf::from(dir));
        }

        if let Some(raw) = lookup(constants::ENV_WORK_FACTOR).filter(|s| !s.is_empty()) {
            let log_n = raw.trim().parse::<u8>().map_err(|e| ConfigError::Invalid {
                field: "work_factor",
                reason: format!("{:?}: {}", raw, e),
            })?;
            self.work_factor = Some(log_n);
        }

        Ok(())
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for a work factor outside `1..=30`.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("work_factor", self.work_factor),
            ("max_work_factor", self.max_work_factor),
        ] {
            if let Some(log_n) = value {
                if log_n == 0 || log_n > constants::MAX_WORK_FACTOR {
                    return Err(ConfigError::Invalid {
                        field,
                        reason: format!("{} is outside 1..={}", log_n, constants::MAX_WORK_FACTOR),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Resolved record cache root.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CacheDir` if no cache directory is configured and
    /// the platform has none.
    pub fn cache_root(&self) -> Result<PathBuf> {
        match &self.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::cache_dir()
                .map(|d| d.join(constants::APP_DIR))
                .ok_or_else(|| StoreError::CacheDir.into()),
        }
    }

    /// Cipher configured with this config's work factors.
    pub fn cipher(&self) -> Age {
        let mut cipher = Age::new();
        if let Some(log_n) = self.work_factor {
            cipher = cipher.with_work_factor(log_n);
        }
        if let Some(log_n) = self.max_work_factor {
            cipher = cipher.with_max_work_factor(log_n);
        }
        cipher
    }
}
