//! Constants used throughout secexport.
//!
//! Centralizes magic strings and configuration values.

/// Directory name under the user cache and config roots.
pub const APP_DIR: &str = "secexport";

/// Configuration file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Overrides the config file location.
pub const ENV_CONFIG: &str = "SECEXPORT_CONFIG";

/// Overrides the record cache root.
pub const ENV_CACHE_DIR: &str = "SECEXPORT_CACHE_DIR";

/// Overrides the scrypt work factor used for new records.
pub const ENV_WORK_FACTOR: &str = "SECEXPORT_WORK_FACTOR";

/// Password source when `-p` is not given.
pub const ENV_PASSWORD: &str = "SECEXPORT_PASSWORD";

/// Log filter (tracing `EnvFilter` syntax).
pub const ENV_LOG: &str = "SECEXPORT_LOG";

/// Highest scrypt work factor accepted from configuration.
pub const MAX_WORK_FACTOR: u8 = 30;
