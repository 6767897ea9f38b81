//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. If no file is found, falls back to the compiled-in defaults
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MULTISYNC_ROSTER_ENDPOINT`: URL of the roster endpoint
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./multisync.json` or `./multisync.toml` (current working directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use multisync_domain::{Config, RosterConfig};
use url::Url;

use crate::errors::InfraError;

type Result<T> = std::result::Result<T, InfraError>;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables, then from a config
/// file, then falls back to [`Config::default`] (the compiled-in roster
/// endpoint).
pub fn load() -> Config {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return config;
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
        }
    }

    match load_from_file(None) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!(error = ?e, "No config file found, using defaults");
            Config::default()
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `InfraError::Config` if `MULTISYNC_ROSTER_ENDPOINT` is not
/// set.
pub fn load_from_env() -> Result<Config> {
    let endpoint = env_var("MULTISYNC_ROSTER_ENDPOINT")?;
    Ok(Config { roster: RosterConfig { endpoint } })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `InfraError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(InfraError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            InfraError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| InfraError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| InfraError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| InfraError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(InfraError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("multisync.json"),
            cwd.join("multisync.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("multisync.json"),
                exe_dir.join("multisync.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Parse the configured roster endpoint into a [`Url`].
///
/// # Errors
/// Returns `InfraError::Config` when the configured value is not a valid
/// URL.
pub fn roster_endpoint(config: &Config) -> Result<Url> {
    Url::parse(&config.roster.endpoint)
        .map_err(|e| InfraError::Config(format!("Invalid roster endpoint: {}", e)))
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| InfraError::Config(format!("Missing required environment variable: {}", key)))
}
