//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables (a `.env` file is
//!    read into the environment if present)
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `HIREFLOW_DB_PATH`: Database file path
//! - `HIREFLOW_DB_POOL_SIZE`: Connection pool size
//! - `HIREFLOW_CALENDAR_ID`: Calendar to query for busy intervals
//! - `HIREFLOW_CALENDAR_TOKEN`: Bearer token for the calendar API
//! - `HIREFLOW_OPENAI_API_KEY`: API key for the language model
//! - `HIREFLOW_OPENAI_MODEL`: Model identifier (optional)
//! - `HIREFLOW_DEFAULT_TIMEZONE`: Fallback IANA timezone (optional)

use std::path::{Path, PathBuf};

use hireflow_domain::{
    AssistantConfig, CalendarConfig, Config, DatabaseConfig, HireflowError, Result,
};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `HireflowError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<Config> {
    // Hydrate the process environment from .env when present.
    dotenvy::dotenv().ok();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Errors
/// Returns `HireflowError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("HIREFLOW_DB_PATH")?;
    let db_pool_size = env_var("HIREFLOW_DB_POOL_SIZE").and_then(|s| {
        s.parse::<u32>().map_err(|e| HireflowError::Config(format!("Invalid pool size: {}", e)))
    })?;

    let calendar_id = env_var("HIREFLOW_CALENDAR_ID")?;
    let calendar_token = env_var("HIREFLOW_CALENDAR_TOKEN")?;

    let api_key = env_var("HIREFLOW_OPENAI_API_KEY")?;
    let model =
        std::env::var("HIREFLOW_OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let default_timezone =
        std::env::var("HIREFLOW_DEFAULT_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        calendar: CalendarConfig { calendar_id, access_token: calendar_token },
        assistant: AssistantConfig { api_key, model, default_timezone },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `HireflowError::Config` if no file is found, the format is
/// invalid, or required fields are missing.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(HireflowError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            HireflowError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HireflowError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| HireflowError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| HireflowError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(HireflowError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, two parent levels, and the
/// executable's directory for `config.{json,toml}` or
/// `hireflow.{json,toml}`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("hireflow.json"),
            cwd.join("hireflow.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("hireflow.json"),
                exe_dir.join("hireflow.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        HireflowError::Config(format!("Missing required environment variable: {}", key))
    })
}
