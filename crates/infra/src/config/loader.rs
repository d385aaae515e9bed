//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `HIREFLOW_BIND_ADDR`: Socket address for the HTTP server
//! - `HIREFLOW_DB_PATH`: Database file path
//! - `HIREFLOW_DB_POOL_SIZE`: Connection pool size
//! - `HIREFLOW_SMTP_HOST`: SMTP relay host
//! - `HIREFLOW_SMTP_PORT`: SMTP relay port
//! - `HIREFLOW_SMTP_USERNAME`: SMTP username
//! - `HIREFLOW_SMTP_PASSWORD`: SMTP password
//! - `HIREFLOW_SMTP_FROM_ADDRESS`: From address for outbound mail
//! - `HIREFLOW_SMTP_FROM_NAME`: From display name (optional)
//! - `HIREFLOW_GOOGLE_CLIENT_ID`: OAuth client id
//! - `HIREFLOW_GOOGLE_REDIRECT_URI`: Registered OAuth redirect URI
//! - `HIREFLOW_FRONTEND_URL`: Frontend origin for CORS and redirects
//! - `HIREFLOW_CALENDAR_TIMEOUT_SECS`: Calendar call deadline (optional)
//! - `HIREFLOW_NOTIFY_TIMEOUT_SECS`: Notification deadline (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./hireflow.json` or `./hireflow.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use hireflow_domain::{
    Config, DatabaseConfig, FrontendConfig, GoogleConfig, HireflowError, HttpConfig, Result,
    SmtpConfig, WorkflowConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `HireflowError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
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
/// if any are missing. See module documentation for the complete list.
pub fn load_from_env() -> Result<Config> {
    let bind_addr = env_var("HIREFLOW_BIND_ADDR")?;

    let db_path = env_var("HIREFLOW_DB_PATH")?;
    let db_pool_size = env_var("HIREFLOW_DB_POOL_SIZE").and_then(|s| {
        s.parse::<u32>().map_err(|e| HireflowError::Config(format!("Invalid pool size: {e}")))
    })?;

    let smtp_enabled = env_bool("HIREFLOW_SMTP_ENABLED", true);
    let smtp_host = env_var("HIREFLOW_SMTP_HOST")?;
    let smtp_port = env_var("HIREFLOW_SMTP_PORT").and_then(|s| {
        s.parse::<u16>().map_err(|e| HireflowError::Config(format!("Invalid SMTP port: {e}")))
    })?;
    let smtp_username = env_var("HIREFLOW_SMTP_USERNAME")?;
    let smtp_password = env_var("HIREFLOW_SMTP_PASSWORD")?;
    let smtp_from_address = env_var("HIREFLOW_SMTP_FROM_ADDRESS")?;
    let smtp_from_name = std::env::var("HIREFLOW_SMTP_FROM_NAME")
        .unwrap_or_else(|_| "Interview Scheduler".to_string());

    let google_client_id = env_var("HIREFLOW_GOOGLE_CLIENT_ID")?;
    let google_redirect_uri = env_var("HIREFLOW_GOOGLE_REDIRECT_URI")?;

    let frontend_url = env_var("HIREFLOW_FRONTEND_URL")?;

    let defaults = WorkflowConfig::default();
    let calendar_timeout_secs =
        env_u64("HIREFLOW_CALENDAR_TIMEOUT_SECS", defaults.calendar_timeout_secs)?;
    let notify_timeout_secs = env_u64("HIREFLOW_NOTIFY_TIMEOUT_SECS", defaults.notify_timeout_secs)?;

    Ok(Config {
        http: HttpConfig { bind_addr },
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        smtp: SmtpConfig {
            enabled: smtp_enabled,
            host: smtp_host,
            port: smtp_port,
            username: smtp_username,
            password: smtp_password,
            from_address: smtp_from_address,
            from_name: smtp_from_name,
        },
        google: GoogleConfig { client_id: google_client_id, redirect_uri: google_redirect_uri },
        frontend: FrontendConfig { url: frontend_url },
        workflow: WorkflowConfig { calendar_timeout_secs, notify_timeout_secs },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
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
            HireflowError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HireflowError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| HireflowError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| HireflowError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(HireflowError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
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
    std::env::var(key)
        .map_err(|_| HireflowError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

/// Parse an optional numeric environment variable, falling back to a default.
fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| HireflowError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}
