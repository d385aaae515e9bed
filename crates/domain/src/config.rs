//! Application configuration structures.
//!
//! Every ambient dependency (database path, SMTP credentials, OAuth client
//! id, frontend origin) is explicit configuration handed to component
//! constructors; nothing reads the environment after startup.

use serde::{Deserialize, Serialize};

/// Configuration for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub smtp: SmtpConfig,
    pub google: GoogleConfig,
    pub frontend: FrontendConfig,
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Socket address to bind, e.g. `127.0.0.1:8080`.
    pub bind_addr: String,
}

/// SQLite settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

/// Outbound mail transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// When false, notifications are logged instead of sent.
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Address used in the `From` header.
    pub from_address: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

/// Google OAuth settings. Only the consent URL is ever built from these;
/// the code exchange is stubbed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    pub client_id: String,
    /// Redirect URI registered with the provider, e.g.
    /// `http://localhost:8080/api/auth/google-callback`.
    pub redirect_uri: String,
}

/// Frontend origin, used for CORS and post-login redirects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub url: String,
}

/// Deadlines applied to network-bound workflow steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default = "default_calendar_timeout")]
    pub calendar_timeout_secs: u64,
    #[serde(default = "default_notify_timeout")]
    pub notify_timeout_secs: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            calendar_timeout_secs: default_calendar_timeout(),
            notify_timeout_secs: default_notify_timeout(),
        }
    }
}

fn default_from_name() -> String {
    "Interview Scheduler".to_string()
}

fn default_true() -> bool {
    true
}

fn default_calendar_timeout() -> u64 {
    10
}

fn default_notify_timeout() -> u64 {
    30
}
