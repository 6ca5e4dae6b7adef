//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `JWT_SECRET` - HMAC signing secret for issued tokens
//! - `ADMIN_PASSWORD` - Password for the built-in admin credential
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TOKEN_TTL_HOURS` - Token lifetime in hours (default: 24)
//! - `REQUEST_TIMEOUT_SECONDS` - Per-request deadline (default: 30)
//! - `TASK_QUEUE_CAPACITY` - Automation task buffer size (default: 1024, min: 16)
//! - `ADMIN_EMAIL` - Email for the built-in admin credential
//!   (default: `admin@riggerconnect.com`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HMAC signing secret for issued tokens. Must be non-empty.
    pub jwt_secret: String,
    /// Token lifetime; verification uses exact expiry with no leeway.
    pub token_ttl_hours: i64,
    pub request_timeout_seconds: u64,
    /// Automation task buffer size; a full buffer rejects intake rather than
    /// blocking requests.
    pub task_queue_capacity: usize,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` or `ADMIN_PASSWORD` is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let task_queue_capacity = env::var("TASK_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@riggerconnect.com".to_string());
        let admin_password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            jwt_secret,
            token_ttl_hours,
            request_timeout_seconds,
            task_queue_capacity,
            admin_email,
            admin_password,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `jwt_secret` or `admin_password` is empty
    /// - `token_ttl_hours` is outside 1..=168
    /// - `task_queue_capacity` is outside 16..=1000000
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        if self.admin_password.is_empty() {
            anyhow::bail!("ADMIN_PASSWORD must not be empty");
        }

        if !self.admin_email.contains('@') {
            anyhow::bail!("ADMIN_EMAIL must be an email address, got '{}'", self.admin_email);
        }

        if self.token_ttl_hours < 1 || self.token_ttl_hours > 168 {
            anyhow::bail!(
                "TOKEN_TTL_HOURS must be between 1 and 168, got {}",
                self.token_ttl_hours
            );
        }

        if self.request_timeout_seconds == 0 || self.request_timeout_seconds > 300 {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.request_timeout_seconds
            );
        }

        if self.task_queue_capacity < 16 {
            anyhow::bail!(
                "TASK_QUEUE_CAPACITY must be at least 16, got {}",
                self.task_queue_capacity
            );
        }

        if self.task_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "TASK_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.task_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Token TTL: {}h", self.token_ttl_hours);
        tracing::info!("  Request timeout: {}s", self.request_timeout_seconds);
        tracing::info!("  Task queue capacity: {}", self.task_queue_capacity);
        tracing::info!("  Admin email: {}", self.admin_email);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
