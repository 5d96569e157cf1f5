//! Configuration management for the application.
//!
//! Settings are built once at start-up and handed to the components that need
//! them. Sources are layered, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (if present)
//! 3. `config/{APP_ENV}.toml` (if present, `APP_ENV` defaults to `development`)
//! 4. Environment variables prefixed with `APP_` (`APP_SERVER__PORT=3000`)
//! 5. The flat variables used by existing deployments:
//!    `SERVER_ADDRESS`, `SERVER_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_CONNECT_STRING`
//!
//! ## Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [database]
//! user = "reporting"
//! connect_string = "postgres://db.internal:5432/hospital"
//! connect_timeout_seconds = 10
//!
//! [telemetry]
//! json_logging = true
//! log_level = "info"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Flat variables honoured on top of the layered sources, with the key each
/// one overrides.
const LEGACY_VARS: [(&str, &str); 5] = [
    ("SERVER_ADDRESS", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_CONNECT_STRING", "database.connect_string"),
];

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Database configuration
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Login user, overriding any user embedded in the connect string
    #[serde(default)]
    pub user: Option<String>,

    /// Login password, overriding any password embedded in the connect string
    #[serde(default)]
    pub password: Option<String>,

    /// Connection URL (`postgres://host:port/database`)
    #[serde(default)]
    pub connect_string: String,

    /// Upper bound on opening a connection, in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Session `statement_timeout` in seconds; unset leaves queries unbounded
    #[serde(default)]
    pub statement_timeout_seconds: Option<u64>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_service_name() -> String {
    "hospital-query-api".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: None,
            password: None,
            connect_string: String::new(),
            connect_timeout_seconds: default_connect_timeout(),
            statement_timeout_seconds: None,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: false,
            log_level: default_log_level(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("connect_string", &self.connect_string)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .field("statement_timeout_seconds", &self.statement_timeout_seconds)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment and configuration files.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hospital_query_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Server will run on {}", config.server_address());
    /// ```
    pub fn load() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::load_from_env(&vars)
    }

    /// Load configuration using `vars` in place of the process environment.
    pub fn load_from_env(vars: &HashMap<String, String>) -> Result<Self> {
        let env = vars
            .get("APP_ENV")
            .map(String::as_str)
            .unwrap_or("development");

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            );

        for (var, key) in LEGACY_VARS {
            builder = builder
                .set_override_option(key, vars.get(var).cloned())
                .with_context(|| format!("Failed to apply {}", var))?;
        }

        let app_config: AppConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.database.connect_string.trim().is_empty() {
            anyhow::bail!("Database connect string is required");
        }

        if self.database.connect_timeout_seconds == 0 {
            anyhow::bail!("Database connect timeout must be greater than 0");
        }

        if self.database.statement_timeout_seconds == Some(0) {
            anyhow::bail!("Database statement timeout must be greater than 0 when set");
        }

        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                VALID_LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Get server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    /// Get the connect timeout as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Get the statement timeout as a Duration, if configured
    pub fn statement_timeout(&self) -> Option<Duration> {
        self.statement_timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_with_connect_string() {
        let config = AppConfig::load_from_env(&vars(&[(
            "APP_DATABASE__CONNECT_STRING",
            "postgres://localhost:5432/hospital",
        )]))
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.database.statement_timeout(), None);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.json_logging);
    }

    #[test]
    fn test_prefixed_variables() {
        let config = AppConfig::load_from_env(&vars(&[
            ("APP_SERVER__PORT", "8081"),
            ("APP_DATABASE__CONNECT_STRING", "postgres://db/hospital"),
            ("APP_DATABASE__STATEMENT_TIMEOUT_SECONDS", "15"),
            ("APP_TELEMETRY__LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(
            config.database.statement_timeout(),
            Some(Duration::from_secs(15))
        );
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn test_legacy_variables_override() {
        let config = AppConfig::load_from_env(&vars(&[
            ("APP_SERVER__PORT", "8081"),
            ("SERVER_ADDRESS", "127.0.0.1"),
            ("SERVER_PORT", "3333"),
            ("DB_USER", "reporting"),
            ("DB_PASSWORD", "secret"),
            ("DB_CONNECT_STRING", "postgres://db.internal/hospital"),
        ]))
        .unwrap();

        assert_eq!(config.server_address(), "127.0.0.1:3333");
        assert_eq!(config.database.user.as_deref(), Some("reporting"));
        assert_eq!(config.database.password.as_deref(), Some("secret"));
        assert_eq!(config.database.connect_string, "postgres://db.internal/hospital");
    }

    #[test]
    fn test_missing_connect_string_rejected() {
        let err = AppConfig::load_from_env(&HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("connect string"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = AppConfig::default();
        config.database.connect_string = "postgres://db/hospital".to_string();
        config.telemetry.log_level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.telemetry.log_level = "warn".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_password_redacted_in_debug() {
        let config = DatabaseConfig {
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
