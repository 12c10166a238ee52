//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `corpdash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use corpdash_domain::catalog;
use corpdash_domain::clock::DateLocale;
use corpdash_domain::credential::{Credential, CredentialPolicy};
use corpdash_domain::error::ValidationError;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Static browser bundle.
    pub assets: AssetsConfig,
    /// Login console settings.
    pub auth: AuthConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Static assets configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served under `/assets`; nothing is served when unset.
    pub dir: Option<PathBuf>,
}

/// Login console configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Opened after a successful login.
    pub portal_url: String,
    /// Locale of the clock and date stamps.
    pub locale: DateLocale,
    /// Accepted accounts. The built-in demo accounts are used when unset.
    pub credentials: Option<Vec<Credential>>,
}

impl Config {
    /// Load configuration from `corpdash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("corpdash.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CORPDASH_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("CORPDASH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("CORPDASH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("CORPDASH_ASSETS") {
            self.assets.dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("CORPDASH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.auth.portal_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "portal_url must not be empty".to_string(),
            ));
        }
        self.policy()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the credential policy of the login console.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Credentials`] for blank or duplicate accounts.
    pub fn policy(&self) -> Result<CredentialPolicy, ConfigError> {
        match &self.auth.credentials {
            Some(credentials) => Ok(CredentialPolicy::new(credentials.clone())?),
            None => Ok(CredentialPolicy::default()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "corpdashd=info,corpdash=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            portal_url: catalog::PORTAL_URL.to_string(),
            locale: DateLocale::default(),
            credentials: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Invalid credential list.
    #[error("invalid credentials")]
    Credentials(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
