//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `lumohub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use lumohub_adapter_virtual::VirtualConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Gateway session settings.
    pub gateway: GatewayConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory holding the web client, served for unmatched paths.
    pub static_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Which gateway the daemon talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    /// The simulated gateway from `lumohub-adapter-virtual`.
    Virtual,
    /// No gateway; every command answers 503.
    Disabled,
}

impl std::str::FromStr for GatewayMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "virtual" => Ok(Self::Virtual),
            "disabled" => Ok(Self::Disabled),
            other => Err(ConfigError::Validation(format!(
                "unknown gateway mode {other:?}"
            ))),
        }
    }
}

/// Gateway session configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub mode: GatewayMode,
    /// Code printed on the gateway, exchanged once for credentials.
    pub security_code: String,
    /// Where issued credentials are kept between runs.
    pub credentials_file: PathBuf,
    /// Capacity of the gateway event channel.
    pub event_buffer: usize,
    /// Settings of the simulated gateway.
    #[serde(rename = "virtual")]
    pub virtual_gateway: VirtualConfig,
}

impl Config {
    /// Load configuration from `lumohub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, an
    /// override is not understood, or the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("lumohub.toml")?;
        config.apply_env_overrides()?;
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

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("LUMOHUB_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("LUMOHUB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("LUMOHUB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("LUMOHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("LUMOHUB_GATEWAY_MODE") {
            self.gateway.mode = val.parse()?;
        }
        if let Ok(val) = std::env::var("LUMOHUB_SECURITY_CODE") {
            self.gateway.security_code = val;
        }
        if let Ok(val) = std::env::var("LUMOHUB_CREDENTIALS_FILE") {
            self.gateway.credentials_file = PathBuf::from(val);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.gateway.event_buffer == 0 {
            return Err(ConfigError::Validation(
                "event buffer must be non-zero".to_string(),
            ));
        }
        if self.gateway.mode != GatewayMode::Disabled && self.gateway.security_code.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "security code is required when a gateway is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lumohubd=info,lumohub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: GatewayMode::Virtual,
            security_code: "lumohub".to_string(),
            credentials_file: PathBuf::from("gateway_credentials.json"),
            event_buffer: 256,
            virtual_gateway: VirtualConfig::default(),
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
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
