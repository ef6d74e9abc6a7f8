//! Server configuration from a TOML file and environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "HOURS_CONFIG";
/// File looked up in the working directory when `HOURS_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "hours.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("invalid bind address '{0}'")]
    InvalidAddress(String),
}

/// Where [`ServerConfig::load`] takes its file settings from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl ConfigSource {
    /// `$HOURS_CONFIG` when set, otherwise `./hours.toml` when present.
    pub fn detect() -> Self {
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::File(PathBuf::from(path)),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::File(PathBuf::from(DEFAULT_CONFIG_FILE))
            }
            Err(_) => Self::Defaults,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("defaults"),
        }
    }
}

/// HTTP server settings.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// port = 9000
/// allowed_origins = ["https://example.com"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: String,
    /// TCP port (default: 8080)
    pub port: u16,
    /// Path prefix for all API routes (default: /api)
    pub api_prefix: String,
    /// CORS origins; empty allows any origin
    pub allowed_origins: Vec<String>,
    /// Debug-level logging when `RUST_LOG` is unset
    pub debug: bool,
    /// Maximum accepted request body size in bytes (default: 1 MiB)
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_prefix: "/api".to_string(),
            allowed_origins: Vec::new(),
            debug: false,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Load defaults, then the config file (if any), then environment overrides.
    ///
    /// The file is `$HOURS_CONFIG` when set (and must exist), otherwise
    /// `hours.toml` in the working directory when present.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`, `API_PREFIX`
    /// - `ALLOWED_HOSTS`: comma-separated CORS origins
    /// - `DEBUG`: `true`/`false`/`1`/`0`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_source().map(|(config, _)| config)
    }

    /// Like [`load`](Self::load), also returning the file source used.
    ///
    /// Binaries that install their logger from the loaded settings log the
    /// source themselves once the logger is up.
    pub fn load_with_source() -> Result<(Self, ConfigSource), ConfigError> {
        let source = ConfigSource::detect();
        let config = match &source {
            ConfigSource::File(path) => Self::from_file(path)?,
            ConfigSource::Defaults => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        Ok((config.with_overrides(|var| env::var(var).ok())?, source))
    }

    /// Read settings from a TOML file; missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ServerConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config.normalized())
    }

    /// Apply overrides from `lookup` (normally the process environment).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: "PORT", value: port })?;
        }
        if let Some(prefix) = lookup("API_PREFIX") {
            self.api_prefix = prefix;
        }
        if let Some(hosts) = lookup("ALLOWED_HOSTS") {
            self.allowed_origins = hosts
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(debug) = lookup("DEBUG") {
            self.debug = parse_bool(&debug)
                .ok_or(ConfigError::InvalidEnv { var: "DEBUG", value: debug })?;
        }

        Ok(self.normalized())
    }

    /// Socket address to bind.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }

    /// Ensure the prefix is either empty or `/segment` without a trailing slash.
    fn normalized(mut self) -> Self {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        self.api_prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_prefix, "/api");
        assert!(config.allowed_origins.is_empty());
        assert!(!config.debug);
    }

    #[test]
    fn test_overrides_replace_fields() {
        let config = ServerConfig::default()
            .with_overrides(lookup_from(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "9000"),
                ("ALLOWED_HOSTS", "https://a.example, https://b.example,"),
                ("DEBUG", "True"),
            ]))
            .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(config.debug);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::default()
            .with_overrides(lookup_from(&[("PORT", "not-a-port")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "PORT", .. }));
    }

    #[test]
    fn test_invalid_debug_flag_is_rejected() {
        let err = ServerConfig::default()
            .with_overrides(lookup_from(&[("DEBUG", "maybe")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid value for DEBUG: 'maybe'");
    }

    #[test]
    fn test_prefix_is_normalized() {
        let config = ServerConfig::default()
            .with_overrides(lookup_from(&[("API_PREFIX", "v1/")]))
            .unwrap();
        assert_eq!(config.api_prefix, "/v1");

        let config = ServerConfig::default()
            .with_overrides(lookup_from(&[("API_PREFIX", "/")]))
            .unwrap();
        assert_eq!(config.api_prefix, "");
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address().unwrap().port(), 3000);

        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.bind_address(), Err(ConfigError::InvalidAddress(_))));
    }

    #[test]
    fn test_toml_keeps_defaults_for_missing_keys() {
        let config: ServerConfig = toml::from_str("port = 9100\ndebug = true\n").unwrap();
        assert_eq!(config.port, 9100);
        assert!(config.debug);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.api_prefix, "/api");
    }
}
