//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `devicedesk.toml` in the working directory (or the file named by
//! `DEVICEDESK_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use devicedesk_adapter_http_axum::landing::LandingStyle;

const DEFAULT_CONFIG_FILE: &str = "devicedesk.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Application metadata shown to callers.
    pub app: AppConfig,
    /// Device inventory source.
    pub seed: SeedConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// How `/` is rendered.
    pub landing_page: LandingStyle,
}

/// Application metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version string shown on the landing page.
    pub version: String,
}

/// Seed data configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// JSON seed file; the built-in inventory is used when unset.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// environment override cannot be parsed, or if the resulting
    /// configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("DEVICEDESK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
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

    // Runs before logging is initialised, so bad values are errors rather
    // than warnings.
    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("PORT") {
            self.server.port = val.parse().map_err(|_| ConfigError::InvalidOverride {
                key: "PORT",
                value: val,
            })?;
        }
        if let Some(val) = var("DEVICEDESK_LANDING_PAGE") {
            let style = match val.as_str() {
                "text" => Some(LandingStyle::Text),
                "html" => Some(LandingStyle::Html),
                _ => None,
            };
            self.server.landing_page = style.ok_or(ConfigError::InvalidOverride {
                key: "DEVICEDESK_LANDING_PAGE",
                value: val,
            })?;
        }
        if let Some(val) = var("APP_VERSION") {
            self.app.version = val;
        }
        if let Some(val) = var("DEVICEDESK_SEED") {
            self.seed.path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("DEVICEDESK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.app.version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "app version must not be empty".to_string(),
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
            port: 5000,
            landing_page: LandingStyle::Text,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "devicedeskd=info,devicedesk=info,tower_http=debug".to_string(),
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
    /// An environment variable holds a value that cannot be used.
    #[error("invalid value {value:?} for {key}")]
    InvalidOverride { key: &'static str, value: String },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.landing_page, LandingStyle::Text);
        assert_eq!(config.app.version, "1.0");
        assert!(config.seed.path.is_none());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090
            landing_page = 'html'

            [app]
            version = '2.4.0'

            [seed]
            path = '/etc/devicedesk/seed.json'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.landing_page, LandingStyle::Html);
        assert_eq!(config.app.version, "2.4.0");
        assert_eq!(
            config.seed.path,
            Some(PathBuf::from("/etc/devicedesk/seed.json"))
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_apply_port_and_version_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("PORT", "8080"), ("APP_VERSION", "3.1")]))
            .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.app.version, "3.1");
    }

    #[test]
    fn should_reject_unparsable_port() {
        let mut config = Config::default();
        let err = config.apply_overrides(env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOverride { key: "PORT", ref value } if value == "eighty"
        ));
        assert_eq!(err.to_string(), "invalid value \"eighty\" for PORT");
    }

    #[test]
    fn should_reject_unknown_landing_page_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(env(&[("DEVICEDESK_LANDING_PAGE", "pdf")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOverride {
                key: "DEVICEDESK_LANDING_PAGE",
                ..
            }
        ));
    }

    #[test]
    fn should_apply_landing_seed_and_log_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("DEVICEDESK_LANDING_PAGE", "html"),
                ("DEVICEDESK_SEED", "seed.json"),
                ("DEVICEDESK_LOG", "warn"),
            ]))
            .unwrap();
        assert_eq!(config.server.landing_page, LandingStyle::Html);
        assert_eq!(config.seed.path, Some(PathBuf::from("seed.json")));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_rust_log_over_devicedesk_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("DEVICEDESK_LOG", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_blank_version() {
        let mut config = Config::default();
        config.app.version = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_unknown_landing_style_in_toml() {
        let result: Result<Config, _> = toml::from_str("[server]\nlanding_page = 'pdf'");
        assert!(result.is_err());
    }
}
