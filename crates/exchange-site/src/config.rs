// File: src/config.rs
// Purpose: Configuration parsing from exchange-site.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "exchange-site.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Routing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoutingConfig {
    /// Whether literal segments match ignoring ASCII case (default: false)
    #[serde(default)]
    pub case_insensitive: bool,

    /// Base path the site is mounted under (e.g., "/app")
    #[serde(default)]
    pub base_path: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `exchange-site.toml` from the working directory, or defaults if absent
    pub fn load_default() -> Result<Self> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load(DEFAULT_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies `EXCHANGE_SITE_HOST` / `EXCHANGE_SITE_PORT` overrides
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(
            std::env::var("EXCHANGE_SITE_HOST").ok(),
            std::env::var("EXCHANGE_SITE_PORT").ok(),
        )
    }

    fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .with_context(|| format!("EXCHANGE_SITE_PORT is not a port: {:?}", port))?;
        }
        Ok(self)
    }

    /// Base path, or `/` when none is configured
    pub fn base_path(&self) -> &str {
        self.routing.base_path.as_deref().unwrap_or("/")
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.routing.case_insensitive);
        assert_eq!(config.base_path(), "/");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = SiteConfig::from_toml(
            r#"
            [server]
            port = 8080

            [routing]
            base_path = "/app"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.base_path(), "/app");
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SiteConfig::from_toml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(SiteConfig::from_toml("[server]\nport = \"x\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::default()
            .with_overrides(Some("0.0.0.0".into()), Some("9000".into()))
            .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:9000");

        assert!(SiteConfig::default()
            .with_overrides(None, Some("nope".into()))
            .is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = SiteConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
