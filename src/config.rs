//! Server configuration: TOML file plus environment overrides

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "pek.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the HTTP API
    pub addr: String,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,
    /// Upper bound on entries in one request's `responses`
    pub max_responses: usize,
    /// Attach the diagnostics block to every /infer response
    pub diagnostics: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            log_filter: "info".to_string(),
            max_responses: 32,
            diagnostics: false,
        }
    }
}

impl ServerConfig {
    /// Load from `path` (or `./pek.toml` if present), then apply env overrides.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok((config, config_path))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// PEK_ADDR, PEK_LOG, PEK_MAX_RESPONSES, PEK_DIAGNOSTICS
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(addr) = env_string("PEK_ADDR") {
            self.addr = addr;
        }
        if let Some(filter) = env_string("PEK_LOG") {
            self.log_filter = filter;
        }
        if let Some(raw) = env_string("PEK_MAX_RESPONSES") {
            self.max_responses = raw
                .parse()
                .map_err(|_| Error::Config(format!("PEK_MAX_RESPONSES must be an integer, got '{}'", raw)))?;
        }
        if let Some(raw) = env_string("PEK_DIAGNOSTICS") {
            self.diagnostics = parse_bool(&raw)
                .ok_or_else(|| Error::Config(format!("PEK_DIAGNOSTICS must be a boolean, got '{}'", raw)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_responses == 0 {
            return Err(Error::Config("max_responses must be at least 1".to_string()));
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.addr.parse().map_err(|source| Error::InvalidAddr {
            addr: self.addr.clone(),
            source,
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    path.exists().then_some(path)
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ServerConfig = toml::from_str("max_responses = 8\ndiagnostics = true\n").unwrap();
        assert_eq!(config.max_responses, 8);
        assert!(config.diagnostics);
        assert_eq!(config.addr, "127.0.0.1:3000");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_zero_max_responses_rejected() {
        let config = ServerConfig {
            max_responses: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_addr_rejected() {
        let config = ServerConfig {
            addr: "not-an-addr".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidAddr { .. })));
    }

    #[test]
    fn test_from_file() {
        let dir = std::env::temp_dir().join(format!("pek_config_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pek.toml");
        std::fs::write(&path, "addr = \"0.0.0.0:8080\"\nlog_filter = \"debug\"\n").unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.max_responses, 32);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
