use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::masquerade::MasqueradeConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::upstream::{PoolKind, UpstreamPool};

/// Main configuration structure for masq-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Masqueraded and internal domain suffixes
    #[serde(default)]
    pub masquerade: MasqueradeConfig,

    /// Special and normal upstream pools
    #[serde(default)]
    pub upstreams: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. masq-dns.toml in current directory
    /// 3. /etc/masq-dns/config.toml
    /// 4. Default configuration
    ///
    /// CLI overrides are applied afterwards and every domain suffix is
    /// normalized before the config is returned.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("masq-dns.toml").exists() {
            Self::from_file("masq-dns.toml")?
        } else if std::path::Path::new("/etc/masq-dns/config.toml").exists() {
            Self::from_file("/etc/masq-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.masquerade.normalize();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen {
            self.server.listen = listen;
        }
        if let Some(domain) = overrides.masqueraded_domain {
            self.masquerade.masqueraded_domain = domain;
        }
        if let Some(domain) = overrides.upstream_domain {
            self.masquerade.upstream_domain = domain;
        }
        if let Some(domains) = overrides.upstream_domains {
            self.masquerade.upstream_domains = domains;
        }
        if let Some(servers) = overrides.upstream_special {
            self.upstreams.special = servers;
        }
        if let Some(servers) = overrides.upstream_normal {
            self.upstreams.normal = servers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Every upstream must parse as `host:port` and neither pool may be empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;

        if self.upstreams.exchange_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "exchange_timeout_ms cannot be 0".to_string(),
            ));
        }

        UpstreamPool::parse(PoolKind::Special, &self.upstreams.special)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        UpstreamPool::parse(PoolKind::Normal, &self.upstreams.normal)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen: Option<String>,
    pub masqueraded_domain: Option<String>,
    pub upstream_domain: Option<String>,
    pub upstream_domains: Option<Vec<String>>,
    pub upstream_special: Option<Vec<String>>,
    pub upstream_normal: Option<Vec<String>>,
    pub log_level: Option<String>,
}
