use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::provider::{ProviderConfig, ProviderKind};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-dnslink.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-dnslink/config.toml";

/// Main configuration structure for Ferrous DNSLink
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Naming provider that answers lookups
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dnslink.toml in current directory
    /// 3. /etc/ferrous-dnslink/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(rpc_url) = overrides.rpc_url {
            self.provider.rpc_url = Some(rpc_url);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.provider.text_key.is_empty() {
            return Err(ConfigError::Validation(
                "Text record key cannot be empty".to_string(),
            ));
        }

        match self.provider.kind {
            ProviderKind::Ens => {
                let has_rpc_url = self
                    .provider
                    .rpc_url
                    .as_deref()
                    .is_some_and(|url| !url.trim().is_empty());
                if !has_rpc_url {
                    return Err(ConfigError::Validation(
                        "ENS provider requires an RPC URL".to_string(),
                    ));
                }
                if self.provider.request_timeout == 0 {
                    return Err(ConfigError::Validation(
                        "Request timeout cannot be 0".to_string(),
                    ));
                }
            }
            ProviderKind::Static => {
                for record in &self.provider.records {
                    if record.domain.is_empty() || record.url.is_empty() {
                        return Err(ConfigError::Validation(format!(
                            "Static record '{}' needs both a domain and a url",
                            record.domain
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub rpc_url: Option<String>,
    pub log_level: Option<String>,
}
