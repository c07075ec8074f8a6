//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SEMSIM_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::embedding::remote::{DEFAULT_PROVIDER_URL, RemoteConfig};

/// How embeddings are produced for incoming texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverStrategy {
    /// Run a local sentence-embedding model loaded at startup.
    Local,
    /// Delegate embedding computation to a remote inference provider.
    Remote,
}

impl ResolverStrategy {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            _ => Err(ConfigError::InvalidStrategy {
                value: value.to_string(),
            }),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SEMSIM_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Embedding resolver strategy. Default: [`ResolverStrategy::Local`].
    pub strategy: ResolverStrategy,

    /// Directory holding the local model (config.json, model.safetensors,
    /// tokenizer.json). Unset means the local embedder runs in stub mode.
    pub model_path: Option<PathBuf>,

    /// Remote embedding provider endpoint URL.
    pub provider_url: String,

    /// Bearer token for the remote provider. Required for the remote strategy.
    pub api_token: Option<String>,

    /// Per-call timeout for remote embedding requests, in seconds. Default: `30`.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            strategy: ResolverStrategy::Local,
            model_path: None,
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            api_token: None,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SEMSIM_PORT";
    const ENV_BIND_ADDR: &'static str = "SEMSIM_BIND_ADDR";
    const ENV_STRATEGY: &'static str = "SEMSIM_STRATEGY";
    const ENV_MODEL_PATH: &'static str = "SEMSIM_MODEL_PATH";
    const ENV_PROVIDER_URL: &'static str = "SEMSIM_PROVIDER_URL";
    const ENV_API_TOKEN: &'static str = "SEMSIM_API_TOKEN";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "SEMSIM_REQUEST_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let strategy = Self::parse_strategy_from_env(defaults.strategy)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let provider_url =
            Self::parse_string_from_env(Self::ENV_PROVIDER_URL, defaults.provider_url);
        let api_token = Self::parse_optional_string_from_env(Self::ENV_API_TOKEN);
        let request_timeout_secs = Self::parse_u64_from_env(
            Self::ENV_REQUEST_TIMEOUT_SECS,
            defaults.request_timeout_secs,
        );

        Ok(Self {
            port,
            bind_addr,
            strategy,
            model_path,
            provider_url,
            api_token,
            request_timeout_secs,
        })
    }

    /// Validates strategy requirements and paths (does not create anything).
    ///
    /// The remote strategy without an API token is startup-fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy == ResolverStrategy::Remote && self.api_token.is_none() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_API_TOKEN,
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Builds the remote resolver configuration, failing if the token is absent.
    pub fn remote_config(&self) -> Result<RemoteConfig, ConfigError> {
        let token = self
            .api_token
            .clone()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_API_TOKEN,
            })?;

        Ok(
            RemoteConfig::new(self.provider_url.clone(), token)
                .with_timeout(Duration::from_secs(self.request_timeout_secs)),
        )
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_strategy_from_env(default: ResolverStrategy) -> Result<ResolverStrategy, ConfigError> {
        match env::var(Self::ENV_STRATEGY) {
            Ok(value) => ResolverStrategy::parse(&value),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
