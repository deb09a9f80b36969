//! Configuration management

use serde::{Deserialize, Serialize};

/// Environment variable holding the VulnCheck bearer token
pub const TOKEN_ENV_VAR: &str = "VULNCHECK_API_TOKEN";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// VulnCheck API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub scheme: String,
    pub host: String,
    /// Path prefix shared by every endpoint, e.g. "/v3"
    pub base_path: String,
    /// Bearer token. Falls back to `VULNCHECK_API_TOKEN` when unset.
    pub token: Option<String>,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: "api.vulncheck.com".to_string(),
            base_path: "/v3".to_string(),
            token: None,
            timeout_seconds: 30,
            user_agent: format!("vulncheck-harness/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl ApiConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash
    pub fn base_url(&self) -> String {
        let base_path = self.base_path.trim_matches('/');
        if base_path.is_empty() {
            format!("{}://{}", self.scheme, self.host)
        } else {
            format!("{}://{}/{}", self.scheme, self.host, base_path)
        }
    }

    /// Token with empty values treated as absent
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));

        // Override with environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        let mut config: Self = builder
            .add_source(config::Environment::with_prefix("VULNCHECK").separator("__"))
            .build()?
            .try_deserialize()?;

        if config.api.bearer_token().is_none() {
            config.api.token = std::env::var(TOKEN_ENV_VAR).ok();
        }

        Ok(config)
    }
}
