// core/common/src/config.rs
// Service configuration read from the process environment (and .env)

use std::net::IpAddr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8090;
pub const DEFAULT_ENVIRONMENT: &str = "test";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "console" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Name of the environment variant to serve (`MCS_ENV`)
    pub environment: String,
    pub log_format: LogFormat,
    pub probe_origins: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            log_format: LogFormat::Json,
            probe_origins: false,
            cors_allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8080".to_string(),
            ],
        }
    }
}

impl ServiceConfig {
    /// Load `.env` (if present) and read the service settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("ENV_SERVICE_HOST") {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| invalid("ENV_SERVICE_HOST", &host))?;
        }

        if let Some(port) = lookup("ENV_SERVICE_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| invalid("ENV_SERVICE_PORT", &port))?;
        }

        if let Some(environment) = lookup("MCS_ENV") {
            let environment = environment.trim();
            if environment.is_empty() {
                return Err(invalid("MCS_ENV", environment));
            }
            config.environment = environment.to_string();
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            config.log_format =
                LogFormat::parse(&format).ok_or_else(|| invalid("LOG_FORMAT", &format))?;
        }

        if let Some(probe) = lookup("ENV_SERVICE_PROBE_ORIGINS") {
            config.probe_origins = match probe.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(invalid("ENV_SERVICE_PROBE_ORIGINS", &probe)),
            };
        }

        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> (IpAddr, u16) {
        (self.host, self.port)
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
