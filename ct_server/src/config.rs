//! Server configuration management.
//!
//! All environment reads happen here, once, at startup. The resulting
//! [`ServerConfig`] is handed to every handler through the application state.

use custom_tracker::config::{DEFAULT_BACKEND_URL, LeaguepediaSettings, RiotApiSettings};
use std::net::SocketAddr;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Riot Tournament API settings
    pub riot: RiotApiSettings,
    /// Leaguepedia backend settings
    pub leaguepedia: LeaguepediaSettings,
    /// Prometheus exporter address, exporter disabled when `None`
    pub metrics_bind: Option<SocketAddr>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `backend_url_override` - Optional Leaguepedia backend override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if an address variable cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        backend_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            bind_override,
            backend_url_override,
        )
    }

    /// Same as [`ServerConfig::from_env`] with an arbitrary variable source.
    ///
    /// Missing Riot settings are not an error here; they are reported by
    /// [`RiotApiSettings::validate`] on every tournament request.
    pub fn from_lookup<F>(
        lookup: F,
        bind_override: Option<SocketAddr>,
        backend_url_override: Option<String>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind = match bind_override {
            Some(addr) => addr,
            None => {
                let value = var("SERVER_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
                parse_addr("SERVER_BIND", &value)?
            }
        };

        let metrics_bind = var("METRICS_BIND")
            .map(|value| parse_addr("METRICS_BIND", &value))
            .transpose()?;

        let riot = RiotApiSettings {
            api_key: var("RIOT_API_KEY"),
            public_base_url: var("PUBLIC_BASE_URL").or_else(|| var("NEXT_PUBLIC_BASE_URL")),
            production: var("APP_ENV").is_some_and(|env| env.eq_ignore_ascii_case("production")),
            host_override: var("RIOT_API_HOST_OVERRIDE"),
        };

        let leaguepedia = LeaguepediaSettings {
            backend_url: backend_url_override
                .or_else(|| var("PYTHON_BACKEND_URL"))
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
        };

        Ok(ServerConfig {
            bind,
            riot,
            leaguepedia,
            metrics_bind,
        })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn parse_addr(var: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e| ConfigError::Invalid {
        var: var.to_string(),
        reason: format!("'{}' is not a socket address ({})", value, e),
    })
}
