use serde::Deserialize;
use service_core::config::{self as core_config, get_env, is_production};
use service_core::error::AppError;
use std::env;

pub const SERVICE_NAME: &str = "gopay-service";

#[derive(Debug, Clone, Deserialize)]
pub struct GopayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// OTLP collector; traces are only exported when set.
    pub otlp_endpoint: Option<String>,
}

impl GopayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = is_production();

        Ok(GopayConfig {
            common,
            server: ServerConfig {
                host: get_env("GOPAY_SERVICE_HOST", Some("0.0.0.0"), is_prod)?,
            },
            observability: ObservabilityConfig {
                log_level: get_env(
                    "GOPAY_LOG_LEVEL",
                    Some("info,gopay_service=debug"),
                    is_prod,
                )?,
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            },
            service_name: SERVICE_NAME.to_string(),
        })
    }

    /// Local settings on the given port, for tests and tooling.
    pub fn local(port: u16) -> Self {
        GopayConfig {
            common: core_config::Config { port },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
            service_name: SERVICE_NAME.to_string(),
        }
    }

    pub fn port(&self) -> u16 {
        self.common.port
    }
}
