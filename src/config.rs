use std::env;
use anyhow::{Context, Result};

/// Version reported by `GET /version`
pub const VERSION: &str = "1.0.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub version: String,
    pub service_port: u16,
    pub service_host: String,
    pub docs_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let docs_enabled = match env::var("SERVICE_DOCS") {
            Ok(value) => parse_flag(&value)
                .with_context(|| format!("SERVICE_DOCS must be a boolean flag, got '{}'", value))?,
            Err(_) => true,
        };

        Ok(Config {
            version: VERSION.to_string(),
            service_port,
            service_host,
            docs_enabled,
        })
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Version: {}", self.version);
        tracing::info!("  API docs: {}", if self.docs_enabled { "enabled" } else { "disabled" });
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: VERSION.to_string(),
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
            docs_enabled: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
