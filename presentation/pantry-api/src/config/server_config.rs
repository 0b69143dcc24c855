use std::env;

use super::error::ConfigError;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener address, from `SERVICE_IP` and `SERVICE_PORT`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let ip = env::var("SERVICE_IP")
            .ok()
            .filter(|ip| !ip.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = parse_port(env::var("SERVICE_PORT").ok().as_deref())?;

        Ok(Self { ip, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(value: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = value else {
        return Ok(DEFAULT_PORT);
    };

    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port > 0)
        .ok_or(ConfigError::InvalidValue {
            name: "SERVICE_PORT",
            value: raw.to_string(),
        })
}
