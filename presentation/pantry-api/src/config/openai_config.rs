use std::time::Duration;

use super::error::ConfigError;

const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 20;

/// Configuration for OpenAI API access.
///
/// Without an API key label extraction is disabled and always yields no draft.
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub extraction_timeout: Duration,
}

impl OpenAIConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let timeout = std::env::var("LABEL_EXTRACTION_TIMEOUT_SECS").ok();

        Ok(Self {
            api_key,
            extraction_timeout: parse_timeout(timeout.as_deref())?,
        })
    }
}

fn parse_timeout(value: Option<&str>) -> Result<Duration, ConfigError> {
    let Some(raw) = value else {
        return Ok(Duration::from_secs(DEFAULT_EXTRACTION_TIMEOUT_SECS));
    };

    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or(ConfigError::InvalidValue {
            name: "LABEL_EXTRACTION_TIMEOUT_SECS",
            value: raw.to_string(),
        })
}
