use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_value: {name}={value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Reads a variable that has no sensible default.
pub fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVariable(name))
}
