use std::env;

use super::error::{ConfigError, required};

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Where the key-value store lives.
///
/// Environment variables:
/// - STORAGE_BACKEND: "postgres" (default) or "memory"
/// - DATABASE_URL: PostgreSQL connection string (required for postgres)
/// - MIGRATIONS_PATH: migrations directory (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Postgres {
        database_url: String,
        migrations_path: String,
    },
    Memory,
}

impl StorageBackend {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = env::var("STORAGE_BACKEND").ok();
        match parse_backend_name(backend.as_deref())? {
            BackendName::Memory => Ok(StorageBackend::Memory),
            BackendName::Postgres => Ok(StorageBackend::Postgres {
                database_url: required("DATABASE_URL")?,
                migrations_path: env::var("MIGRATIONS_PATH")
                    .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string()),
            }),
        }
    }
}

#[derive(Debug, PartialEq)]
enum BackendName {
    Postgres,
    Memory,
}

fn parse_backend_name(value: Option<&str>) -> Result<BackendName, ConfigError> {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        None | Some("") | Some("postgres") => Ok(BackendName::Postgres),
        Some("memory") => Ok(BackendName::Memory),
        Some(other) => Err(ConfigError::InvalidValue {
            name: "STORAGE_BACKEND",
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_postgres_when_backend_unset() {
        assert_eq!(parse_backend_name(None), Ok(BackendName::Postgres));
        assert_eq!(parse_backend_name(Some(" ")), Ok(BackendName::Postgres));
    }

    #[test]
    fn should_accept_memory_backend_case_insensitively() {
        assert_eq!(parse_backend_name(Some("Memory")), Ok(BackendName::Memory));
    }

    #[test]
    fn should_reject_unknown_backend() {
        let result = parse_backend_name(Some("redis"));

        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                name: "STORAGE_BACKEND",
                value: "redis".to_string(),
            })
        );
    }
}
