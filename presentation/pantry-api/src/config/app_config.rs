use super::{
    cors_config, error::ConfigError, firebase_config::FirebaseConfig,
    openai_config::OpenAIConfig, server_config::ServerConfig, storage_config::StorageBackend,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageBackend,
    pub firebase: FirebaseConfig,
    pub openai: OpenAIConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            storage: StorageBackend::from_env()?,
            firebase: FirebaseConfig::from_env()?,
            openai: OpenAIConfig::from_env()?,
        })
    }
}
