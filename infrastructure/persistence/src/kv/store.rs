use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.read_error")]
    Read,
    #[error("storage.write_error")]
    Write,
}

/// Durable string-keyed store of JSON documents.
///
/// `get` falls back to `default` when nothing was ever written under the key.
/// `set` replaces the whole document.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str, default: Value) -> Result<Value, StorageError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}
