use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::store::{KeyValueStore, StorageError};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str, default: Value) -> Result<Value, StorageError> {
        let documents = self.documents.read().await;
        Ok(documents.get(key).cloned().unwrap_or(default))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.documents.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn should_return_default_when_key_never_written() {
        let store = InMemoryKeyValueStore::new();

        let value = store.get("ingredients:user-1", json!([])).await.unwrap();

        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn should_replace_document_on_set() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", json!([1, 2])).await.unwrap();

        store.set("k", json!([3])).await.unwrap();

        assert_eq!(store.get("k", json!([])).await.unwrap(), json!([3]));
    }

    #[tokio::test]
    async fn should_keep_keys_independent() {
        let store = InMemoryKeyValueStore::new();
        store.set("ingredients:a", json!(["a"])).await.unwrap();

        let other = store.get("ingredients:b", json!([])).await.unwrap();

        assert_eq!(other, json!([]));
    }
}
