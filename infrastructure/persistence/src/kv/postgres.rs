use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, types::Json};

use super::store::{KeyValueStore, StorageError};

pub struct PostgresKeyValueStore {
    pool: PgPool,
}

impl PostgresKeyValueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for PostgresKeyValueStore {
    async fn get(&self, key: &str, default: Value) -> Result<Value, StorageError> {
        let document = sqlx::query_scalar::<_, Json<Value>>("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("kv_store read failed for {key}: {e}");
                StorageError::Read
            })?;

        Ok(document.map(|Json(value)| value).unwrap_or(default))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO kv_store (key, value, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(Json(value))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("kv_store write failed for {key}: {e}");
            StorageError::Write
        })?;

        Ok(())
    }
}
