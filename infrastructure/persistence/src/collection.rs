use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::kv::store::KeyValueStore;

/// The per-user collections kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr, strum_macros::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    Ingredients,
    Consumptions,
    DailyStatuses,
}

impl Collection {
    /// Store key for this collection, e.g. `daily_statuses:user-1`.
    pub fn key_for(self, user_id: &UserId) -> String {
        user_id.scoped_key(self.as_ref())
    }
}

/// Reads a whole collection. A missing key is an empty collection.
pub async fn load<E: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<E>, RepositoryError> {
    let document = store
        .get(key, Value::Array(Vec::new()))
        .await
        .map_err(|_| RepositoryError::database_error())?;

    serde_json::from_value(document).map_err(|e| {
        tracing::error!("Stored collection {key} is unreadable: {e}");
        RepositoryError::corrupted()
    })
}

/// Replaces a whole collection.
pub async fn store<E: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    entities: &[E],
) -> Result<(), RepositoryError> {
    let document = serde_json::to_value(entities).map_err(|_| RepositoryError::persistence())?;

    store
        .set(key, document)
        .await
        .map_err(|_| RepositoryError::database_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::memory::InMemoryKeyValueStore;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn should_scope_keys_by_collection_and_user() {
        let user = UserId::new("user-1");

        assert_eq!(Collection::Ingredients.key_for(&user), "ingredients:user-1");
        assert_eq!(Collection::Consumptions.key_for(&user), "consumptions:user-1");
        assert_eq!(Collection::DailyStatuses.key_for(&user), "daily_statuses:user-1");
    }

    #[test]
    fn should_give_each_collection_a_distinct_key() {
        let user = UserId::new("user-1");
        let mut keys: Vec<String> = Collection::iter().map(|c| c.key_for(&user)).collect();
        keys.sort();
        keys.dedup();

        assert_eq!(keys.len(), 3);
    }

    #[tokio::test]
    async fn should_report_corrupted_when_document_is_not_a_list() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("ingredients:user-1", json!({"oops": true})).await.unwrap();

        let result = load::<Value>(&kv, "ingredients:user-1").await;

        assert!(matches!(result, Err(RepositoryError::Corrupted)));
    }
}
