use std::sync::Arc;

use async_trait::async_trait;

use business::domain::daily_status::model::DailyStatus;
use business::domain::daily_status::repository::DailyStatusRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::DailyStatusEntity;
use crate::collection::{self, Collection};
use crate::kv::store::KeyValueStore;

pub struct KvDailyStatusRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvDailyStatusRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DailyStatusRepository for KvDailyStatusRepository {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<DailyStatus>, RepositoryError> {
        let key = Collection::DailyStatuses.key_for(user_id);
        let entities: Vec<DailyStatusEntity> = collection::load(self.store.as_ref(), &key).await?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn save_all(
        &self,
        user_id: &UserId,
        statuses: &[DailyStatus],
    ) -> Result<(), RepositoryError> {
        let key = Collection::DailyStatuses.key_for(user_id);
        let entities: Vec<DailyStatusEntity> =
            statuses.iter().map(DailyStatusEntity::from_domain).collect();

        collection::store(self.store.as_ref(), &key, &entities).await
    }
}
