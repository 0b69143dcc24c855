use std::sync::Arc;

use async_trait::async_trait;

use business::domain::consumption::model::ConsumptionRecord;
use business::domain::consumption::repository::ConsumptionRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::ConsumptionEntity;
use crate::collection::{self, Collection};
use crate::kv::store::KeyValueStore;

pub struct KvConsumptionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvConsumptionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ConsumptionRepository for KvConsumptionRepository {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ConsumptionRecord>, RepositoryError> {
        let key = Collection::Consumptions.key_for(user_id);
        let entities: Vec<ConsumptionEntity> = collection::load(self.store.as_ref(), &key).await?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn save_all(
        &self,
        user_id: &UserId,
        records: &[ConsumptionRecord],
    ) -> Result<(), RepositoryError> {
        let key = Collection::Consumptions.key_for(user_id);
        let entities: Vec<ConsumptionEntity> =
            records.iter().map(ConsumptionEntity::from_domain).collect();

        collection::store(self.store.as_ref(), &key, &entities).await
    }
}
