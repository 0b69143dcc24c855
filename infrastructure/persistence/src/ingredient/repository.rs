use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::repository::IngredientRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::IngredientEntity;
use crate::collection::{self, Collection};
use crate::kv::store::KeyValueStore;

pub struct KvIngredientRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvIngredientRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IngredientRepository for KvIngredientRepository {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Ingredient>, RepositoryError> {
        let key = Collection::Ingredients.key_for(user_id);
        let entities: Vec<IngredientEntity> = collection::load(self.store.as_ref(), &key).await?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn save_all(
        &self,
        user_id: &UserId,
        ingredients: &[Ingredient],
    ) -> Result<(), RepositoryError> {
        let key = Collection::Ingredients.key_for(user_id);
        let entities: Vec<IngredientEntity> =
            ingredients.iter().map(IngredientEntity::from_domain).collect();

        collection::store(self.store.as_ref(), &key, &entities).await
    }
}
