use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Ingredient;

/// A user's whole ingredient collection, in insertion order.
///
/// Writes replace the full collection; there are no partial updates.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Ingredient>, RepositoryError>;
    async fn save_all(
        &self,
        user_id: &UserId,
        ingredients: &[Ingredient],
    ) -> Result<(), RepositoryError>;
}
